use crate::{error::Error, params::Params, salsa::salsa20_8};

const BLOCK_LEN: usize = 64;
const SUPER_BLOCK_UNIT: usize = 2 * BLOCK_LEN;

/// Shuffles a super block of `2 * r` Salsa blocks through the scrypt
/// BlockMix function, in place.
///
/// The length of `block` must be a positive multiple of 128.
pub fn block_mix(block: &mut [u8]) -> Result<(), Error> {
    super_block_r(block.len())?;
    let input = block.to_vec();
    scrypt_block_mix(&input, block);
    Ok(())
}

/// Runs the sequential memory-hard ROMix function over a super block, in
/// place, with cost parameter `n`.
///
/// The length of `block` must be a positive multiple of 128, and `n` must
/// be a power of two greater than one (small block sizes cap it further,
/// see [`Params::new`]). The working memory of `n` super blocks is
/// allocated here and released before returning.
pub fn ro_mix(block: &mut [u8], n: u32) -> Result<(), Error> {
    let r = super_block_r(block.len())?;
    let r = u32::try_from(r)
        .map_err(|_| Error::InvalidParameter("block size parameter is too large"))?;
    Params::new(n, r, 1)?;
    scrypt_ro_mix(block, n as usize);
    Ok(())
}

const fn super_block_r(len: usize) -> Result<usize, Error> {
    if len == 0 || len % SUPER_BLOCK_UNIT != 0 {
        return Err(Error::InvalidParameter(
            "block length must be a positive multiple of 128",
        ));
    }
    Ok(len / SUPER_BLOCK_UNIT)
}

#[allow(clippy::many_single_char_names)]
pub(crate) fn scrypt_ro_mix(b: &mut [u8], n: usize) {
    fn integerify(x: &[u8], n: usize) -> usize {
        let mask = n - 1;
        let t = u32::from_le_bytes(x[x.len() - 64..x.len() - 60].try_into().unwrap());
        (t as usize) & mask
    }
    let len = b.len();
    let mut v = vec![0; n * len];
    let mut t = vec![0; len];
    for chunk in v.chunks_mut(len) {
        chunk.copy_from_slice(b);
        scrypt_block_mix(chunk, b);
    }
    for _ in 0..n {
        let j = integerify(b, n);
        xor(b, &v[j * len..(j + 1) * len], &mut t);
        scrypt_block_mix(&t, b);
    }
}

fn scrypt_block_mix(input: &[u8], output: &mut [u8]) {
    let mut x = [0; BLOCK_LEN];
    x.copy_from_slice(&input[input.len() - BLOCK_LEN..]);
    let mut t = [0; BLOCK_LEN];
    for (i, chunk) in input.chunks(BLOCK_LEN).enumerate() {
        xor(&x, chunk, &mut t);
        let mut words = [0; 16];
        for (c, b) in t.chunks_exact(4).zip(words.iter_mut()) {
            *b = u32::from_le_bytes(c.try_into().unwrap());
        }
        salsa20_8(&mut words);
        for (c, w) in x.chunks_exact_mut(4).zip(words.iter()) {
            c.copy_from_slice(&w.to_le_bytes());
        }
        // even blocks land in the first half of the super block, odd ones in
        // the second.
        let pos = if i % 2 == 0 {
            (i / 2) * BLOCK_LEN
        } else {
            (i / 2) * BLOCK_LEN + input.len() / 2
        };
        output[pos..pos + BLOCK_LEN].copy_from_slice(&x);
    }
}

fn xor(x: &[u8], y: &[u8], output: &mut [u8]) {
    for ((out, &x_i), &y_i) in output.iter_mut().zip(x.iter()).zip(y.iter()) {
        *out = x_i ^ y_i;
    }
}
