use crate::{error::Error, hash::Hash};
use hmac::{digest::KeyInit, Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

// the block index is a 32-bit big-endian counter starting at 1, so at most
// 2^32 - 1 blocks of hash output are addressable.
const MAX_BLOCKS: u64 = 0xffff_ffff;

/// Fills `output` with a key derived from `password` and `salt` by PBKDF2
/// (RFC 2898), using HMAC over `hash` as the pseudorandom function.
///
/// `password` and `salt` may be empty; an empty password keys HMAC exactly
/// like a key of all-zero bytes, which is what the padding rules of HMAC
/// itself produce. `iterations` must be positive and `output` must be
/// non-empty and strictly shorter than (2^32 - 1) hash blocks.
#[inline]
pub fn pbkdf2(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    hash: Hash,
    output: &mut [u8],
) -> Result<(), Error> {
    if iterations == 0 {
        return Err(Error::InvalidParameter("iteration count must be positive"));
    }
    if output.is_empty() {
        return Err(Error::InvalidParameter("output must not be empty"));
    }
    check_output_len(output.len() as u64, hash)?;
    match hash {
        Hash::Sha1 => derive::<Hmac<Sha1>>(password, salt, iterations, output),
        Hash::Sha256 => derive::<Hmac<Sha256>>(password, salt, iterations, output),
        Hash::Sha384 => derive::<Hmac<Sha384>>(password, salt, iterations, output),
        Hash::Sha512 => derive::<Hmac<Sha512>>(password, salt, iterations, output),
    }
}

const fn check_output_len(len: u64, hash: Hash) -> Result<(), Error> {
    let limit = MAX_BLOCKS * hash.output_len() as u64 - 1;
    if len > limit {
        return Err(Error::DerivedKeyTooLong {
            requested: len,
            limit,
        });
    }
    Ok(())
}

// the scrypt driver calls this directly: its own validation already bounds
// the buffer sizes, and its fixed PRF needs no dispatch.
#[allow(clippy::cast_possible_truncation)] // block count is bounded above
pub(crate) fn derive<M>(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    output: &mut [u8],
) -> Result<(), Error>
where
    M: Mac + KeyInit + Clone,
{
    // key the PRF once and clone it per invocation instead of re-running the
    // key schedule for every block.
    let prf = <M as KeyInit>::new_from_slice(password)?;
    for (i, chunk) in output.chunks_mut(M::output_size()).enumerate() {
        block(&prf, salt, rounds, i as u32, chunk);
    }
    Ok(())
}

#[inline(always)]
fn block<M: Mac + Clone>(prf: &M, salt: &[u8], rounds: u32, i: u32, chunk: &mut [u8]) {
    for byte in chunk.iter_mut() {
        *byte = 0;
    }
    let mut u = {
        let mut prf = prf.clone();
        prf.update(salt);
        prf.update(&(i + 1).to_be_bytes());
        let u = prf.finalize().into_bytes();
        xor(chunk, &u);
        u
    };
    // each U_j is chained off U_{j-1} in strict order; only the folding into
    // the output chunk commutes.
    for _ in 1..rounds {
        let mut prf = prf.clone();
        prf.update(&u);
        u = prf.finalize().into_bytes();
        xor(chunk, &u);
    }
}

#[inline(always)]
fn xor(chunk: &mut [u8], u: &[u8]) {
    debug_assert!(u.len() >= chunk.len(), "length mismatch in xor");
    chunk.iter_mut().zip(u.iter()).for_each(|(a, b)| *a ^= b);
}
