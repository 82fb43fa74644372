//! Password-based key derivation: PBKDF2-HMAC (RFC 2898) and scrypt
//! (RFC 7914).
//!
//! Both entry points stretch a low-entropy secret and a salt into a derived
//! key of the caller's chosen length. [`scrypt`] is deliberately
//! memory-hard: its cost parameters force the derivation to materialize and
//! walk a table of `n` super blocks, which is what makes large-scale
//! hardware guessing expensive.
#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::inline_always
)]

mod error;
mod hash;
mod params;
mod pbkdf2;
mod romix;
mod salsa;

pub use error::Error;
pub use hash::Hash;
pub use params::Params;
pub use pbkdf2::pbkdf2;
pub use romix::{block_mix, ro_mix};
pub use salsa::salsa20_8;

use hmac::Hmac;
use rayon::{iter::ParallelIterator, slice::ParallelSliceMut};
use sha2::Sha256;

// RFC 7914 admits up to (2^32 - 1) * 32 octets of output.
const MAX_OUTPUT: u64 = 0xffff_ffff * 32;

/// Fills `output` with a key derived from `password` and `salt` by scrypt
/// (RFC 7914), at the cost given in `params`.
///
/// `password` and `salt` may be empty. `output` must be non-empty and no
/// longer than (2^32 - 1) * 32 octets. Each of the `p` mixing passes owns a
/// fresh `128 * r * n` octet table, released before this call returns; the
/// passes run on the global rayon pool when `p` > 1.
pub fn scrypt(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    output: &mut [u8],
) -> Result<(), Error> {
    if output.is_empty() {
        return Err(Error::InvalidParameter("output must not be empty"));
    }
    check_output_len(output.len() as u64)?;
    let n = params.n as usize;
    let r128 = (params.r as usize) * 128;
    // expansion: a single PBKDF2 round spreads the password over p super
    // blocks. sizes were bounds-checked when params was constructed.
    let mut b = vec![0; (params.p as usize) * r128];
    pbkdf2::derive::<Hmac<Sha256>>(password, salt, 1, &mut b)?;
    // the super blocks mix independently; completion order is irrelevant
    // because each chunk is transformed in place.
    if params.p > 1 {
        b.par_chunks_mut(r128)
            .for_each(|block| romix::scrypt_ro_mix(block, n));
    } else {
        romix::scrypt_ro_mix(&mut b, n);
    }
    // finalization: the mixed buffer becomes the salt for one more round.
    pbkdf2::derive::<Hmac<Sha256>>(password, &b, 1, output)
}

const fn check_output_len(len: u64) -> Result<(), Error> {
    if len > MAX_OUTPUT {
        return Err(Error::DerivedKeyTooLong {
            requested: len,
            limit: MAX_OUTPUT,
        });
    }
    Ok(())
}
