use thiserror::Error;

/// Errors produced by the key derivation entry points.
///
/// Parameter validation happens before any derivation work, so an error
/// means no expensive computation was started.
#[derive(Debug, Clone, Copy, Error)]
pub enum Error {
    /// A cost or shape parameter is out of range. The message names the
    /// offending parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// The requested derived key length exceeds what the block counter can
    /// address.
    #[error("derived key of {requested} bytes is too long (limit {limit})")]
    DerivedKeyTooLong {
        /// Requested length in bytes.
        requested: u64,
        /// Largest length the parameters can produce.
        limit: u64,
    },
    /// The underlying MAC rejected its key material.
    #[error(transparent)]
    Primitive(#[from] hmac::digest::InvalidLength),
}
