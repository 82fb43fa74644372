use crate::error::Error;

/// Validated scrypt cost parameters.
///
/// `n` is the CPU/memory cost, `r` scales the super block size, and `p` is
/// the number of independently mixed super blocks. [`Params::new`] checks
/// every bound up front, so a constructed value can always be handed to
/// [`scrypt`](crate::scrypt) without further validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub(crate) n: u32,
    pub(crate) r: u32,
    pub(crate) p: u32,
}

impl Params {
    /// Interactive logins: N = 2^14, r = 8, p = 1, about 16 MiB of scratch.
    pub const INTERACTIVE: Self = Self {
        n: 1 << 14,
        r: 8,
        p: 1,
    };

    /// Long-lived secrets such as file encryption keys: N = 2^20, r = 8,
    /// p = 1, about 1 GiB of scratch.
    pub const SENSITIVE: Self = Self {
        n: 1 << 20,
        r: 8,
        p: 1,
    };

    // floor((2^32 - 1) * 32 / 128): the PBKDF2 expansion of p * 128 * r
    // octets must stay addressable by a 32-bit block counter. RFC 7914 fixes
    // this constant; deriving it from fresh arithmetic risks rounding the
    // accept/reject boundary differently.
    const MAX_R_P: u64 = 1_073_741_823;

    /// Validates and bundles the scrypt parameters.
    ///
    /// `n` must be a power of two greater than one and small enough for the
    /// 64-octet block the table index is read from (`n` < 2^(16r)); `r` and
    /// `p` must be positive with `r * p` at most 1073741823; the working
    /// buffer sizes must fit in `usize`. Anything else is rejected here,
    /// before any memory is committed.
    pub fn new(n: u32, r: u32, p: u32) -> Result<Self, Error> {
        if n < 2 || !n.is_power_of_two() {
            return Err(Error::InvalidParameter(
                "cost must be a power of two greater than one",
            ));
        }
        if r == 0 {
            return Err(Error::InvalidParameter("block size must be positive"));
        }
        if p == 0 {
            return Err(Error::InvalidParameter(
                "parallelization must be positive",
            ));
        }
        if u64::from(r) * u64::from(p) > Self::MAX_R_P {
            return Err(Error::InvalidParameter(
                "r * p may not exceed 1073741823",
            ));
        }
        if u64::from(n.trailing_zeros()) >= 16 * u64::from(r) {
            return Err(Error::InvalidParameter(
                "cost is too large for this block size",
            ));
        }
        let Some(r128) = (r as usize).checked_mul(128) else {
            return Err(Error::InvalidParameter("block size is too large"));
        };
        if r128.checked_mul(p as usize).is_none() {
            return Err(Error::InvalidParameter("r * p is too large"));
        }
        if r128.checked_mul(n as usize).is_none() {
            return Err(Error::InvalidParameter("cost is too large"));
        }
        Ok(Self { n, r, p })
    }

    /// CPU/memory cost.
    #[must_use]
    pub const fn n(&self) -> u32 {
        self.n
    }

    /// Block size multiplier.
    #[must_use]
    pub const fn r(&self) -> u32 {
        self.r
    }

    /// Parallelization count.
    #[must_use]
    pub const fn p(&self) -> u32 {
        self.p
    }
}
