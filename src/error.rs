//! Errors raised while configuring a sieve.
//!
//! Queries themselves never fail: every integer is a valid argument to
//! [`IncrementalSieve::is_prime`](crate::IncrementalSieve::is_prime) and
//! [`IncrementalSieve::primes_in_range`](crate::IncrementalSieve::primes_in_range).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SieveError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// A window must cover at least one integer or extension never advances
    #[error("segment length must be positive")]
    ZeroSegmentLength,

    #[error("segment length {length} exceeds the maximum of {max}")]
    SegmentLengthTooLarge { length: u64, max: u64 },
}
