//! Incremental sieve of Eratosthenes that caches primes across queries.

// Internal modules
mod bit_vec;
mod config;
mod constants;
mod error;
mod prime_set;
mod progress;
mod sieve;
mod window;

pub use config::SieveConfig;
pub use constants::DEFAULT_SEGMENT_LENGTH;
pub use error::{Result, SieveError};
pub use sieve::{IncrementalSieve, Primes};
