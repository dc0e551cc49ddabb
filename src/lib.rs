//! Sieve of Eratosthenes over a packed bit array.
//!
//!     use bitsieve::compute_primes;
//!
//!     assert_eq!(vec![2, 3, 5, 7], compute_primes(10).unwrap());

// Internal modules
mod bit_vec;
mod constants;
mod error;
mod limit;
mod sieve;

pub use error::{Result, SieveError};
pub use limit::Limit;
pub use sieve::{compute_primes, BitSieve};
