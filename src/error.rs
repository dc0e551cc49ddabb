use std::num::ParseIntError;

use thiserror::Error;

/// Failures of the sieve and of the limit conversions that feed it.
#[derive(Debug, Error)]
pub enum SieveError {
    /// The bit array covering `0..=limit` cannot be allocated.
    #[error("cannot allocate a bit array of {words} words for limit {limit}")]
    ResourceExhausted { limit: u64, words: u64 },

    #[error("limit must be non-negative, got {limit}")]
    InvalidArgument { limit: i64 },

    #[error("invalid limit {input:?}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, SieveError>;
