use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SieveError};
use crate::sieve::compute_primes;

/// Inclusive upper bound for a prime search.
///
/// Unsigned integers convert directly. Signed integers and text are checked, so a negative limit is
/// rejected with InvalidArgument instead of silently producing no primes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(u64);

impl Limit {
    pub fn new(limit: u64) -> Limit {
        Limit(limit)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Every prime up to and including this limit, in ascending order.
    pub fn primes(self) -> Result<Vec<u64>> {
        compute_primes(self.0)
    }
}

impl From<u64> for Limit {
    fn from(limit: u64) -> Limit {
        Limit(limit)
    }
}

impl From<u32> for Limit {
    fn from(limit: u32) -> Limit {
        Limit(limit.into())
    }
}

impl TryFrom<i64> for Limit {
    type Error = SieveError;

    fn try_from(limit: i64) -> Result<Limit> {
        u64::try_from(limit)
            .map(Limit)
            .map_err(|_| SieveError::InvalidArgument { limit })
    }
}

impl FromStr for Limit {
    type Err = SieveError;

    /// Parse a decimal limit. Surrounding whitespace and `_` separators are ignored.
    fn from_str(input: &str) -> Result<Limit> {
        let digits = input.trim().replace('_', "");
        match digits.parse::<u64>() {
            Ok(limit) => Ok(Limit(limit)),
            Err(source) => match digits.strip_prefix('-') {
                Some(magnitude)
                    if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) =>
                {
                    // Negative numbers past i64::MIN are reported as i64::MIN.
                    Limit::try_from(digits.parse::<i64>().unwrap_or(i64::MIN))
                }
                _ => Err(SieveError::Parse {
                    input: input.to_string(),
                    source,
                }),
            },
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_conversions() {
        assert_eq!(10, Limit::from(10u64).get());
        assert_eq!(10, Limit::from(10u32).get());
        assert_eq!(Limit::new(0), Limit::try_from(0i64).unwrap());
        assert_eq!(Limit::new(7), Limit::try_from(7i64).unwrap());
    }

    #[test]
    fn negative_limit_rejected() {
        match Limit::try_from(-1i64) {
            Err(SieveError::InvalidArgument { limit }) => assert_eq!(-1, limit),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        assert!(matches!(
            Limit::try_from(i64::MIN),
            Err(SieveError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn limit_from_str() {
        assert_eq!(Limit::new(1_000_000), "1_000_000".parse().unwrap());
        assert_eq!(Limit::new(42), " 42\n".parse().unwrap());
        assert_eq!(Limit::new(u64::MAX), u64::MAX.to_string().parse().unwrap());
        assert!(matches!(
            "-5".parse::<Limit>(),
            Err(SieveError::InvalidArgument { limit: -5 })
        ));
        assert!(matches!(
            "-99999999999999999999".parse::<Limit>(),
            Err(SieveError::InvalidArgument { limit: i64::MIN })
        ));
        assert!(matches!(
            "-1_000".parse::<Limit>(),
            Err(SieveError::InvalidArgument { limit: -1000 })
        ));
        assert_eq!(Limit::new(0), "-0".parse().unwrap());
        assert!(matches!("-".parse::<Limit>(), Err(SieveError::Parse { .. })));
        assert!(matches!("--5".parse::<Limit>(), Err(SieveError::Parse { .. })));
        assert!(matches!(
            "ten".parse::<Limit>(),
            Err(SieveError::Parse { .. })
        ));
        assert!(matches!("".parse::<Limit>(), Err(SieveError::Parse { .. })));
    }

    #[test]
    fn limit_primes() {
        assert_eq!(vec![2, 3, 5, 7], Limit::new(10).primes().unwrap());
        assert_eq!("1000", Limit::new(1000).to_string());
    }
}
