use std::iter::FusedIterator;

use tracing::debug;

use crate::bit_vec::BitVec;
use crate::constants::{FIRST_PRIME, WORD_BITS};
use crate::error::{Result, SieveError};

/// Sieve of Eratosthenes over a packed bit array, yielding all primes up to an inclusive limit
///
/// The sieve keeps one flag for every number in 0..=limit. All flags start clear, meaning "not yet
/// proven composite". Scanning upwards from 2, the first clear flag is the next prime p, and we set
/// the flags of p * p, p * p + p, ... up to limit. Smaller multiples of p have a smaller prime
/// factor, so they were already struck when that factor was found.
///
/// In Rust a bool is represented with a single byte. Keeping a vector of bits saves eight times
/// the memory compared to a vector of bools representing the same range, although access costs
/// a couple extra CPU cycles due to bit operations.
///
/// BitSieve is an iterator: each call to next() scans to the next prime and strikes its multiples,
/// so a caller may stop early and simply drop the sieve. The bit array is owned by the sieve and
/// never handed out.
///
/// Usage:
///
///     use bitsieve::BitSieve;
///
///     assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19], BitSieve::new(20).unwrap().collect::<Vec<_>>());
///     assert_eq!(Some(97), BitSieve::new(100).unwrap().last());
pub struct BitSieve {
    composites: BitVec,
    limit: usize,
    n: usize,
}

impl BitSieve {
    /// Allocate an unsieved bit array covering 0..=limit.
    pub fn new(limit: u64) -> Result<BitSieve> {
        // ceil((limit + 1) / WORD_BITS), in u64 so it can be reported for any limit.
        let words = limit / WORD_BITS as u64 + 1;
        let exhausted = || SieveError::ResourceExhausted { limit, words };

        let len = usize::try_from(limit)
            .ok()
            .and_then(|limit| limit.checked_add(1))
            .ok_or_else(exhausted)?;
        let composites = BitVec::new(len).map_err(|_| exhausted())?;
        debug!(limit, words, "allocated bit array");

        Ok(BitSieve {
            composites,
            limit: len - 1,
            n: FIRST_PRIME,
        })
    }

    pub fn limit(&self) -> u64 {
        self.limit as u64
    }

    /// Strike multiples of prime from p * p up to limit.
    fn strike_prime(&mut self, p: usize) {
        // p * p past usize::MAX is certainly past limit.
        let mut multiple = match p.checked_mul(p) {
            Some(square) => square,
            None => return,
        };
        while multiple <= self.limit {
            self.composites.set(multiple);
            multiple = match multiple.checked_add(p) {
                Some(next) => next,
                None => break,
            };
        }
    }
}

impl Iterator for BitSieve {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.composites.find_unset(self.n)?;
        self.strike_prime(p);
        self.n = p + 1;
        Some(p as u64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.composites.len().saturating_sub(self.n)))
    }
}

impl FusedIterator for BitSieve {}

/// Compute every prime up to and including limit, in ascending order.
///
/// Fails only when the bit array for limit cannot be allocated.
pub fn compute_primes(limit: u64) -> Result<Vec<u64>> {
    Ok(BitSieve::new(limit)?.collect())
}
