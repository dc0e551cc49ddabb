/// Flags packed into one word of a BitVec.
pub const WORD_BITS: usize = 64;

/// Smallest prime. Indices below it are never reported, whatever their flag.
pub const FIRST_PRIME: usize = 2;

/// Divide and round up, without overflowing when n is close to usize::MAX.
pub fn ceil_div(n: usize, d: usize) -> usize {
    n / d + (n % d != 0) as usize
}
