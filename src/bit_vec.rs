use std::collections::TryReserveError;

use crate::constants::{ceil_div, WORD_BITS};

/// Packed flags, 64 per word. A clear bit is a candidate prime, a set bit is a proven composite.
///
/// Bits past len in the last word stay clear and are never reported by find_unset.
pub struct BitVec {
    bit_vec: Vec<u64>,
    len: usize,
}

impl BitVec {
    const SHIFT: usize = 6;
    const MASK: usize = 0b11_1111;
    const ONES: u64 = u64::MAX;

    /// Allocate len clear flags, reporting allocation failure instead of aborting.
    pub fn new(len: usize) -> Result<BitVec, TryReserveError> {
        let words = ceil_div(len, WORD_BITS);
        let mut bit_vec = Vec::new();
        bit_vec.try_reserve_exact(words)?;
        bit_vec.resize(words, 0);

        Ok(BitVec { bit_vec, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn set(&mut self, index: usize) {
        self.bit_vec[index >> BitVec::SHIFT] |= 1 << (index & BitVec::MASK)
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> bool {
        self.bit_vec[index >> BitVec::SHIFT] & (1 << (index & BitVec::MASK)) != 0
    }

    /// Find the first set bit in word. This index is equal to the number of word's trailing zeros.
    fn find_first_set(word: u64) -> Option<usize> {
        if word == 0 {
            return None;
        }
        Some(word.trailing_zeros() as usize)
    }

    /// Find the first clear flag at or after index.
    #[inline]
    pub fn find_unset(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let first_word_index = index >> BitVec::SHIFT;
        for (word_offset, &word) in self.bit_vec[first_word_index..].iter().enumerate() {
            let unset_bits = if word_offset == 0 {
                !word & (BitVec::ONES << (index & BitVec::MASK))
            } else {
                !word
            };
            if let Some(bit_index) = BitVec::find_first_set(unset_bits) {
                let found = ((first_word_index + word_offset) << BitVec::SHIFT) + bit_index;
                // Padding bits in the last word are clear, so stop at len.
                return if found < self.len { Some(found) } else { None };
            }
        }
        None
    }
}
