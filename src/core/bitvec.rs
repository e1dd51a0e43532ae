//! Fixed-length bit vector backing the standard filter.
//!
//! # Overview
//!
//! `BitVec` is a bit array backed by `Vec<u64>`. Bits are packed into 64-bit
//! words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! Bits past `len` in the last word are always zero, so `count_ones` and the
//! combinators never see stray bits.
//!
//! # Mutation
//!
//! Mutation takes `&mut self`. Shared concurrent use goes through
//! [`crate::sync::LockedBloomFilter`], which serializes writers.
//!
//! # Combinators
//!
//! [`BitVec::union`], [`BitVec::intersect`] and [`BitVec::xor`] accept
//! vectors of different lengths. The shorter operand is treated as
//! zero-padded, and the result has the longer length.
//!
//! ```
//! use bloomset::core::bitvec::BitVec;
//!
//! let mut a = BitVec::new(64).unwrap();
//! let mut b = BitVec::new(128).unwrap();
//! a.set(10);
//! b.set(10);
//! b.set(100);
//!
//! let union = a.union(&b);
//! assert_eq!(union.len(), 128);
//! assert!(union.get(100));
//!
//! let both = a.intersect(&b);
//! assert_eq!(both.count_ones(), 1);
//! ```

use crate::error::{BloomSetError, Result};
use crate::util::bitops::{bit_mask, bit_offset, bits_to_words, count_ones_slice, tail_mask, word_index};

/// Fixed-length bit array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    /// Create a vector of `num_bits` zero bits.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSetError::InvalidFilterSize`] if `num_bits` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::new(1000).unwrap();
    /// assert_eq!(bv.len(), 1000);
    /// assert_eq!(bv.count_ones(), 0);
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomSetError::invalid_filter_size(num_bits));
        }
        Ok(Self {
            words: vec![0; bits_to_words(num_bits)],
            len: num_bits,
        })
    }

    /// Rebuild a vector from raw words.
    ///
    /// Bits beyond `len` in the last word are masked off. Missing words are
    /// zero-filled; surplus words are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSetError::InvalidFilterSize`] if `len` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::core::bitvec::BitVec;
    ///
    /// let bv = BitVec::from_words(vec![0b1011], 3).unwrap();
    /// assert_eq!(bv.count_ones(), 2);
    /// assert!(bv.get(0));
    /// assert!(!bv.get(2));
    /// ```
    pub fn from_words(mut words: Vec<u64>, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(BloomSetError::invalid_filter_size(len));
        }
        words.resize(bits_to_words(len), 0);
        if let Some(last) = words.last_mut() {
            *last &= tail_mask(len);
        }
        Ok(Self { words, len })
    }

    /// Number of bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed vector.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set bit `index` to 1. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );
        self.words[word_index(index)] |= bit_mask(bit_offset(index));
    }

    /// Read bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );
        self.words[word_index(index)] & bit_mask(bit_offset(index)) != 0
    }

    /// Zero every bit. The length is unchanged.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        count_ones_slice(&self.words)
    }

    /// Underlying words, least significant bit first.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Copy of the underlying words.
    #[must_use]
    pub fn to_raw(&self) -> Vec<u64> {
        self.words.clone()
    }

    /// Bitwise OR, zero-padding the shorter operand.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a | b)
    }

    /// Bitwise AND, zero-padding the shorter operand.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a & b)
    }

    /// Bitwise XOR, zero-padding the shorter operand.
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a ^ b)
    }

    fn combine(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let len = self.len.max(other.len);
        let n_words = bits_to_words(len);
        let word_at = |words: &[u64], i: usize| words.get(i).copied().unwrap_or(0);

        let words = (0..n_words)
            .map(|i| op(word_at(&self.words, i), word_at(&other.words, i)))
            .collect();

        // Operands keep their tails clear, so every op here keeps it clear too.
        Self { words, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let bv = BitVec::new(100).unwrap();
        assert_eq!(bv.len(), 100);
        assert_eq!(bv.words().len(), 2);
        assert!(!bv.is_empty());
    }

    #[test]
    fn test_new_zero_bits_error() {
        assert_eq!(BitVec::new(0).unwrap_err(), BloomSetError::invalid_filter_size(0));
    }

    #[test]
    fn test_set_get() {
        let mut bv = BitVec::new(128).unwrap();
        assert!(!bv.get(0));
        for i in [0, 63, 64, 127] {
            bv.set(i);
        }
        assert!(bv.get(0));
        assert!(bv.get(63));
        assert!(bv.get(64));
        assert!(bv.get(127));
        assert!(!bv.get(32));
        assert_eq!(bv.count_ones(), 4);
    }

    #[test]
    fn test_set_idempotent() {
        let mut bv = BitVec::new(64).unwrap();
        bv.set(10);
        bv.set(10);
        assert_eq!(bv.count_ones(), 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut bv = BitVec::new(10).unwrap();
        bv.set(10);
    }

    #[test]
    fn test_clear_keeps_length() {
        let mut bv = BitVec::new(200).unwrap();
        bv.set(1);
        bv.set(199);
        bv.clear();
        assert_eq!(bv.count_ones(), 0);
        assert_eq!(bv.len(), 200);
    }

    #[test]
    fn test_from_words_masks_tail_and_resizes() {
        let bv = BitVec::from_words(vec![u64::MAX], 70).unwrap();
        assert_eq!(bv.words().len(), 2);
        assert_eq!(bv.count_ones(), 64);

        let bv = BitVec::from_words(vec![u64::MAX, u64::MAX, 7], 66).unwrap();
        assert_eq!(bv.words().len(), 2);
        assert_eq!(bv.count_ones(), 66);
        assert!(BitVec::from_words(vec![], 0).is_err());
    }

    #[test]
    fn test_combinators_same_length() {
        let mut a = BitVec::new(64).unwrap();
        let mut b = BitVec::new(64).unwrap();
        a.set(1);
        a.set(2);
        b.set(2);
        b.set(3);

        assert_eq!(a.union(&b).count_ones(), 3);
        assert_eq!(a.intersect(&b).count_ones(), 1);
        let x = a.xor(&b);
        assert!(x.get(1) && x.get(3) && !x.get(2));
    }

    #[test]
    fn test_combinators_zero_pad_shorter() {
        let mut short = BitVec::new(10).unwrap();
        let mut long = BitVec::new(300).unwrap();
        short.set(5);
        long.set(5);
        long.set(250);

        let union = short.union(&long);
        assert_eq!(union.len(), 300);
        assert_eq!(union.count_ones(), 2);

        let both = long.intersect(&short);
        assert_eq!(both.len(), 300);
        assert_eq!(both.count_ones(), 1);
        assert!(both.get(5));

        let x = short.xor(&long);
        assert_eq!(x.count_ones(), 1);
        assert!(x.get(250));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = BitVec::new(64).unwrap();
        a.set(10);
        let mut b = a.clone();
        b.set(20);
        assert!(!a.get(20));
        assert_eq!(a.to_raw(), vec![1 << 10]);
    }
}
