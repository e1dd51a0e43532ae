//! Packed array of 4-bit saturating counters.
//!
//! Two counters share each byte (see [`crate::util::bitops`] for the
//! layout), so `n` counters occupy `ceil(n / 2)` bytes.
//!
//! Counters saturate at both ends: incrementing a counter at 15 leaves it at
//! 15, and decrementing a counter at 0 leaves it at 0. A saturated counter
//! may under-count, so deleting an element whose counters saturated can
//! leave other elements' probes short. That is the usual counting filter
//! trade-off for 4-bit cells.
//!
//! ```
//! use bloomset::core::counters::NibbleCounters;
//!
//! let mut counters = NibbleCounters::new(8).unwrap();
//! for _ in 0..20 {
//!     counters.increment(3);
//! }
//! assert_eq!(counters.get(3), 15);
//! assert_eq!(counters.saturated_count(), 1);
//! ```

use crate::error::{BloomSetError, Result};
use crate::util::bitops::{get_nibble, nibbles_to_bytes, set_nibble, NIBBLE_MAX};

/// Fixed-length array of 4-bit counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NibbleCounters {
    bytes: Vec<u8>,
    len: usize,
}

impl NibbleCounters {
    /// Create `len` counters, all zero.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSetError::InvalidFilterSize`] if `len` is 0.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(BloomSetError::invalid_filter_size(len));
        }
        Ok(Self {
            bytes: vec![0; nibbles_to_bytes(len)],
            len,
        })
    }

    /// Number of counters.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed array.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value of counter `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, position: usize) -> u8 {
        self.check_bounds(position);
        get_nibble(&self.bytes, position)
    }

    /// Add one to counter `position`, saturating at 15.
    ///
    /// Returns `true` if the counter was already saturated.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`.
    #[inline]
    pub fn increment(&mut self, position: usize) -> bool {
        self.check_bounds(position);
        let value = get_nibble(&self.bytes, position);
        if value == NIBBLE_MAX {
            return true;
        }
        set_nibble(&mut self.bytes, position, value + 1);
        false
    }

    /// Subtract one from counter `position`, saturating at 0.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`.
    #[inline]
    pub fn decrement(&mut self, position: usize) {
        self.check_bounds(position);
        let value = get_nibble(&self.bytes, position);
        if value > 0 {
            set_nibble(&mut self.bytes, position, value - 1);
        }
    }

    /// Zero every counter.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Counters currently at 15.
    #[must_use]
    pub fn saturated_count(&self) -> usize {
        self.iter().filter(|&v| v == NIBBLE_MAX).count()
    }

    /// Counters above 0.
    #[must_use]
    pub fn nonzero_count(&self) -> usize {
        self.iter().filter(|&v| v > 0).count()
    }

    /// Packed storage, two counters per byte.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Counter values in position order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len).map(move |pos| get_nibble(&self.bytes, pos))
    }

    #[inline]
    fn check_bounds(&self, position: usize) {
        assert!(
            position < self.len,
            "counter index out of bounds: index={} len={}",
            position,
            self.len
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sizes() {
        assert_eq!(NibbleCounters::new(1).unwrap().as_bytes().len(), 1);
        assert_eq!(NibbleCounters::new(128).unwrap().as_bytes().len(), 64);
        assert_eq!(NibbleCounters::new(129).unwrap().as_bytes().len(), 65);
        assert!(NibbleCounters::new(0).is_err());
    }

    #[test]
    fn test_increment_saturates_at_max() {
        let mut counters = NibbleCounters::new(4).unwrap();
        for i in 0..15 {
            assert!(!counters.increment(1), "step {i}");
        }
        assert!(counters.increment(1));
        assert_eq!(counters.get(1), 15);
        assert_eq!(counters.get(0), 0);
        assert_eq!(counters.get(2), 0);
    }

    #[test]
    fn test_decrement_saturates_at_zero() {
        let mut counters = NibbleCounters::new(4).unwrap();
        counters.decrement(2);
        assert_eq!(counters.get(2), 0);
        counters.increment(2);
        counters.decrement(2);
        counters.decrement(2);
        assert_eq!(counters.get(2), 0);
    }

    #[test]
    fn test_neighbours_independent() {
        let mut counters = NibbleCounters::new(3).unwrap();
        counters.increment(0);
        counters.increment(1);
        counters.increment(1);
        counters.increment(2);
        assert_eq!(counters.iter().collect::<Vec<_>>(), vec![1, 2, 1]);
        counters.decrement(1);
        assert_eq!(counters.iter().collect::<Vec<_>>(), vec![1, 1, 1]);
    }

    #[test]
    fn test_statistics_and_clear() {
        let mut counters = NibbleCounters::new(10).unwrap();
        for _ in 0..20 {
            counters.increment(9);
        }
        counters.increment(4);
        assert_eq!(counters.saturated_count(), 1);
        assert_eq!(counters.nonzero_count(), 2);

        counters.clear();
        assert_eq!(counters.nonzero_count(), 0);
        assert_eq!(counters.len(), 10);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let counters = NibbleCounters::new(5).unwrap();
        let _ = counters.get(5);
    }
}
