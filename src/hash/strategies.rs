//! Probe position derivation from a single digest primitive.
//!
//! A filter with `k` probes needs `k` positions per value. Rather than `k`
//! distinct hash functions, each position is the digest of the value's
//! canonical bytes salted with the probe index:
//!
//! ```text
//! position(i) = finalize(digest(bytes ++ le_bytes(i as u32))) mod size     for i in 0..k
//! ```
//!
//! Filter sizes are powers of two, so `mod size` keeps only the low bits of
//! the digest. The low bits of an FNV digest depend only on the low bits of
//! its input, which would put every probe of a value into a handful of
//! neighbouring slots. [`finalize`] spreads the high bits down before the
//! reduction.
//!
//! Probing is deterministic: the same bytes, index and size always produce
//! the same position. Counting filters rely on this so that `delete` touches
//! exactly the counters `add` touched.
//!
//! # Scratch Buffer
//!
//! [`ProbeSequence`] owns one buffer of `bytes.len() + 4` bytes. Each step
//! appends the index, digests, and truncates back to the value bytes, so a
//! whole probe run allocates once.

#![allow(clippy::cast_possible_truncation)]

use super::hasher::BloomHasher;
use crate::error::{BloomSetError, Result};

/// Width of the probe-index salt appended to the value bytes.
pub const SALT_WIDTH: usize = std::mem::size_of::<u32>();

/// Avalanche a 32-bit digest (the MurmurHash3 `fmix32` finalizer).
///
/// Bijective, and `finalize(0) == 0`.
#[inline]
#[must_use]
pub const fn finalize(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// The salted re-hash probing technique.
///
/// # Examples
///
/// ```
/// use bloomset::hash::{Fnv32, SaltedRehash};
///
/// let fnv = Fnv32::new();
/// let p0 = SaltedRehash::position(&fnv, b"value", 0, 1024).unwrap();
/// let again = SaltedRehash::position(&fnv, b"value", 0, 1024).unwrap();
/// assert_eq!(p0, again);
/// assert!(p0 < 1024);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedRehash;

impl SaltedRehash {
    /// Compute the position of probe `hash_index` for `bytes` in `[0, size)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bytes` is empty or `size` is zero, and
    /// propagates digest failures.
    pub fn position(
        hasher: &dyn BloomHasher,
        bytes: &[u8],
        hash_index: u32,
        size: usize,
    ) -> Result<usize> {
        let mut probes = ProbeSequence::new(hasher, bytes, hash_index as usize + 1, size)?;
        probes.skip_to(hash_index);
        match probes.next() {
            Some(position) => position,
            None => Err(BloomSetError::invalid_argument("probe index out of range")),
        }
    }

    /// Compute all `hash_count` positions for `bytes`, in probe order.
    ///
    /// # Errors
    ///
    /// Same as [`SaltedRehash::position`].
    pub fn positions(
        hasher: &dyn BloomHasher,
        bytes: &[u8],
        hash_count: usize,
        size: usize,
    ) -> Result<Vec<usize>> {
        ProbeSequence::new(hasher, bytes, hash_count, size)?.collect()
    }
}

/// Iterator over the probe positions of one value.
///
/// Yields `Result<usize>` because the digest capability is fallible.
pub struct ProbeSequence<'a> {
    hasher: &'a dyn BloomHasher,
    scratch: Vec<u8>,
    value_len: usize,
    next_index: u32,
    hash_count: u32,
    size: u64,
}

impl<'a> ProbeSequence<'a> {
    /// Prepare probing `bytes` with `hash_count` probes into `[0, size)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bytes` is empty, `size` is zero, or
    /// `hash_count` does not fit in the 32-bit salt.
    pub fn new(
        hasher: &'a dyn BloomHasher,
        bytes: &[u8],
        hash_count: usize,
        size: usize,
    ) -> Result<Self> {
        if bytes.is_empty() {
            return Err(BloomSetError::empty_input());
        }
        if size == 0 {
            return Err(BloomSetError::invalid_filter_size(size));
        }
        let hash_count = u32::try_from(hash_count).map_err(|_| {
            BloomSetError::invalid_argument(format!("hash count {} exceeds u32", hash_count))
        })?;

        let mut scratch = Vec::with_capacity(bytes.len() + SALT_WIDTH);
        scratch.extend_from_slice(bytes);

        Ok(Self {
            hasher,
            scratch,
            value_len: bytes.len(),
            next_index: 0,
            hash_count,
            size: size as u64,
        })
    }

    fn skip_to(&mut self, index: u32) {
        self.next_index = index.min(self.hash_count);
    }
}

impl Iterator for ProbeSequence<'_> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.hash_count {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;

        self.scratch.extend_from_slice(&index.to_le_bytes());
        let digest = self.hasher.digest(&self.scratch);
        self.scratch.truncate(self.value_len);

        #[cfg(feature = "trace")]
        if let Ok(d) = &digest {
            tracing::trace!(index, digest = *d, "probe");
        }

        Some(digest.map(|d| (u64::from(finalize(d)) % self.size) as usize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.hash_count - self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Fnv32;

    #[test]
    fn test_position_matches_manual_salt() {
        let fnv = Fnv32::new();
        let mut salted = b"abc".to_vec();
        salted.extend_from_slice(&3u32.to_le_bytes());
        let expected = (u64::from(finalize(Fnv32::digest_unchecked(&salted))) % 1000) as usize;

        assert_eq!(SaltedRehash::position(&fnv, b"abc", 3, 1000).unwrap(), expected);
    }

    #[test]
    fn test_finalize_known_values() {
        assert_eq!(finalize(0), 0);
        assert_ne!(finalize(1), 1);
        assert_ne!(finalize(1) & 0xff, finalize(0x100) & 0xff);
    }

    #[test]
    fn test_probes_spread_over_power_of_two_sizes() {
        let fnv = Fnv32::new();
        let positions = SaltedRehash::positions(&fnv, b"spread", 12, 16384).unwrap();
        let lo = positions.iter().min().copied().unwrap();
        let hi = positions.iter().max().copied().unwrap();
        assert!(hi - lo > 16, "probes clustered: {positions:?}");
    }

    #[test]
    fn test_positions_match_individual_probes() {
        let fnv = Fnv32::new();
        let all = SaltedRehash::positions(&fnv, b"value", 7, 4096).unwrap();
        assert_eq!(all.len(), 7);
        for (i, &pos) in all.iter().enumerate() {
            assert_eq!(SaltedRehash::position(&fnv, b"value", i as u32, 4096).unwrap(), pos);
        }
    }

    #[test]
    fn test_positions_in_range() {
        let fnv = Fnv32::new();
        for size in [1usize, 2, 3, 127, 128, 1 << 20] {
            let positions = SaltedRehash::positions(&fnv, b"range", 10, size).unwrap();
            assert!(positions.iter().all(|&p| p < size));
        }
    }

    #[test]
    fn test_zero_probes_yields_nothing() {
        let fnv = Fnv32::new();
        assert!(SaltedRehash::positions(&fnv, b"x", 0, 64).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_empty_bytes_and_zero_size() {
        let fnv = Fnv32::new();
        assert!(SaltedRehash::positions(&fnv, b"", 3, 64).is_err());
        assert!(SaltedRehash::positions(&fnv, b"x", 3, 0).is_err());
    }

    #[test]
    fn test_exact_size_hint() {
        let fnv = Fnv32::new();
        let mut probes = ProbeSequence::new(&fnv, b"x", 4, 64).unwrap();
        assert_eq!(probes.len(), 4);
        probes.next();
        assert_eq!(probes.len(), 3);
    }
}
