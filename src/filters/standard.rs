//! Bit-vector Bloom filter.
//!
//! # Algorithm
//!
//! A filter holds a vector of `m` bits and probes `k` positions per value
//! (see [`crate::hash::strategies`]):
//!
//! 1. **Add**: set the `k` probed bits, count the element
//! 2. **Contains**: true iff all `k` probed bits are set
//!
//! Bits are never individually cleared, so there are no false negatives.
//!
//! # Lifecycle
//!
//! ```text
//! Empty ──add──▶ Populated ──add (count == capacity)──▶ Full
//!   ▲                │                                    │
//!   └──── reset / update_parameters ◀─────────────────────┘
//! ```
//!
//! `clear` zeroes the bits but keeps `current_count`, so a cleared filter
//! still refuses inserts past its capacity. Use `reset` to start over.
//!
//! # Examples
//!
//! ```
//! use bloomset::StandardBloomFilter;
//!
//! let mut filter = StandardBloomFilter::new(1000, 0.01, "FNV32").unwrap();
//! filter.add("apple").unwrap();
//! filter.add(&42u64).unwrap();
//!
//! assert!(filter.contains("apple").unwrap());
//! assert!(filter.contains(&42u64).unwrap());
//! assert_eq!(filter.current_count(), 2);
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::core::bitvec::BitVec;
use crate::core::filter::BloomFilter;
use crate::core::params::{FilterParameters, DEFAULT_SIZE, MAXIMUM_SIZE};
use crate::encoding::CanonicalBytes;
use crate::error::{BloomSetError, Result};
use crate::hash::{registry, BloomHasher, ProbeSequence, SaltedRehash};
use std::sync::Arc;

/// Bloom filter over a plain bit vector.
///
/// Owns its bits and parameters; the digest is shared through an `Arc` and
/// is reused by filters derived through set algebra.
#[derive(Debug, Clone)]
pub struct StandardBloomFilter {
    bits: BitVec,
    params: FilterParameters,
    hasher: Arc<dyn BloomHasher>,
}

impl StandardBloomFilter {
    /// Create a filter for `capacity` elements at `error_rate`, digesting
    /// with the registered hash function `hash_name`.
    ///
    /// # Errors
    ///
    /// - [`BloomSetError::InvalidItemCount`] if `capacity == 0`
    /// - [`BloomSetError::FalsePositiveRateOutOfBounds`] if `error_rate` not in (0, 1)
    /// - [`BloomSetError::InvalidArgument`] if `hash_name` is not registered
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::StandardBloomFilter;
    ///
    /// let filter = StandardBloomFilter::new(128, 0.01, "FNV32").unwrap();
    /// assert_eq!(filter.size(), 2048);
    /// assert_eq!(filter.hash_count(), 12);
    ///
    /// assert!(StandardBloomFilter::new(128, 0.01, "MD5").is_err());
    /// ```
    pub fn new(capacity: usize, error_rate: f64, hash_name: &str) -> Result<Self> {
        Self::with_max_size(capacity, error_rate, hash_name, MAXIMUM_SIZE)
    }

    /// Like [`StandardBloomFilter::new`] with an explicit cap on the bit count.
    ///
    /// # Errors
    ///
    /// As [`StandardBloomFilter::new`], plus
    /// [`BloomSetError::InvalidFilterSize`] if `max_size` is below 128.
    pub fn with_max_size(
        capacity: usize,
        error_rate: f64,
        hash_name: &str,
        max_size: usize,
    ) -> Result<Self> {
        let hasher = registry::resolve(hash_name)?;
        let params = FilterParameters::optimize(capacity, error_rate, DEFAULT_SIZE, max_size)?;
        Self::from_parameters(params, hasher)
    }

    /// Create a filter with a caller-supplied digest.
    ///
    /// # Errors
    ///
    /// Same validation as [`StandardBloomFilter::new`].
    pub fn with_hasher<H>(capacity: usize, error_rate: f64, hasher: H) -> Result<Self>
    where
        H: BloomHasher + 'static,
    {
        let params = FilterParameters::with_defaults(capacity, error_rate)?;
        Self::from_parameters(params, Arc::new(hasher))
    }

    /// Wrap an existing bit vector holding `element_count` elements.
    ///
    /// Parameters come from [`FilterParameters::from_size`]: the filter is
    /// full, and its error rate is a nominal estimate. With
    /// `element_count == 0` the filter has no probes and answers every
    /// query negatively.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSetError::InvalidFilterSize`] for a zero-length vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::core::BitVec;
    /// use bloomset::hash::registry;
    /// use bloomset::StandardBloomFilter;
    ///
    /// let mut source = StandardBloomFilter::new(100, 0.01, "FNV32").unwrap();
    /// source.add("x").unwrap();
    ///
    /// let copy = StandardBloomFilter::from_bits(
    ///     1,
    ///     source.bits().clone(),
    ///     registry::resolve("FNV32").unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(copy.current_count(), 1);
    /// assert_eq!(copy.size(), source.size());
    /// ```
    pub fn from_bits(
        element_count: usize,
        bits: BitVec,
        hasher: Arc<dyn BloomHasher>,
    ) -> Result<Self> {
        let params = FilterParameters::from_size(bits.len(), element_count)?;
        tracing::debug!(
            size = params.size(),
            hash_count = params.hash_count(),
            element_count,
            "wrapped existing bit vector"
        );
        Ok(Self {
            bits,
            params,
            hasher,
        })
    }

    pub(crate) fn from_parameters(
        params: FilterParameters,
        hasher: Arc<dyn BloomHasher>,
    ) -> Result<Self> {
        let bits = BitVec::new(params.size())?;
        tracing::debug!(
            capacity = params.capacity(),
            error_rate = params.error_rate(),
            size = params.size(),
            hash_count = params.hash_count(),
            hasher = hasher.name(),
            "created standard bloom filter"
        );
        Ok(Self {
            bits,
            params,
            hasher,
        })
    }

    /// Insert a value.
    ///
    /// Duplicates are not detected: adding the same value twice counts
    /// twice against the capacity.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the value encodes to no bytes
    /// - `CapacityExceeded` if `current_count == capacity`
    pub fn add<V>(&mut self, value: &V) -> Result<()>
    where
        V: CanonicalBytes + ?Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.add_bytes(&bytes)
    }

    /// Insert already-encoded bytes.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::add`].
    pub fn add_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Err(BloomSetError::empty_input());
        }
        self.params.check_capacity()?;

        let positions = SaltedRehash::positions(
            self.hasher.as_ref(),
            bytes,
            self.params.hash_count(),
            self.params.size(),
        )?;
        for position in positions {
            self.bits.set(position);
        }
        self.params.record_insert();

        tracing::trace!(current_count = self.params.current_count(), "added element");
        Ok(())
    }

    /// Test a value.
    ///
    /// `Ok(false)` means the value was definitely never added (or the
    /// filter was cleared since); `Ok(true)` may be a false positive.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the value encodes to no bytes.
    pub fn contains<V>(&self, value: &V) -> Result<bool>
    where
        V: CanonicalBytes + ?Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.contains_bytes(&bytes)
    }

    /// Test already-encoded bytes.
    ///
    /// # Errors
    ///
    /// See [`StandardBloomFilter::contains`].
    pub fn contains_bytes(&self, bytes: &[u8]) -> Result<bool> {
        if bytes.is_empty() {
            return Err(BloomSetError::empty_input());
        }
        if self.params.answers_nothing() {
            return Ok(false);
        }

        let probes = ProbeSequence::new(
            self.hasher.as_ref(),
            bytes,
            self.params.hash_count(),
            self.params.size(),
        )?;
        for position in probes {
            if !self.bits.get(position?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Zero every bit. `current_count` and parameters are kept.
    pub fn clear(&mut self) {
        self.bits.clear();
        tracing::debug!(current_count = self.params.current_count(), "cleared standard filter");
    }

    /// Zero every bit and `current_count`.
    pub fn reset(&mut self) {
        self.bits.clear();
        self.params.reset_count();
        tracing::debug!("reset standard filter");
    }

    /// Re-optimize for new targets and reallocate, discarding every element.
    ///
    /// The search restarts from the initial size and keeps the current
    /// `max_size`.
    ///
    /// # Errors
    ///
    /// Fails on invalid targets; the filter is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::StandardBloomFilter;
    ///
    /// let mut filter = StandardBloomFilter::new(10, 0.1, "FNV32").unwrap();
    /// filter.add("a").unwrap();
    ///
    /// filter.update_parameters(1000, 0.01).unwrap();
    /// assert_eq!(filter.current_count(), 0);
    /// assert_eq!(filter.size(), 16384);
    /// assert!(!filter.contains("a").unwrap());
    /// ```
    pub fn update_parameters(&mut self, capacity: usize, error_rate: f64) -> Result<()> {
        let params = self.params.reoptimized(capacity, error_rate)?;
        let bits = BitVec::new(params.size())?;
        tracing::debug!(
            old_size = self.params.size(),
            new_size = params.size(),
            hash_count = params.hash_count(),
            "updated standard filter parameters"
        );
        self.params = params;
        self.bits = bits;
        Ok(())
    }

    /// Expected number of elements.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.params.capacity()
    }

    /// Configured (or, for derived filters, nominal) false positive rate.
    #[must_use]
    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.params.error_rate()
    }

    /// Number of bits.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.params.size()
    }

    /// Probes per operation.
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.params.hash_count()
    }

    /// Cap on the bit count.
    #[must_use]
    #[inline]
    pub fn max_size(&self) -> usize {
        self.params.max_size()
    }

    /// Elements recorded as inserted.
    #[must_use]
    #[inline]
    pub fn current_count(&self) -> usize {
        self.params.current_count()
    }

    /// True if nothing has been recorded as inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.current_count() == 0
    }

    /// Parameters in use.
    #[must_use]
    pub fn parameters(&self) -> &FilterParameters {
        &self.params
    }

    /// Read-only view of the bit vector.
    #[must_use]
    pub fn bits(&self) -> &BitVec {
        &self.bits
    }

    /// Registry name of the digest.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// The digest shared with derived filters.
    #[must_use]
    pub fn hasher(&self) -> &Arc<dyn BloomHasher> {
        &self.hasher
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in [0, 1].
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.size() as f64
    }

    /// False positive rate estimated from the fill rate: `fill_rate^k`.
    ///
    /// Unlike [`StandardBloomFilter::error_rate`], this reflects what is
    /// actually stored, including the effect of set algebra.
    #[must_use]
    pub fn estimate_fpr(&self) -> f64 {
        if self.hash_count() == 0 {
            return 0.0;
        }
        let k = i32::try_from(self.hash_count()).unwrap_or(i32::MAX);
        self.fill_rate().powi(k)
    }

    /// Bitwise OR with `other`. See [`crate::filters::algebra::union`].
    ///
    /// # Errors
    ///
    /// Propagates parameter derivation failures.
    pub fn union(&self, other: &Self) -> Result<Self> {
        super::algebra::union(self, other)
    }

    /// Bitwise AND with `other`. See [`crate::filters::algebra::intersect`].
    ///
    /// # Errors
    ///
    /// Propagates parameter derivation failures.
    pub fn intersect(&self, other: &Self) -> Result<Self> {
        super::algebra::intersect(self, other)
    }

    /// Bitwise XOR with `other`. See
    /// [`crate::filters::algebra::symmetric_difference`].
    ///
    /// # Errors
    ///
    /// Propagates parameter derivation failures.
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self> {
        super::algebra::symmetric_difference(self, other)
    }
}

impl BloomFilter for StandardBloomFilter {
    fn add_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        StandardBloomFilter::add_bytes(self, bytes)
    }

    fn contains_bytes(&self, bytes: &[u8]) -> Result<bool> {
        StandardBloomFilter::contains_bytes(self, bytes)
    }

    fn clear(&mut self) {
        StandardBloomFilter::clear(self);
    }

    fn reset(&mut self) {
        StandardBloomFilter::reset(self);
    }

    fn update_parameters(&mut self, capacity: usize, error_rate: f64) -> Result<()> {
        StandardBloomFilter::update_parameters(self, capacity, error_rate)
    }

    fn parameters(&self) -> &FilterParameters {
        &self.params
    }

    fn hasher_name(&self) -> &'static str {
        StandardBloomFilter::hasher_name(self)
    }
}
