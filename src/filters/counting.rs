//! Counting Bloom filter with deletion support.
//!
//! Instead of a bit array, the filter keeps an array of 4-bit counters
//! (two per byte):
//! - Add: increment the `k` probed counters
//! - Delete: decrement the `k` probed counters
//! - Contains: true iff all `k` probed counters are non-zero
//!
//! # Trade-offs
//!
//! | Aspect          | Standard Bloom     | Counting Bloom              |
//! |-----------------|--------------------|-----------------------------|
//! | Delete          | Not supported      | O(k)                        |
//! | Space           | 1 bit per position | 4 bits per position         |
//! | False negatives | Never              | Possible after deletes      |
//!
//! # Saturation
//!
//! Counters stop at 15. Once a counter saturates, further increments are
//! lost, and a later delete can drive it to zero while other elements still
//! map there. A `tracing` warning is emitted whenever an add hits a
//! saturated counter. Decrements stop at 0, so deleting a value that was
//! never added cannot underflow.
//!
//! # Examples
//!
//! ```
//! use bloomset::CountingBloomFilter;
//!
//! let mut filter = CountingBloomFilter::new(1000, 0.01, "FNV32").unwrap();
//!
//! filter.add("hello").unwrap();
//! filter.add("world").unwrap();
//! assert!(filter.contains("hello").unwrap());
//!
//! filter.delete("hello").unwrap();
//! assert!(!filter.contains("hello").unwrap());
//! assert!(filter.contains("world").unwrap());
//! assert_eq!(filter.current_count(), 1);
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::core::counters::NibbleCounters;
use crate::core::filter::{BloomFilter, DeletableBloomFilter};
use crate::core::params::{FilterParameters, DEFAULT_SIZE, MAXIMUM_SIZE};
use crate::encoding::CanonicalBytes;
use crate::error::{BloomSetError, Result};
use crate::hash::{registry, BloomHasher, ProbeSequence, SaltedRehash};
use std::sync::Arc;

/// Bloom filter over packed 4-bit saturating counters.
#[derive(Debug, Clone)]
pub struct CountingBloomFilter {
    counters: NibbleCounters,
    params: FilterParameters,
    hasher: Arc<dyn BloomHasher>,
}

impl CountingBloomFilter {
    /// Create a filter for `capacity` elements at `error_rate`, digesting
    /// with the registered hash function `hash_name`.
    ///
    /// # Errors
    ///
    /// - [`BloomSetError::InvalidItemCount`] if `capacity == 0`
    /// - [`BloomSetError::FalsePositiveRateOutOfBounds`] if `error_rate` not in (0, 1)
    /// - [`BloomSetError::InvalidArgument`] if `hash_name` is not registered
    pub fn new(capacity: usize, error_rate: f64, hash_name: &str) -> Result<Self> {
        Self::with_max_size(capacity, error_rate, hash_name, MAXIMUM_SIZE)
    }

    /// Like [`CountingBloomFilter::new`] with an explicit cap on the counter count.
    ///
    /// # Errors
    ///
    /// As [`CountingBloomFilter::new`], plus
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
    /// Same validation as [`CountingBloomFilter::new`].
    pub fn with_hasher<H>(capacity: usize, error_rate: f64, hasher: H) -> Result<Self>
    where
        H: BloomHasher + 'static,
    {
        let params = FilterParameters::with_defaults(capacity, error_rate)?;
        Self::from_parameters(params, Arc::new(hasher))
    }

    pub(crate) fn from_parameters(
        params: FilterParameters,
        hasher: Arc<dyn BloomHasher>,
    ) -> Result<Self> {
        let counters = NibbleCounters::new(params.size())?;
        tracing::debug!(
            capacity = params.capacity(),
            error_rate = params.error_rate(),
            size = params.size(),
            bytes = counters.as_bytes().len(),
            hash_count = params.hash_count(),
            hasher = hasher.name(),
            "created counting bloom filter"
        );
        Ok(Self {
            counters,
            params,
            hasher,
        })
    }

    /// Insert a value.
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
    /// See [`CountingBloomFilter::add`].
    pub fn add_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Err(BloomSetError::empty_input());
        }
        self.params.check_capacity()?;

        let mut saturated = 0usize;
        for position in self.positions(bytes)? {
            if self.counters.increment(position) {
                saturated += 1;
            }
        }
        self.params.record_insert();

        if saturated > 0 {
            tracing::warn!(
                saturated,
                current_count = self.params.current_count(),
                "counter saturated, later deletes may under-count"
            );
        }
        tracing::trace!(current_count = self.params.current_count(), "added element");
        Ok(())
    }

    /// Remove a value.
    ///
    /// A no-op on an empty filter or one without probes. Removing a value
    /// that was never added decrements whatever counters it maps to.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the value encodes to no bytes.
    pub fn delete<V>(&mut self, value: &V) -> Result<()>
    where
        V: CanonicalBytes + ?Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.delete_bytes(&bytes)
    }

    /// Remove already-encoded bytes.
    ///
    /// # Errors
    ///
    /// See [`CountingBloomFilter::delete`].
    pub fn delete_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Err(BloomSetError::empty_input());
        }
        if self.params.answers_nothing() {
            return Ok(());
        }

        for position in self.positions(bytes)? {
            self.counters.decrement(position);
        }
        self.params.record_delete();

        tracing::trace!(current_count = self.params.current_count(), "deleted element");
        Ok(())
    }

    /// Test a value.
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
    /// See [`CountingBloomFilter::contains`].
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
            if self.counters.get(position?) == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Zero every counter. `current_count` and parameters are kept.
    pub fn clear(&mut self) {
        self.counters.clear();
        tracing::debug!(current_count = self.params.current_count(), "cleared counting filter");
    }

    /// Zero every counter and `current_count`.
    pub fn reset(&mut self) {
        self.counters.clear();
        self.params.reset_count();
        tracing::debug!("reset counting filter");
    }

    /// Re-optimize for new targets and reallocate, discarding every element.
    ///
    /// # Errors
    ///
    /// Fails on invalid targets; the filter is left unchanged.
    pub fn update_parameters(&mut self, capacity: usize, error_rate: f64) -> Result<()> {
        let params = self.params.reoptimized(capacity, error_rate)?;
        let counters = NibbleCounters::new(params.size())?;
        tracing::debug!(
            old_size = self.params.size(),
            new_size = params.size(),
            hash_count = params.hash_count(),
            "updated counting filter parameters"
        );
        self.params = params;
        self.counters = counters;
        Ok(())
    }

    /// Value of the counter at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= size()`.
    #[must_use]
    pub fn counter(&self, position: usize) -> u8 {
        self.counters.get(position)
    }

    /// Counters stuck at 15.
    #[must_use]
    pub fn saturated_counter_count(&self) -> usize {
        self.counters.saturated_count()
    }

    /// Counters above 0.
    #[must_use]
    pub fn count_nonzero(&self) -> usize {
        self.counters.nonzero_count()
    }

    /// Fraction of counters above 0.
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_nonzero() as f64 / self.size() as f64
    }

    /// Read-only view of the counter array.
    #[must_use]
    pub fn counters(&self) -> &NibbleCounters {
        &self.counters
    }

    /// Expected number of elements.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.params.capacity()
    }

    /// Configured false positive rate.
    #[must_use]
    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.params.error_rate()
    }

    /// Number of counters.
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

    /// Cap on the counter count.
    #[must_use]
    #[inline]
    pub fn max_size(&self) -> usize {
        self.params.max_size()
    }

    /// Elements added minus elements deleted.
    #[must_use]
    #[inline]
    pub fn current_count(&self) -> usize {
        self.params.current_count()
    }

    /// True if the count is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.current_count() == 0
    }

    /// Parameters in use.
    #[must_use]
    pub fn parameters(&self) -> &FilterParameters {
        &self.params
    }

    /// Registry name of the digest.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    fn positions(&self, bytes: &[u8]) -> Result<Vec<usize>> {
        SaltedRehash::positions(
            self.hasher.as_ref(),
            bytes,
            self.params.hash_count(),
            self.params.size(),
        )
    }
}

impl BloomFilter for CountingBloomFilter {
    fn add_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        CountingBloomFilter::add_bytes(self, bytes)
    }

    fn contains_bytes(&self, bytes: &[u8]) -> Result<bool> {
        CountingBloomFilter::contains_bytes(self, bytes)
    }

    fn clear(&mut self) {
        CountingBloomFilter::clear(self);
    }

    fn reset(&mut self) {
        CountingBloomFilter::reset(self);
    }

    fn update_parameters(&mut self, capacity: usize, error_rate: f64) -> Result<()> {
        CountingBloomFilter::update_parameters(self, capacity, error_rate)
    }

    fn parameters(&self) -> &FilterParameters {
        &self.params
    }

    fn hasher_name(&self) -> &'static str {
        CountingBloomFilter::hasher_name(self)
    }
}

impl DeletableBloomFilter for CountingBloomFilter {
    fn delete_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        CountingBloomFilter::delete_bytes(self, bytes)
    }
}
