//! Core Bloom filter trait definitions.
//!
//! # Guarantees
//!
//! 1. **No False Negatives**: after a successful `add(v)`, `contains(v)`
//!    returns `true` until `clear`, `reset` or `update_parameters`.
//! 2. **Bounded False Positives**: with at most `capacity` elements, the
//!    rate tracks the configured target (unless sizing saturated).
//! 3. **Atomic Operations**: a failing call leaves the filter untouched.
//!
//! # Trait Hierarchy
//!
//! ```text
//! BloomFilter                (add / contains / clear / reset / update_parameters)
//!     └── DeletableBloomFilter   (delete via counters)
//! ```
//!
//! Both traits work on canonical bytes. The generic `add` / `contains` /
//! `delete` helpers encode any [`CanonicalBytes`] value first.
//!
//! # Concurrency
//!
//! Mutation requires `&mut self`. Filters are `Send + Sync`, so they can be
//! shared read-only or wrapped in [`crate::sync::LockedBloomFilter`].

use crate::core::params::FilterParameters;
use crate::encoding::CanonicalBytes;
use crate::error::Result;

/// Common interface of every filter variant.
///
/// # Examples
///
/// Code written against the trait works with either filter:
///
/// ```
/// use bloomset::core::BloomFilter;
/// use bloomset::{CountingBloomFilter, StandardBloomFilter};
///
/// fn load<F: BloomFilter>(filter: &mut F, words: &[&str]) -> bloomset::Result<()> {
///     for word in words {
///         filter.add(*word)?;
///     }
///     Ok(())
/// }
///
/// let mut standard = StandardBloomFilter::new(100, 0.01, "FNV32").unwrap();
/// let mut counting = CountingBloomFilter::new(100, 0.01, "FNV32").unwrap();
/// load(&mut standard, &["a", "b"]).unwrap();
/// load(&mut counting, &["a", "b"]).unwrap();
/// assert!(BloomFilter::contains(&standard, "a").unwrap());
/// assert_eq!(BloomFilter::current_count(&counting), 2);
/// ```
pub trait BloomFilter: Send + Sync {
    /// Insert an encoded value.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `bytes` is empty
    /// - `CapacityExceeded` if the filter already holds `capacity` elements
    fn add_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Test an encoded value.
    ///
    /// Returns `false` when the value is definitely absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bytes` is empty.
    fn contains_bytes(&self, bytes: &[u8]) -> Result<bool>;

    /// Zero the storage. `current_count` and parameters are kept.
    fn clear(&mut self);

    /// Zero the storage and `current_count`.
    fn reset(&mut self);

    /// Re-optimize for new targets, discarding all stored state.
    ///
    /// # Errors
    ///
    /// Fails on invalid targets, in which case nothing changes.
    fn update_parameters(&mut self, capacity: usize, error_rate: f64) -> Result<()>;

    /// Current parameters.
    fn parameters(&self) -> &FilterParameters;

    /// Registry name of the digest in use.
    fn hasher_name(&self) -> &'static str;

    /// Encode and insert a value.
    ///
    /// # Errors
    ///
    /// See [`BloomFilter::add_bytes`].
    fn add<V>(&mut self, value: &V) -> Result<()>
    where
        V: CanonicalBytes + ?Sized,
        Self: Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.add_bytes(&bytes)
    }

    /// Encode and test a value.
    ///
    /// # Errors
    ///
    /// See [`BloomFilter::contains_bytes`].
    fn contains<V>(&self, value: &V) -> Result<bool>
    where
        V: CanonicalBytes + ?Sized,
        Self: Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.contains_bytes(&bytes)
    }

    /// Expected number of elements.
    fn capacity(&self) -> usize {
        self.parameters().capacity()
    }

    /// Configured false positive rate.
    fn error_rate(&self) -> f64 {
        self.parameters().error_rate()
    }

    /// Number of bits (or counters).
    fn size(&self) -> usize {
        self.parameters().size()
    }

    /// Probes per operation.
    fn hash_count(&self) -> usize {
        self.parameters().hash_count()
    }

    /// Upper bound on `size`.
    fn max_size(&self) -> usize {
        self.parameters().max_size()
    }

    /// Elements recorded as inserted.
    fn current_count(&self) -> usize {
        self.parameters().current_count()
    }
}

/// Filters that can remove elements.
///
/// Deletion is approximate: counters that saturated, or that are shared with
/// other elements through collisions, may under-count afterwards.
pub trait DeletableBloomFilter: BloomFilter {
    /// Remove an encoded value.
    ///
    /// A no-op when the filter is empty or has no probes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bytes` is empty.
    fn delete_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Encode and remove a value.
    ///
    /// # Errors
    ///
    /// See [`DeletableBloomFilter::delete_bytes`].
    fn delete<V>(&mut self, value: &V) -> Result<()>
    where
        V: CanonicalBytes + ?Sized,
        Self: Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.delete_bytes(&bytes)
    }
}
