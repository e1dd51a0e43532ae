//! Reader-writer locked wrapper around any filter.
//!
//! Filters mutate through `&mut self`. [`LockedBloomFilter`] puts one behind
//! a `parking_lot::RwLock` so it can be shared as `Arc<LockedBloomFilter<_>>`
//! and mutated through `&self`:
//!
//! - queries take the read lock and run in parallel,
//! - add / delete / clear / reset take the write lock.
//!
//! `parking_lot` locks do not poison, so lock acquisition never fails.
//!
//! # Examples
//!
//! ```
//! use bloomset::sync::LockedBloomFilter;
//! use bloomset::StandardBloomFilter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let filter = Arc::new(LockedBloomFilter::new(
//!     StandardBloomFilter::new(4_000, 0.01, "FNV32").unwrap(),
//! ));
//!
//! let handles: Vec<_> = (0..4u32)
//!     .map(|t| {
//!         let filter = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             for i in 0..1_000u32 {
//!                 filter.add(&(t * 1_000 + i)).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(filter.current_count(), 4_000);
//! assert!(filter.contains(&1234u32).unwrap());
//! ```

use crate::core::filter::{BloomFilter, DeletableBloomFilter};
use crate::encoding::CanonicalBytes;
use crate::error::Result;
use parking_lot::RwLock;

/// A filter behind a reader-writer lock.
#[derive(Debug)]
pub struct LockedBloomFilter<F> {
    inner: RwLock<F>,
}

impl<F: BloomFilter> LockedBloomFilter<F> {
    /// Wrap `filter`.
    #[must_use]
    pub fn new(filter: F) -> Self {
        Self {
            inner: RwLock::new(filter),
        }
    }

    /// Unwrap the filter.
    #[must_use]
    pub fn into_inner(self) -> F {
        self.inner.into_inner()
    }

    /// Insert a value under the write lock.
    ///
    /// # Errors
    ///
    /// See [`BloomFilter::add_bytes`].
    pub fn add<V>(&self, value: &V) -> Result<()>
    where
        V: CanonicalBytes + ?Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.inner.write().add_bytes(&bytes)
    }

    /// Test a value under the read lock.
    ///
    /// # Errors
    ///
    /// See [`BloomFilter::contains_bytes`].
    pub fn contains<V>(&self, value: &V) -> Result<bool>
    where
        V: CanonicalBytes + ?Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.inner.read().contains_bytes(&bytes)
    }

    /// Zero the storage, keeping `current_count`.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Zero the storage and `current_count`.
    pub fn reset(&self) {
        self.inner.write().reset();
    }

    /// Re-optimize the wrapped filter.
    ///
    /// # Errors
    ///
    /// See [`BloomFilter::update_parameters`].
    pub fn update_parameters(&self, capacity: usize, error_rate: f64) -> Result<()> {
        self.inner.write().update_parameters(capacity, error_rate)
    }

    /// Elements recorded as inserted.
    #[must_use]
    pub fn current_count(&self) -> usize {
        self.inner.read().current_count()
    }

    /// Run `f` with shared access.
    pub fn with_read<R>(&self, f: impl FnOnce(&F) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut F) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<F: DeletableBloomFilter> LockedBloomFilter<F> {
    /// Remove a value under the write lock.
    ///
    /// # Errors
    ///
    /// See [`DeletableBloomFilter::delete_bytes`].
    pub fn delete<V>(&self, value: &V) -> Result<()>
    where
        V: CanonicalBytes + ?Sized,
    {
        let bytes = value.canonical_bytes()?;
        self.inner.write().delete_bytes(&bytes)
    }
}

impl<F: BloomFilter> From<F> for LockedBloomFilter<F> {
    fn from(filter: F) -> Self {
        Self::new(filter)
    }
}
