//! Builder for counting Bloom filters.
//!
//! ```
//! use bloomset::builder::CountingBloomFilterBuilder;
//!
//! let mut filter = CountingBloomFilterBuilder::new()
//!     .capacity(1_000)
//!     .error_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! filter.add("session-42").unwrap();
//! filter.delete("session-42").unwrap();
//! assert!(!filter.contains("session-42").unwrap());
//! ```

use super::{BuildOptions, Complete, HasherSource, Initial, WithCapacity};
use crate::error::Result;
use crate::filters::counting::CountingBloomFilter;
use crate::hash::BloomHasher;
use std::marker::PhantomData;
use std::sync::Arc;

/// Builder for [`CountingBloomFilter`] with type-state guarantees.
#[derive(Debug, Clone)]
pub struct CountingBloomFilterBuilder<State = Initial> {
    options: BuildOptions,
    _state: PhantomData<State>,
}

impl CountingBloomFilterBuilder<Initial> {
    /// Create a builder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: BuildOptions::default(),
            _state: PhantomData,
        }
    }

    /// Set the expected number of elements (required).
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> CountingBloomFilterBuilder<WithCapacity> {
        self.options.capacity = capacity;
        CountingBloomFilterBuilder {
            options: self.options,
            _state: PhantomData,
        }
    }
}

impl Default for CountingBloomFilterBuilder<Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingBloomFilterBuilder<WithCapacity> {
    /// Set the target false positive rate (required).
    #[must_use]
    pub fn error_rate(mut self, error_rate: f64) -> CountingBloomFilterBuilder<Complete> {
        self.options.error_rate = error_rate;
        CountingBloomFilterBuilder {
            options: self.options,
            _state: PhantomData,
        }
    }
}

impl<State> CountingBloomFilterBuilder<State> {
    /// Digest by registry name. Defaults to `"FNV32"`.
    #[must_use]
    pub fn hash_function(mut self, name: impl Into<String>) -> Self {
        self.options.hasher = HasherSource::Named(name.into());
        self
    }

    /// Digest by instance, bypassing the registry.
    #[must_use]
    pub fn hasher<H>(mut self, hasher: H) -> Self
    where
        H: BloomHasher + 'static,
    {
        self.options.hasher = HasherSource::Instance(Arc::new(hasher));
        self
    }

    /// Size the doubling search starts from. Defaults to 128.
    #[must_use]
    pub fn initial_size(mut self, initial_size: usize) -> Self {
        self.options.initial_size = initial_size;
        self
    }

    /// Cap on the counter count. Defaults to 838 860 800.
    #[must_use]
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.options.max_size = max_size;
        self
    }
}

impl CountingBloomFilterBuilder<Complete> {
    /// Validate the options and construct the filter.
    ///
    /// # Errors
    ///
    /// Same conditions as [`super::StandardBloomFilterBuilder::build`].
    pub fn build(self) -> Result<CountingBloomFilter> {
        let (params, hasher) = self.options.resolve()?;
        CountingBloomFilter::from_parameters(params, hasher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        let filter = CountingBloomFilterBuilder::new()
            .capacity(128)
            .error_rate(0.01)
            .build()
            .unwrap();
        assert_eq!(filter.size(), 2048);
        assert_eq!(filter.counters().as_bytes().len(), 1024);
    }

    #[test]
    fn test_builder_max_size_saturates() {
        let filter = CountingBloomFilterBuilder::new()
            .capacity(1_000)
            .error_rate(0.01)
            .max_size(4096)
            .build()
            .unwrap();
        assert_eq!(filter.size(), 4096);
        assert_eq!(filter.hash_count(), 3);
        assert!(filter.parameters().is_saturated());
    }

    #[test]
    fn test_builder_invalid_values() {
        assert!(CountingBloomFilterBuilder::new()
            .capacity(0)
            .error_rate(0.01)
            .build()
            .is_err());
        assert!(CountingBloomFilterBuilder::new()
            .capacity(10)
            .error_rate(2.0)
            .build()
            .is_err());
        assert!(CountingBloomFilterBuilder::new()
            .hash_function("unknown")
            .capacity(10)
            .error_rate(0.1)
            .build()
            .is_err());
    }
}
