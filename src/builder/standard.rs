//! Builder for standard Bloom filters.
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use bloomset::builder::StandardBloomFilterBuilder;
//!
//! let filter = StandardBloomFilterBuilder::new()
//!     .capacity(1_000)
//!     .error_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.size(), 16384);
//! ```
//!
//! ## Full Configuration
//!
//! ```
//! use bloomset::builder::StandardBloomFilterBuilder;
//!
//! let filter = StandardBloomFilterBuilder::new()
//!     .hash_function("FNV32")
//!     .initial_size(1024)
//!     .capacity(1_000)
//!     .error_rate(0.01)
//!     .max_size(1 << 20)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.max_size(), 1 << 20);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use bloomset::builder::StandardBloomFilterBuilder;
//!
//! let result = StandardBloomFilterBuilder::new()
//!     .capacity(0)
//!     .error_rate(0.01)
//!     .build();
//! assert!(result.is_err());
//! ```

use super::{BuildOptions, Complete, HasherSource, Initial, WithCapacity};
use crate::error::Result;
use crate::filters::standard::StandardBloomFilter;
use crate::hash::BloomHasher;
use std::marker::PhantomData;
use std::sync::Arc;

/// Builder for [`StandardBloomFilter`] with type-state guarantees.
#[derive(Debug, Clone)]
pub struct StandardBloomFilterBuilder<State = Initial> {
    options: BuildOptions,
    _state: PhantomData<State>,
}

impl StandardBloomFilterBuilder<Initial> {
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
    pub fn capacity(mut self, capacity: usize) -> StandardBloomFilterBuilder<WithCapacity> {
        self.options.capacity = capacity;
        StandardBloomFilterBuilder {
            options: self.options,
            _state: PhantomData,
        }
    }
}

impl Default for StandardBloomFilterBuilder<Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardBloomFilterBuilder<WithCapacity> {
    /// Set the target false positive rate (required).
    #[must_use]
    pub fn error_rate(mut self, error_rate: f64) -> StandardBloomFilterBuilder<Complete> {
        self.options.error_rate = error_rate;
        StandardBloomFilterBuilder {
            options: self.options,
            _state: PhantomData,
        }
    }
}

impl<State> StandardBloomFilterBuilder<State> {
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

    /// Cap on the bit count. Defaults to 838 860 800.
    #[must_use]
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.options.max_size = max_size;
        self
    }
}

impl StandardBloomFilterBuilder<Complete> {
    /// Validate the options and construct the filter.
    ///
    /// # Errors
    ///
    /// - `InvalidItemCount` if the capacity is 0
    /// - `FalsePositiveRateOutOfBounds` if the rate is not in (0, 1)
    /// - `InvalidFilterSize` if `initial_size` is 0 or above `max_size`
    /// - `InvalidArgument` if the hash function name is unknown
    pub fn build(self) -> Result<StandardBloomFilter> {
        let (params, hasher) = self.options.resolve()?;
        StandardBloomFilter::from_parameters(params, hasher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Fnv32;

    #[test]
    fn test_builder_minimal() {
        let filter = StandardBloomFilterBuilder::new()
            .capacity(128)
            .error_rate(0.01)
            .build()
            .unwrap();
        assert_eq!(filter.size(), 2048);
        assert_eq!(filter.hash_count(), 12);
        assert_eq!(filter.hasher_name(), "FNV32");
    }

    #[test]
    fn test_builder_invalid_capacity() {
        let err = StandardBloomFilterBuilder::new()
            .capacity(0)
            .error_rate(0.01)
            .build()
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_builder_invalid_error_rates() {
        for rate in [0.0, 1.0, -0.1, 1.5] {
            let result = StandardBloomFilterBuilder::new()
                .capacity(100)
                .error_rate(rate)
                .build();
            assert!(result.is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn test_builder_unknown_hash_function() {
        let result = StandardBloomFilterBuilder::new()
            .hash_function("MURMUR3")
            .capacity(100)
            .error_rate(0.01)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_custom_hasher() {
        let mut filter = StandardBloomFilterBuilder::new()
            .capacity(100)
            .error_rate(0.01)
            .hasher(Fnv32::new())
            .build()
            .unwrap();
        filter.add("x").unwrap();
        assert!(filter.contains("x").unwrap());
    }

    #[test]
    fn test_builder_initial_size_above_max_fails() {
        let result = StandardBloomFilterBuilder::new()
            .initial_size(4096)
            .max_size(1024)
            .capacity(10)
            .error_rate(0.1)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_initial_size_sticks_for_updates() {
        let mut filter = StandardBloomFilterBuilder::new()
            .initial_size(1024)
            .capacity(10)
            .error_rate(0.1)
            .build()
            .unwrap();
        assert_eq!(filter.size(), 1024);
        filter.update_parameters(10, 0.1).unwrap();
        assert_eq!(filter.size(), 1024);
    }

    #[test]
    fn test_builder_reusability() {
        let template = StandardBloomFilterBuilder::new().capacity(500).error_rate(0.05);
        let a = template.clone().build().unwrap();
        let b = template.build().unwrap();
        assert_eq!(a.size(), b.size());
    }
}
