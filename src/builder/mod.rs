//! Builder pattern for Bloom filter construction.
//!
//! Builders use the type-state pattern: `capacity` and `error_rate` are
//! required, and `build` only exists once both were given.
//!
//! ```text
//! Initial ──.capacity()──▶ WithCapacity ──.error_rate()──▶ Complete ──.build()──▶ filter
//! ```
//!
//! Value errors (zero capacity, rate outside (0, 1), unknown hash name,
//! inconsistent sizes) are reported by `build`.
//!
//! # Examples
//!
//! ```
//! use bloomset::builder::{CountingBloomFilterBuilder, StandardBloomFilterBuilder};
//!
//! let standard = StandardBloomFilterBuilder::new()
//!     .capacity(10_000)
//!     .error_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! let counting = CountingBloomFilterBuilder::new()
//!     .capacity(1_000)
//!     .error_rate(0.01)
//!     .max_size(8192)
//!     .build()
//!     .unwrap();
//! assert_eq!(counting.size(), 8192);
//! # let _ = standard;
//! ```
//!
//! # Builder Options
//!
//! | Option             | Default            |
//! |--------------------|--------------------|
//! | `hash_function`    | `"FNV32"`          |
//! | `hasher`           | registry lookup    |
//! | `initial_size`     | 128                |
//! | `max_size`         | 838 860 800        |

#![allow(clippy::module_name_repetitions)]

pub mod counting;
pub mod standard;

pub use counting::CountingBloomFilterBuilder;
pub use standard::StandardBloomFilterBuilder;

use crate::core::params::{FilterParameters, DEFAULT_SIZE, MAXIMUM_SIZE};
use crate::error::Result;
use crate::hash::{registry, BloomHasher, DEFAULT_HASH};
use std::sync::Arc;

/// Type-state marker: nothing set yet.
#[derive(Debug, Clone, Copy)]
pub struct Initial;

/// Type-state marker: capacity set.
#[derive(Debug, Clone, Copy)]
pub struct WithCapacity;

/// Type-state marker: all required parameters set.
#[derive(Debug, Clone, Copy)]
pub struct Complete;

/// Where the digest comes from.
#[derive(Debug, Clone)]
enum HasherSource {
    Named(String),
    Instance(Arc<dyn BloomHasher>),
}

/// Settings shared by every builder.
#[derive(Debug, Clone)]
struct BuildOptions {
    capacity: usize,
    error_rate: f64,
    hasher: HasherSource,
    initial_size: usize,
    max_size: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            capacity: 0,
            error_rate: 0.0,
            hasher: HasherSource::Named(DEFAULT_HASH.to_string()),
            initial_size: DEFAULT_SIZE,
            max_size: MAXIMUM_SIZE,
        }
    }
}

impl BuildOptions {
    /// Resolve the digest and run the optimizer.
    fn resolve(&self) -> Result<(FilterParameters, Arc<dyn BloomHasher>)> {
        let hasher = match &self.hasher {
            HasherSource::Named(name) => registry::resolve(name)?,
            HasherSource::Instance(hasher) => Arc::clone(hasher),
        };
        let params = FilterParameters::optimize(
            self.capacity,
            self.error_rate,
            self.initial_size,
            self.max_size,
        )?;
        Ok((params, hasher))
    }
}

/// Prelude for convenient builder imports.
pub mod prelude {
    pub use super::{CountingBloomFilterBuilder, StandardBloomFilterBuilder};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Fnv32;

    #[test]
    fn test_default_options_resolve_to_fnv() {
        let options = BuildOptions {
            capacity: 128,
            error_rate: 0.01,
            ..BuildOptions::default()
        };
        let (params, hasher) = options.resolve().unwrap();
        assert_eq!(hasher.name(), "FNV32");
        assert_eq!(params.size(), 2048);
    }

    #[test]
    fn test_instance_hasher_is_shared() {
        let shared: Arc<dyn BloomHasher> = Arc::new(Fnv32::new());
        let options = BuildOptions {
            capacity: 10,
            error_rate: 0.1,
            hasher: HasherSource::Instance(Arc::clone(&shared)),
            ..BuildOptions::default()
        };
        let (_, hasher) = options.resolve().unwrap();
        assert!(Arc::ptr_eq(&hasher, &shared));
    }

    #[test]
    fn test_unset_required_values_fail() {
        assert!(BuildOptions::default().resolve().is_err());
    }

    #[test]
    fn test_unknown_name_fails() {
        let options = BuildOptions {
            capacity: 10,
            error_rate: 0.1,
            hasher: HasherSource::Named("nope".into()),
            ..BuildOptions::default()
        };
        assert!(options.resolve().unwrap_err().is_invalid_argument());
    }
}
