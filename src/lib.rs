//! bloomset: Bloom filters with salted single-digest probing.
//!
//! A Bloom filter is a space-efficient probabilistic set. It can produce:
//! - **False positives**: may report a value that was never added
//! - **Zero false negatives**: a value that was added is always reported
//!
//! Filters are sized from an expected element count and a target false
//! positive rate. A doubling search picks the bit count, and every probe
//! position is the digest of the value's bytes salted with the probe index,
//! so a single 32-bit hash function (FNV32 by default) serves all `k` probes.
//!
//! # Quick Start
//!
//! ```
//! use bloomset::StandardBloomFilter;
//!
//! // 1,000 elements at 1% false positives, FNV32 digest
//! let mut filter = StandardBloomFilter::new(1_000, 0.01, "FNV32").unwrap();
//!
//! filter.add("hello").unwrap();
//! filter.add(&42u64).unwrap();
//!
//! assert!(filter.contains("hello").unwrap());
//! assert!(!filter.contains("goodbye").unwrap());
//! ```
//!
//! # Deletion
//!
//! ```
//! use bloomset::CountingBloomFilter;
//!
//! let mut filter = CountingBloomFilter::new(1_000, 0.01, "FNV32").unwrap();
//! filter.add("temporary").unwrap();
//! filter.delete("temporary").unwrap();
//! assert!(!filter.contains("temporary").unwrap());
//! ```
//!
//! # Set Algebra
//!
//! ```
//! use bloomset::StandardBloomFilter;
//!
//! let mut a = StandardBloomFilter::new(100, 0.01, "FNV32").unwrap();
//! let mut b = StandardBloomFilter::new(100, 0.01, "FNV32").unwrap();
//! a.add("x").unwrap();
//! b.add("y").unwrap();
//!
//! let union = a.union(&b).unwrap();
//! let common = a.intersect(&b).unwrap();
//! let diff = a.symmetric_difference(&b).unwrap();
//! assert_eq!(union.current_count(), 2);
//! assert_eq!(common.current_count(), common.count_set_bits());
//! assert_eq!(diff.current_count(), diff.count_set_bits());
//! ```
//!
//! # Using Builders
//!
//! ```
//! use bloomset::StandardBloomFilterBuilder;
//!
//! let filter = StandardBloomFilterBuilder::new()
//!     .capacity(10_000)
//!     .error_rate(0.001)
//!     .max_size(1 << 24)
//!     .build()
//!     .unwrap();
//! assert!(filter.size() <= 1 << 24);
//! ```
//!
//! # Concurrency
//!
//! Filters mutate through `&mut self` and are `Send + Sync`. For shared
//! mutation, wrap one in [`sync::LockedBloomFilter`].
//!
//! # Features
//!
//! - `xxhash` - registers an `"XXH32"` digest backed by `xxhash-rust`
//! - `trace` - per-probe `tracing` events
//!
//! # Logging
//!
//! The crate emits `tracing` events (construction and parameter changes at
//! `debug`, adds and deletes at `trace`, saturation at `warn`). No
//! subscriber is installed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/bloomset/0.1.0")]

/// Core data structures, traits and parameter math
pub mod core;

/// Error types and result aliases
pub mod error;

/// Canonical byte encoding of inputs
pub mod encoding;

/// Filter implementations
pub mod filters;

/// Digest functions, registry and probe derivation
pub mod hash;

/// Bit and nibble helpers
pub mod util;

/// Locked wrapper for shared mutation
pub mod sync;

/// Type-safe builders
pub mod builder;

// Re-export commonly used types at crate root
pub use error::{BloomSetError, ErrorKind, Result};

pub use crate::core::filter::{BloomFilter, DeletableBloomFilter};
pub use crate::core::params::{FilterParameters, DEFAULT_SIZE, MAXIMUM_SIZE};
pub use encoding::CanonicalBytes;

pub use filters::{CountingBloomFilter, StandardBloomFilter};

pub use builder::{CountingBloomFilterBuilder, StandardBloomFilterBuilder};

pub use hash::{BloomHasher, DEFAULT_HASH};

pub use sync::LockedBloomFilter;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomset::prelude::*;
///
/// let mut filter = StandardBloomFilter::new(1000, 0.01, DEFAULT_HASH).unwrap();
/// filter.add("hello").unwrap();
/// assert!(filter.contains("hello").unwrap());
/// ```
pub mod prelude {
    pub use crate::builder::{CountingBloomFilterBuilder, StandardBloomFilterBuilder};
    pub use crate::core::filter::{BloomFilter, DeletableBloomFilter};
    pub use crate::encoding::CanonicalBytes;
    pub use crate::error::{BloomSetError, ErrorKind, Result};
    pub use crate::filters::{CountingBloomFilter, StandardBloomFilter};
    pub use crate::hash::{BloomHasher, DEFAULT_HASH};
    pub use crate::sync::LockedBloomFilter;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut filter = StandardBloomFilter::new(100, 0.01, DEFAULT_HASH).unwrap();
        filter.add("test").unwrap();
        assert!(filter.contains("test").unwrap());
    }

    #[test]
    fn test_trait_usage() {
        fn roundtrip<F: DeletableBloomFilter>(filter: &mut F) {
            filter.add("item").unwrap();
            assert!(filter.contains("item").unwrap());
            filter.delete("item").unwrap();
            assert!(!filter.contains("item").unwrap());
        }

        let mut filter = CountingBloomFilter::new(100, 0.01, DEFAULT_HASH).unwrap();
        roundtrip(&mut filter);
    }

    #[test]
    fn test_builder() {
        let filter = StandardBloomFilterBuilder::new()
            .capacity(1000)
            .error_rate(0.01)
            .build()
            .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filters_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StandardBloomFilter>();
        assert_send_sync::<CountingBloomFilter>();
        assert_send_sync::<LockedBloomFilter<CountingBloomFilter>>();
    }

    #[test]
    fn test_error_kinds_at_root() {
        let err = StandardBloomFilter::new(0, 0.01, DEFAULT_HASH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
