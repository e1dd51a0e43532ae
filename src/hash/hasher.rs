//! Digest trait for Bloom filter hash functions.
//!
//! Filters never hash values directly. A value is first turned into its
//! canonical byte encoding (see [`crate::encoding`]), and the digest
//! capability maps those bytes to a 32-bit integer. Index derivation lives
//! separately in [`super::strategies`].
//!
//! # Separation of Concerns
//!
//! - **`BloomHasher`**: bytes -> `u32` digest
//! - **`SaltedRehash`**: digest of `bytes ++ index` -> bit position
//! - **Filters**: compose hasher + probe + storage
//!
//! # Examples
//!
//! ```
//! use bloomset::hash::{BloomHasher, Fnv32};
//!
//! let hasher = Fnv32::new();
//! let h1 = hasher.digest(b"hello").unwrap();
//! let h2 = hasher.digest(b"hello").unwrap();
//! assert_eq!(h1, h2);
//! ```

#![allow(clippy::module_name_repetitions)]

use crate::error::Result;
use std::fmt;

/// Digest capability consumed by every filter.
///
/// # Requirements
///
/// - **Determinism**: same bytes, same digest, across runs and processes.
/// - **Purity**: no observable state; a single instance may be shared.
/// - **Empty input**: must fail with an `InvalidArgument` error.
///
/// Collision resistance is not required.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so filters can be shared read-only
/// across threads.
///
/// # Examples
///
/// A custom digest plugged into a filter:
///
/// ```
/// use bloomset::hash::BloomHasher;
/// use bloomset::{BloomSetError, Result, StandardBloomFilter};
///
/// #[derive(Debug)]
/// struct ByteSum;
///
/// impl BloomHasher for ByteSum {
///     fn digest(&self, bytes: &[u8]) -> Result<u32> {
///         if bytes.is_empty() {
///             return Err(BloomSetError::empty_input());
///         }
///         Ok(bytes.iter().map(|&b| u32::from(b)).sum())
///     }
///
///     fn name(&self) -> &'static str {
///         "ByteSum"
///     }
/// }
///
/// let mut filter = StandardBloomFilter::with_hasher(100, 0.05, ByteSum).unwrap();
/// filter.add("abc").unwrap();
/// assert!(filter.contains("abc").unwrap());
/// ```
pub trait BloomHasher: fmt::Debug + Send + Sync {
    /// Digest a non-empty byte sequence to a 32-bit value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bytes` is empty.
    fn digest(&self, bytes: &[u8]) -> Result<u32>;

    /// Registry identifier of this hash function (e.g. `"FNV32"`).
    fn name(&self) -> &'static str;
}
