//! XXH32 digest (requires the `xxhash` feature).
//!
//! Wraps the `xxhash-rust` crate's XXH32. Registered as `"XXH32"` next to
//! the default `"FNV32"` when the feature is enabled, which gives filters a
//! better-mixing digest for long or highly structured keys.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "xxhash")]
//! # {
//! use bloomset::hash::{BloomHasher, Xxh32};
//!
//! let hasher = Xxh32::new();
//! let h = hasher.digest(b"hello world").unwrap();
//! assert_ne!(h, Xxh32::with_seed(1).digest(b"hello world").unwrap());
//! # }
//! ```

use super::hasher::BloomHasher;
use crate::error::{BloomSetError, Result};
use xxhash_rust::xxh32::xxh32;

/// Registry name of [`Xxh32`].
pub const XXH32_NAME: &str = "XXH32";

/// XXH32 digest with a fixed seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh32 {
    seed: u32,
}

impl Xxh32 {
    /// Create an XXH32 digest with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create an XXH32 digest with an explicit seed.
    #[must_use]
    pub const fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// The seed this digest was created with.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

impl BloomHasher for Xxh32 {
    #[inline]
    fn digest(&self, bytes: &[u8]) -> Result<u32> {
        if bytes.is_empty() {
            return Err(BloomSetError::empty_input());
        }
        Ok(xxh32(bytes, self.seed))
    }

    fn name(&self) -> &'static str {
        XXH32_NAME
    }
}
