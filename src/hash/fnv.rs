//! 32-bit Fowler-Noll-Vo digest.
//!
//! This is the FNV-1a ordering (XOR, then multiply) with the multiplication by the FNV
//! prime (`0x01000193`) spelled out as the equivalent shift-add sequence:
//!
//! ```text
//! hash = 0x811c9dc5
//! for each byte b (sign-extended to 32 bits):
//!     hash ^= b
//!     hash += (hash << 1) + (hash << 4) + (hash << 7) + (hash << 8) + (hash << 24)
//! ```
//!
//! All arithmetic wraps at 32 bits. Bytes are sign-extended before the XOR,
//! so bytes `>= 0x80` flip the upper 24 bits of the state as well. Digests
//! therefore differ from textbook FNV-1a for non-ASCII input.

use super::hasher::BloomHasher;
use crate::error::{BloomSetError, Result};

/// FNV 32-bit offset basis.
pub const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// Registry name of [`Fnv32`].
pub const FNV32_NAME: &str = "FNV32";

/// Stateless FNV-1a 32-bit digest.
///
/// # Examples
///
/// ```
/// use bloomset::hash::{BloomHasher, Fnv32};
///
/// let fnv = Fnv32::new();
/// assert_eq!(fnv.name(), "FNV32");
/// assert!(fnv.digest(b"").is_err());
/// assert_ne!(fnv.digest(b"a").unwrap(), fnv.digest(b"b").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv32;

impl Fnv32 {
    /// Create the digest. Equivalent to `Fnv32::default()`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Digest without the empty-input check.
    ///
    /// An empty slice yields the offset basis.
    #[inline]
    #[must_use]
    pub fn digest_unchecked(bytes: &[u8]) -> u32 {
        let mut hash = FNV32_OFFSET_BASIS;
        for &byte in bytes {
            hash ^= byte as i8 as i32 as u32;
            hash = hash.wrapping_add(
                (hash << 1)
                    .wrapping_add(hash << 4)
                    .wrapping_add(hash << 7)
                    .wrapping_add(hash << 8)
                    .wrapping_add(hash << 24),
            );
        }
        hash
    }
}

impl BloomHasher for Fnv32 {
    #[inline]
    fn digest(&self, bytes: &[u8]) -> Result<u32> {
        if bytes.is_empty() {
            return Err(BloomSetError::empty_input());
        }
        Ok(Self::digest_unchecked(bytes))
    }

    fn name(&self) -> &'static str {
        FNV32_NAME
    }
}
