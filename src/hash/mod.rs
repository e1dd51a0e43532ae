//! Digest functions, the name registry, and probe derivation.
//!
//! # Module Organization
//!
//! ```text
//! hash/
//! ├── hasher.rs      - BloomHasher trait (bytes -> u32)
//! ├── fnv.rs         - FNV32 digest (always available)
//! ├── xxhash.rs      - XXH32 digest (feature `xxhash`)
//! ├── registry.rs    - name -> digest lookup
//! └── strategies.rs  - salted re-hash probe sequence
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomset::hash::{registry, SaltedRehash};
//!
//! let hasher = registry::resolve("FNV32").unwrap();
//! let positions = SaltedRehash::positions(hasher.as_ref(), b"hello", 5, 1024).unwrap();
//! assert_eq!(positions.len(), 5);
//! ```

pub mod fnv;
pub mod hasher;
pub mod registry;
pub mod strategies;

#[cfg(feature = "xxhash")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
pub mod xxhash;

pub use fnv::Fnv32;
pub use hasher::BloomHasher;
pub use strategies::{ProbeSequence, SaltedRehash};

#[cfg(feature = "xxhash")]
pub use xxhash::Xxh32;

/// Name of the digest used when none is specified.
pub const DEFAULT_HASH: &str = fnv::FNV32_NAME;
