//! Name-based lookup of digest implementations.
//!
//! Filters are usually configured with a hash function *name* such as
//! `"FNV32"`. The registry maps each name to a constructor. The table is
//! built on first use and never changes afterwards; lookups are read-only
//! and safe from any thread.
//!
//! Names are matched exactly (case-sensitive). Unknown names fail closed
//! with an `InvalidArgument` error.
//!
//! # Examples
//!
//! ```
//! use bloomset::hash::registry;
//!
//! let fnv = registry::resolve("FNV32").unwrap();
//! assert_eq!(fnv.name(), "FNV32");
//!
//! assert!(registry::resolve("SHA-256").is_err());
//! assert!(registry::available().contains(&"FNV32"));
//! ```

use super::fnv::{Fnv32, FNV32_NAME};
use super::hasher::BloomHasher;
use crate::error::{BloomSetError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

type Constructor = fn() -> Arc<dyn BloomHasher>;

fn fnv32() -> Arc<dyn BloomHasher> {
    Arc::new(Fnv32::new())
}

#[cfg(feature = "xxhash")]
fn xxh32() -> Arc<dyn BloomHasher> {
    Arc::new(super::xxhash::Xxh32::new())
}

fn table() -> &'static BTreeMap<&'static str, Constructor> {
    static TABLE: OnceLock<BTreeMap<&'static str, Constructor>> = OnceLock::new();

    TABLE.get_or_init(|| {
        let mut table: BTreeMap<&'static str, Constructor> = BTreeMap::new();
        table.insert(FNV32_NAME, fnv32 as Constructor);

        #[cfg(feature = "xxhash")]
        table.insert(super::xxhash::XXH32_NAME, xxh32 as Constructor);

        table
    })
}

/// Resolve a hash function name to a shareable digest instance.
///
/// # Errors
///
/// Returns `InvalidArgument` if no implementation is registered under `name`.
pub fn resolve(name: &str) -> Result<Arc<dyn BloomHasher>> {
    match table().get(name) {
        Some(constructor) => Ok(constructor()),
        None => {
            tracing::debug!(name, "unknown hash function requested");
            Err(BloomSetError::unknown_hash_function(name))
        }
    }
}

/// Whether `name` resolves to a registered digest.
#[must_use]
pub fn is_registered(name: &str) -> bool {
    table().contains_key(name)
}

/// Registered names in sorted order.
#[must_use]
pub fn available() -> Vec<&'static str> {
    table().keys().copied().collect()
}
