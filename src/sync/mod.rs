//! Thread-safe access to filters.
//!
//! Filters themselves are single-threaded: mutation takes `&mut self`.
//! They are `Send + Sync`, so read-only sharing needs nothing extra. For
//! shared mutation, [`LockedBloomFilter`] wraps any [`crate::core::BloomFilter`]
//! in a `parking_lot::RwLock`.

mod locked;

pub use locked::LockedBloomFilter;

/// Prelude for convenient sync imports.
pub mod prelude {
    pub use super::LockedBloomFilter;
}
