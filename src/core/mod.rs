//! Core types, traits, and parameter math shared by all filter variants.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── filter.rs    - BloomFilter / DeletableBloomFilter traits
//! ├── params.rs    - FilterParameters and the doubling search
//! ├── bitvec.rs    - bit storage for the standard filter
//! └── counters.rs  - 4-bit counter storage for the counting filter
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomset::core::{BitVec, FilterParameters};
//!
//! let params = FilterParameters::with_defaults(1000, 0.01).unwrap();
//! let bits = BitVec::new(params.size()).unwrap();
//! assert_eq!(bits.len(), 16384);
//! assert_eq!(params.hash_count(), 12);
//! ```

pub mod bitvec;
pub mod counters;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use counters::NibbleCounters;
pub use filter::{BloomFilter, DeletableBloomFilter};
pub use params::{achieved_error_rate, hash_count_for, FilterParameters, DEFAULT_SIZE, MAXIMUM_SIZE};
