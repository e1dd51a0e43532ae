//! Bloom filter implementations.
//!
//! - [`StandardBloomFilter`] - bit vector; add, contains, set algebra
//! - [`CountingBloomFilter`] - 4-bit counters; add, delete, contains
//! - [`algebra`] - union, intersection and symmetric difference
//!
//! # Choosing a Filter
//!
//! | Filter                  | Memory per position | Operations               |
//! |-------------------------|---------------------|--------------------------|
//! | [`StandardBloomFilter`] | 1 bit               | Add, Query, Set algebra  |
//! | [`CountingBloomFilter`] | 4 bits              | Add, Delete, Query       |
//!
//! Both variants share [`crate::core::FilterParameters`] and the salted
//! probe sequence from [`crate::hash::strategies`], so for equal
//! construction arguments they probe the same positions.
//!
//! # Examples
//!
//! ```
//! use bloomset::filters::{CountingBloomFilter, StandardBloomFilter};
//!
//! let mut standard = StandardBloomFilter::new(1_000, 0.01, "FNV32").unwrap();
//! let mut counting = CountingBloomFilter::new(1_000, 0.01, "FNV32").unwrap();
//!
//! standard.add("k").unwrap();
//! counting.add("k").unwrap();
//! assert_eq!(standard.size(), counting.size());
//! assert_eq!(standard.count_set_bits(), counting.count_nonzero());
//! ```

pub mod algebra;
pub mod counting;
pub mod standard;

pub use counting::CountingBloomFilter;
pub use standard::StandardBloomFilter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_probe_identically() {
        let mut standard = StandardBloomFilter::new(500, 0.01, "FNV32").unwrap();
        let mut counting = CountingBloomFilter::new(500, 0.01, "FNV32").unwrap();

        for i in 0..200u32 {
            standard.add(&i).unwrap();
            counting.add(&i).unwrap();
        }

        for pos in 0..standard.size() {
            assert_eq!(standard.bits().get(pos), counting.counter(pos) > 0, "position {pos}");
        }
    }
}
