//! Set operations over standard filters.
//!
//! Each operation reads two filters and returns a new one; neither input is
//! modified. The result has `max(a.size, b.size)` bits (the shorter vector
//! is zero-padded) and reuses `a`'s digest.
//!
//! | Operation              | Bits | `current_count` of the result       |
//! |------------------------|------|-------------------------------------|
//! | `union`                | OR   | `a.current_count + b.current_count` |
//! | `intersect`            | AND  | set bits in the result              |
//! | `symmetric_difference` | XOR  | set bits in the result              |
//!
//! The result's parameters come from [`FilterParameters::from_size`], so
//! its `hash_count` and `error_rate` are derived from the combined size and
//! count rather than from either input. The result's `hash_count` generally
//! differs from the inputs', so membership queries against it do not answer
//! for the original elements; inspect [`StandardBloomFilter::bits`] instead.
//! Inputs built with different sizes or digests are combined bit for bit
//! without any check.
//!
//! [`FilterParameters::from_size`]: crate::core::params::FilterParameters::from_size
//!
//! # Examples
//!
//! ```
//! use bloomset::filters::algebra;
//! use bloomset::StandardBloomFilter;
//!
//! let mut a = StandardBloomFilter::new(100, 0.01, "FNV32").unwrap();
//! let mut b = StandardBloomFilter::new(100, 0.01, "FNV32").unwrap();
//! a.add("left").unwrap();
//! b.add("right").unwrap();
//!
//! let both = algebra::union(&a, &b).unwrap();
//! assert_eq!(both.current_count(), 2);
//! assert_eq!(
//!     both.count_set_bits(),
//!     a.bits().union(b.bits()).count_ones()
//! );
//! ```

use super::standard::StandardBloomFilter;
use crate::core::bitvec::BitVec;
use crate::error::Result;
use std::sync::Arc;

fn derive(
    op: &'static str,
    a: &StandardBloomFilter,
    bits: BitVec,
    element_count: usize,
) -> Result<StandardBloomFilter> {
    tracing::debug!(
        op,
        size = bits.len(),
        set_bits = bits.count_ones(),
        element_count,
        "combined standard filters"
    );
    StandardBloomFilter::from_bits(element_count, bits, Arc::clone(a.hasher()))
}

/// OR of the two bit vectors.
///
/// # Errors
///
/// Propagates parameter derivation failures.
pub fn union(a: &StandardBloomFilter, b: &StandardBloomFilter) -> Result<StandardBloomFilter> {
    let bits = a.bits().union(b.bits());
    let count = a.current_count().saturating_add(b.current_count());
    derive("union", a, bits, count)
}

/// AND of the two bit vectors.
///
/// # Errors
///
/// Propagates parameter derivation failures.
pub fn intersect(a: &StandardBloomFilter, b: &StandardBloomFilter) -> Result<StandardBloomFilter> {
    let bits = a.bits().intersect(b.bits());
    let count = bits.count_ones();
    derive("intersect", a, bits, count)
}

/// XOR of the two bit vectors.
///
/// # Errors
///
/// Propagates parameter derivation failures.
pub fn symmetric_difference(
    a: &StandardBloomFilter,
    b: &StandardBloomFilter,
) -> Result<StandardBloomFilter> {
    let bits = a.bits().xor(b.bits());
    let count = bits.count_ones();
    derive("symmetric_difference", a, bits, count)
}
