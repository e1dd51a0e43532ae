//! Filter parameters and their optimization.
//!
//! # Mathematical Background
//!
//! Given:
//! - `n`: expected number of elements (capacity)
//! - `m`: bit-vector size
//! - `k`: number of probes per operation
//!
//! The probe count is taken as
//!
//! ```text
//! k = ceil((m / n) × ln 2)
//! ```
//!
//! and the false positive rate achieved once `n` elements are stored is
//!
//! ```text
//! p = (1 - e^(-kn/m))^k
//! ```
//!
//! # Doubling Search
//!
//! [`FilterParameters::optimize`] starts from an initial size (128 bits by
//! default) and doubles `m` until `p` drops to the target rate. When the
//! next doubling would exceed the maximum size, the search stops at the
//! current size and accepts the (possibly higher) rate. The search takes
//! at most `log2(max_size / initial_size)` steps.
//!
//! ```
//! use bloomset::core::params::FilterParameters;
//!
//! let params = FilterParameters::with_defaults(128, 0.01).unwrap();
//! assert_eq!(params.size(), 2048);
//! assert_eq!(params.hash_count(), 12);
//! assert!(params.achieved_error_rate() <= 0.01);
//! ```
//!
//! # Size-Based Path
//!
//! [`FilterParameters::from_size`] skips the search and derives `k` and the
//! rate from a fixed size and element count. Set algebra uses it to describe
//! combined bit vectors; the resulting rate is a nominal estimate only.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomSetError, Result};
use std::f64::consts::LN_2;

/// Size, in bits, the doubling search starts from.
pub const DEFAULT_SIZE: usize = 128;

/// Default hard cap on the bit-vector size (100 MiB of bits).
pub const MAXIMUM_SIZE: usize = 838_860_800;

/// Probe count `ceil((size / capacity) × ln 2)`.
///
/// # Errors
///
/// - [`BloomSetError::InvalidFilterSize`] if `size == 0`
/// - [`BloomSetError::InvalidItemCount`] if `capacity == 0`
///
/// # Examples
///
/// ```
/// use bloomset::core::params::hash_count_for;
///
/// assert_eq!(hash_count_for(1024, 128).unwrap(), 6);
/// assert!(hash_count_for(1024, 0).is_err());
/// ```
pub fn hash_count_for(size: usize, capacity: usize) -> Result<usize> {
    if size == 0 {
        return Err(BloomSetError::invalid_filter_size(size));
    }
    if capacity == 0 {
        return Err(BloomSetError::invalid_item_count(capacity));
    }
    Ok(((size as f64 / capacity as f64) * LN_2).ceil() as usize)
}

/// False positive rate `(1 - e^(-kn/m))^k` for `capacity` stored elements.
///
/// Returns `0.0` for an empty vector description (`size == 0`,
/// `capacity == 0` or `hash_count == 0`).
///
/// # Examples
///
/// ```
/// use bloomset::core::params::achieved_error_rate;
///
/// let p = achieved_error_rate(2048, 128, 12);
/// assert!(p > 0.0004 && p < 0.0005);
/// ```
#[must_use]
pub fn achieved_error_rate(size: usize, capacity: usize, hash_count: usize) -> f64 {
    if size == 0 || capacity == 0 || hash_count == 0 {
        return 0.0;
    }
    let k = hash_count as f64;
    let exponent = -(k * capacity as f64) / size as f64;
    (1.0 - exponent.exp()).powf(k).clamp(0.0, 1.0)
}

fn validate_error_rate(error_rate: f64) -> Result<()> {
    // Written so NaN is rejected too.
    if !(error_rate > 0.0 && error_rate < 1.0) {
        return Err(BloomSetError::fp_rate_out_of_bounds(error_rate));
    }
    Ok(())
}

/// Configuration and bookkeeping shared by every filter variant.
///
/// Each filter owns one `FilterParameters`. Parameters only change through a
/// full re-optimization (`update_parameters` on a filter), never
/// incrementally while data is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParameters {
    capacity: usize,
    error_rate: f64,
    size: usize,
    hash_count: usize,
    initial_size: usize,
    max_size: usize,
    current_count: usize,
}

impl FilterParameters {
    /// Run the doubling search.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Expected number of elements (must be > 0)
    /// * `error_rate` - Target false positive rate in (0, 1)
    /// * `initial_size` - Starting size in bits (must be > 0)
    /// * `max_size` - Hard cap on the size (must be >= `initial_size`)
    ///
    /// # Errors
    ///
    /// - [`BloomSetError::InvalidItemCount`] if `capacity == 0`
    /// - [`BloomSetError::FalsePositiveRateOutOfBounds`] if `error_rate` is not in (0, 1)
    /// - [`BloomSetError::InvalidFilterSize`] if `initial_size` is zero or above `max_size`
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::core::params::FilterParameters;
    ///
    /// // The cap stops the search before the target is met.
    /// let capped = FilterParameters::optimize(1000, 0.01, 128, 4096).unwrap();
    /// assert_eq!(capped.size(), 4096);
    /// assert!(capped.achieved_error_rate() > 0.01);
    /// ```
    pub fn optimize(
        capacity: usize,
        error_rate: f64,
        initial_size: usize,
        max_size: usize,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(BloomSetError::invalid_item_count(capacity));
        }
        validate_error_rate(error_rate)?;
        if initial_size == 0 || initial_size > max_size {
            return Err(BloomSetError::invalid_filter_size(initial_size));
        }

        let mut size = initial_size;
        let mut hash_count;
        let mut steps = 0u32;

        loop {
            hash_count = hash_count_for(size, capacity)?;
            let achieved = achieved_error_rate(size, capacity, hash_count);
            if achieved <= error_rate {
                break;
            }
            match size.checked_mul(2) {
                Some(doubled) if doubled <= max_size => {
                    size = doubled;
                    steps += 1;
                }
                _ => {
                    tracing::warn!(
                        capacity,
                        target = error_rate,
                        achieved,
                        size,
                        max_size,
                        "filter size capped before reaching target error rate"
                    );
                    break;
                }
            }
        }

        tracing::debug!(capacity, error_rate, size, hash_count, steps, "optimized filter parameters");

        Ok(Self {
            capacity,
            error_rate,
            size,
            hash_count,
            initial_size,
            max_size,
            current_count: 0,
        })
    }

    /// [`FilterParameters::optimize`] from [`DEFAULT_SIZE`] up to [`MAXIMUM_SIZE`].
    ///
    /// # Errors
    ///
    /// See [`FilterParameters::optimize`].
    pub fn with_defaults(capacity: usize, error_rate: f64) -> Result<Self> {
        Self::optimize(capacity, error_rate, DEFAULT_SIZE, MAXIMUM_SIZE)
    }

    /// Describe an existing bit vector of `size` bits holding `element_count`
    /// elements, without searching.
    ///
    /// `capacity` and `current_count` are both set to `element_count`, so the
    /// described filter is full. `error_rate` is the formula value for these
    /// numbers, a nominal estimate rather than a guarantee. With
    /// `element_count == 0` the formulas are undefined; the result has
    /// `hash_count == 0` and `error_rate == 0.0`, and such a filter answers
    /// every query negatively.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSetError::InvalidFilterSize`] if `size == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::core::params::FilterParameters;
    ///
    /// let params = FilterParameters::from_size(1024, 100).unwrap();
    /// assert_eq!(params.hash_count(), 8);
    /// assert_eq!(params.current_count(), 100);
    /// ```
    pub fn from_size(size: usize, element_count: usize) -> Result<Self> {
        if size == 0 {
            return Err(BloomSetError::invalid_filter_size(size));
        }
        let hash_count = if element_count == 0 {
            0
        } else {
            hash_count_for(size, element_count)?
        };

        Ok(Self {
            capacity: element_count,
            error_rate: achieved_error_rate(size, element_count, hash_count),
            size,
            hash_count,
            initial_size: DEFAULT_SIZE.min(size),
            max_size: MAXIMUM_SIZE.max(size),
            current_count: element_count,
        })
    }

    /// Re-run the search for new targets, keeping the initial and maximum size.
    ///
    /// The returned parameters have `current_count == 0`.
    ///
    /// # Errors
    ///
    /// See [`FilterParameters::optimize`].
    pub fn reoptimized(&self, capacity: usize, error_rate: f64) -> Result<Self> {
        Self::optimize(capacity, error_rate, self.initial_size, self.max_size)
    }

    /// Expected number of elements.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Target (or, on the size-based path, nominal) false positive rate.
    #[must_use]
    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Bit-vector length (or counter count).
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Probes per operation.
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Size the doubling search starts from.
    #[must_use]
    #[inline]
    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Hard cap on the size.
    #[must_use]
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Elements inserted so far (minus deletions on counting filters).
    #[must_use]
    #[inline]
    pub fn current_count(&self) -> usize {
        self.current_count
    }

    /// Rate the current `size`/`hash_count` achieve at full capacity.
    #[must_use]
    pub fn achieved_error_rate(&self) -> f64 {
        achieved_error_rate(self.size, self.capacity, self.hash_count)
    }

    /// True when the search stopped at `max_size` without meeting the target.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.achieved_error_rate() > self.error_rate
    }

    /// Whether queries short-circuit to "absent".
    #[must_use]
    #[inline]
    pub(crate) fn answers_nothing(&self) -> bool {
        self.current_count == 0 || self.hash_count == 0
    }

    /// Fail with `CapacityExceeded` if one more element does not fit.
    pub(crate) fn check_capacity(&self) -> Result<()> {
        let attempted = self.current_count.saturating_add(1);
        if attempted > self.capacity {
            return Err(BloomSetError::capacity_exceeded(self.capacity, attempted));
        }
        Ok(())
    }

    pub(crate) fn record_insert(&mut self) {
        self.current_count += 1;
    }

    pub(crate) fn record_delete(&mut self) {
        self.current_count = self.current_count.saturating_sub(1);
    }

    pub(crate) fn reset_count(&mut self) {
        self.current_count = 0;
    }
}
