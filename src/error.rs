//! Error types for bloomset operations.
//!
//! Every failure in this crate is a precondition violation reported at the
//! point of the offending call. Nothing is retried internally and no
//! operation is partially applied: validation always happens before any
//! filter state is touched.
//!
//! # Taxonomy
//!
//! Variants fall into two classes, exposed through [`BloomSetError::kind`]:
//!
//! - [`ErrorKind::InvalidArgument`]: empty input, unknown hash function
//!   name, or construction parameters outside their domain.
//! - [`ErrorKind::CapacityExceeded`]: `add` on a filter that already holds
//!   `capacity` elements.
//!
//! # Error Propagation
//!
//! ```
//! use bloomset::{Result, BloomSetError};
//! use bloomset::core::params::FilterParameters;
//!
//! fn plan(capacity: usize, error_rate: f64) -> Result<(usize, usize)> {
//!     let params = FilterParameters::with_defaults(capacity, error_rate)?;
//!     Ok((params.size(), params.hash_count()))
//! }
//! # assert!(plan(1000, 0.01).is_ok());
//! # assert!(plan(0, 0.01).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bloomset operations.
///
/// # Examples
/// ```
/// use bloomset::Result;
///
/// fn validate(capacity: usize) -> Result<()> {
///     if capacity == 0 {
///         return Err(bloomset::BloomSetError::invalid_item_count(capacity));
///     }
///     Ok(())
/// }
/// # assert!(validate(10).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, BloomSetError>;

/// Coarse classification of a [`BloomSetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed an argument the operation cannot accept.
    InvalidArgument,
    /// The filter already holds as many elements as it was sized for.
    CapacityExceeded,
}

/// Errors that can occur during Bloom filter operations.
///
/// `Clone` + `PartialEq` keep errors easy to compare in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomSetError {
    /// An argument was rejected: empty byte input, empty array or string,
    /// or an unknown hash function name.
    InvalidArgument {
        /// Human-readable description of what was rejected.
        message: String,
    },

    /// False positive rate outside the open interval (0, 1).
    FalsePositiveRateOutOfBounds {
        /// The rejected rate.
        fp_rate: f64,
    },

    /// Expected element count is zero.
    ///
    /// Both sizing formulas divide by the capacity, so zero is undefined.
    InvalidItemCount {
        /// The rejected count.
        count: usize,
    },

    /// Bit-vector size is zero or larger than the configured maximum.
    InvalidFilterSize {
        /// The rejected size in bits.
        size: usize,
    },

    /// `add` attempted on a full filter.
    CapacityExceeded {
        /// Maximum number of elements the filter accepts.
        capacity: usize,
        /// Element count the rejected insert would have produced.
        attempted: usize,
    },
}

impl fmt::Display for BloomSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}.", message)
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected items must be greater than 0.",
                    count
                )
            }
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} bits. Must be positive and within the maximum size.",
                    size
                )
            }
            Self::CapacityExceeded { capacity, attempted } => {
                write!(
                    f,
                    "Filter capacity of {} items exceeded. Attempted to insert item number {}.",
                    capacity, attempted
                )
            }
        }
    }
}

impl std::error::Error for BloomSetError {}

impl BloomSetError {
    /// Create an `InvalidArgument` error.
    ///
    /// # Examples
    /// ```
    /// use bloomset::BloomSetError;
    ///
    /// let err = BloomSetError::invalid_argument("input must not be empty");
    /// assert!(err.to_string().contains("must not be empty"));
    /// ```
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Error for an empty byte sequence handed to add/contains/delete/digest.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::invalid_argument("input must contain at least one byte")
    }

    /// Error for a hash function name the registry does not know.
    #[must_use]
    pub fn unknown_hash_function(name: &str) -> Self {
        Self::invalid_argument(format!("no available implementation for hash function '{}'", name))
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create a `CapacityExceeded` error.
    #[must_use]
    pub fn capacity_exceeded(capacity: usize, attempted: usize) -> Self {
        Self::CapacityExceeded { capacity, attempted }
    }

    /// Classify this error.
    ///
    /// # Examples
    /// ```
    /// use bloomset::{BloomSetError, ErrorKind};
    ///
    /// assert_eq!(BloomSetError::invalid_item_count(0).kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(BloomSetError::capacity_exceeded(1, 2).kind(), ErrorKind::CapacityExceeded);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::InvalidArgument { .. }
            | Self::FalsePositiveRateOutOfBounds { .. }
            | Self::InvalidItemCount { .. }
            | Self::InvalidFilterSize { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Shorthand for `self.kind() == ErrorKind::CapacityExceeded`.
    #[must_use]
    pub fn is_capacity_exceeded(&self) -> bool {
        self.kind() == ErrorKind::CapacityExceeded
    }
}
