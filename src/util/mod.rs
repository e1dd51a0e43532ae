//! Low-level helpers shared by the storage types.
//!
//! - [`bitops`] - bit and nibble addressing

pub mod bitops;

pub use bitops::{count_ones_slice, get_nibble, set_nibble, NIBBLE_MAX};
