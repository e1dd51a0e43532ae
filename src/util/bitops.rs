//! Bit and nibble addressing helpers.
//!
//! Bit vectors store 64 bits per word in little-endian bit order. Counter
//! arrays store two 4-bit counters per byte: position `2i` in the low
//! nibble of byte `i`, position `2i + 1` in the high nibble.
//!
//! ```text
//! byte i:  [ high nibble = pos 2i+1 | low nibble = pos 2i ]
//!            bits 7..4                bits 3..0
//! ```

#![allow(clippy::cast_possible_truncation)]

/// Largest value a 4-bit counter can hold.
pub const NIBBLE_MAX: u8 = 0x0F;

/// Check if a number is a power of two.
///
/// # Examples
///
/// ```
/// use bloomset::util::bitops::is_power_of_two;
///
/// assert!(is_power_of_two(128));
/// assert!(!is_power_of_two(0));
/// assert!(!is_power_of_two(100));
/// ```
#[inline]
#[must_use]
pub const fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// Number of 64-bit words needed to hold `n_bits` bits.
///
/// # Examples
///
/// ```
/// use bloomset::util::bitops::bits_to_words;
///
/// assert_eq!(bits_to_words(0), 0);
/// assert_eq!(bits_to_words(64), 1);
/// assert_eq!(bits_to_words(65), 2);
/// ```
#[inline]
#[must_use]
pub const fn bits_to_words(n_bits: usize) -> usize {
    (n_bits + 63) / 64
}

/// Word index containing `bit_index`.
#[inline(always)]
#[must_use]
pub const fn word_index(bit_index: usize) -> usize {
    bit_index / 64
}

/// Offset of `bit_index` inside its word.
#[inline(always)]
#[must_use]
pub const fn bit_offset(bit_index: usize) -> usize {
    bit_index % 64
}

/// Single-bit mask for an offset within a word.
#[inline(always)]
#[must_use]
pub const fn bit_mask(offset: usize) -> u64 {
    1u64 << offset
}

/// Mask keeping only the valid bits of the last word of an `n_bits` vector.
///
/// Returns `u64::MAX` when `n_bits` is a multiple of 64.
///
/// # Examples
///
/// ```
/// use bloomset::util::bitops::tail_mask;
///
/// assert_eq!(tail_mask(128), u64::MAX);
/// assert_eq!(tail_mask(3), 0b111);
/// ```
#[inline]
#[must_use]
pub const fn tail_mask(n_bits: usize) -> u64 {
    match n_bits % 64 {
        0 => u64::MAX,
        rem => (1u64 << rem) - 1,
    }
}

/// Total set bits across a word slice.
///
/// # Examples
///
/// ```
/// use bloomset::util::bitops::count_ones_slice;
///
/// assert_eq!(count_ones_slice(&[0b1010, 0b1111, 0b0001]), 7);
/// assert_eq!(count_ones_slice(&[]), 0);
/// ```
#[inline]
#[must_use]
pub fn count_ones_slice(words: &[u64]) -> usize {
    words.iter().map(|&w| w.count_ones() as usize).sum()
}

/// Number of bytes needed to hold `n_counters` 4-bit counters.
#[inline]
#[must_use]
pub const fn nibbles_to_bytes(n_counters: usize) -> usize {
    (n_counters + 1) / 2
}

/// Shift of counter `position` within its byte (0 for even, 4 for odd).
#[inline(always)]
#[must_use]
pub const fn nibble_shift(position: usize) -> u32 {
    ((position & 1) as u32) * 4
}

/// Read the 4-bit counter at `position` from packed `bytes`.
///
/// # Panics
///
/// Panics if `position / 2 >= bytes.len()`.
///
/// # Examples
///
/// ```
/// use bloomset::util::bitops::get_nibble;
///
/// let bytes = [0xA3];
/// assert_eq!(get_nibble(&bytes, 0), 0x3);
/// assert_eq!(get_nibble(&bytes, 1), 0xA);
/// ```
#[inline]
#[must_use]
pub fn get_nibble(bytes: &[u8], position: usize) -> u8 {
    (bytes[position >> 1] >> nibble_shift(position)) & NIBBLE_MAX
}

/// Overwrite the 4-bit counter at `position`, leaving its neighbour intact.
///
/// Only the low 4 bits of `value` are stored.
///
/// # Panics
///
/// Panics if `position / 2 >= bytes.len()`.
///
/// # Examples
///
/// ```
/// use bloomset::util::bitops::{get_nibble, set_nibble};
///
/// let mut bytes = [0x00];
/// set_nibble(&mut bytes, 1, 0xC);
/// set_nibble(&mut bytes, 0, 0x5);
/// assert_eq!(bytes[0], 0xC5);
/// assert_eq!(get_nibble(&bytes, 1), 0xC);
/// ```
#[inline]
pub fn set_nibble(bytes: &mut [u8], position: usize, value: u8) {
    let shift = nibble_shift(position);
    let byte = &mut bytes[position >> 1];
    *byte = (*byte & !(NIBBLE_MAX << shift)) | ((value & NIBBLE_MAX) << shift);
}
