//! Canonical byte encoding of filter inputs.
//!
//! Every value is reduced to a byte sequence before digesting, so any two
//! values with equal encodings are the same element as far as a filter is
//! concerned.
//!
//! | Input                         | Encoding                                 |
//! |-------------------------------|------------------------------------------|
//! | `u8`, `i8`                    | the single byte                          |
//! | `u16`..`u64`, `i16`..`i64`    | native-endian fixed width                |
//! | `str`, `String`               | UTF-8 bytes                              |
//! | `[u8]`, `Vec<u8>`, `[u8; N]`  | the bytes as is                          |
//! | slices/arrays/`Vec` of ints   | concatenated element encodings           |
//!
//! Empty strings and empty slices are rejected with `InvalidArgument`.
//! Integer encodings are native-endian, so the same filter contents are not
//! portable across hosts of different endianness.
//!
//! ```
//! use bloomset::encoding::CanonicalBytes;
//!
//! assert_eq!(&*"ab".canonical_bytes().unwrap(), b"ab");
//! assert_eq!(&*7u8.canonical_bytes().unwrap(), &[7]);
//! assert_eq!(
//!     &*[1u16, 2].canonical_bytes().unwrap(),
//!     [1u16.to_ne_bytes(), 2u16.to_ne_bytes()].concat().as_slice()
//! );
//! assert!("".canonical_bytes().is_err());
//! ```

use crate::error::{BloomSetError, Result};
use std::borrow::Cow;

/// Conversion of a value to the bytes a filter digests.
pub trait CanonicalBytes {
    /// Encode `self`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the encoding would be empty.
    fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>>;
}

macro_rules! impl_canonical_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl CanonicalBytes for $t {
                #[inline]
                fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>> {
                    Ok(Cow::Owned(self.to_ne_bytes().to_vec()))
                }
            }
        )*
    };
}

macro_rules! impl_canonical_int_slice {
    ($($t:ty),* $(,)?) => {
        $(
            impl CanonicalBytes for [$t] {
                fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>> {
                    if self.is_empty() {
                        return Err(BloomSetError::invalid_argument("array must not be empty"));
                    }
                    let mut out = Vec::with_capacity(std::mem::size_of_val(self));
                    for value in self {
                        out.extend_from_slice(&value.to_ne_bytes());
                    }
                    Ok(Cow::Owned(out))
                }
            }
        )*
    };
}

impl_canonical_int!(u8, i8, u16, i16, u32, i32, u64, i64);
impl_canonical_int_slice!(i8, u16, i16, u32, i32, u64, i64);

impl CanonicalBytes for [u8] {
    #[inline]
    fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>> {
        if self.is_empty() {
            return Err(BloomSetError::empty_input());
        }
        Ok(Cow::Borrowed(self))
    }
}

impl CanonicalBytes for str {
    #[inline]
    fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>> {
        if self.is_empty() {
            return Err(BloomSetError::invalid_argument("string must not be empty"));
        }
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl CanonicalBytes for String {
    #[inline]
    fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>> {
        self.as_str().canonical_bytes()
    }
}

impl<T> CanonicalBytes for Vec<T>
where
    [T]: CanonicalBytes,
{
    #[inline]
    fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>> {
        self.as_slice().canonical_bytes()
    }
}

impl<T, const N: usize> CanonicalBytes for [T; N]
where
    [T]: CanonicalBytes,
{
    #[inline]
    fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>> {
        self.as_slice().canonical_bytes()
    }
}

impl<T> CanonicalBytes for &T
where
    T: CanonicalBytes + ?Sized,
{
    #[inline]
    fn canonical_bytes(&self) -> Result<Cow<'_, [u8]>> {
        (**self).canonical_bytes()
    }
}
