use crate::ByteOrder;
use zerocopy::{FromBytes, Immutable, IntoBytes};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width numeric type that can be read from and written to a buffer.
///
/// The width and signedness of the type fully determine its encoding: `WIDTH` bytes, ordered
/// according to the active [`ByteOrder`]. Floating-point values are transcoded bit-for-bit, so NaN
/// payloads and signed zeros survive a round trip.
///
/// This trait is sealed. It is implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`,
/// `i64`, `f32` and `f64`.
pub trait Numeric: sealed::Sealed + FromBytes + IntoBytes + Immutable + Copy {
    /// The number of bytes in the encoded form.
    const WIDTH: usize = core::mem::size_of::<Self>();
}

/// An unsigned integer type used as the length prefix of a length-prefixed string.
///
/// This trait is sealed. It is implemented for `u8`, `u16`, `u32` and `u64`.
pub trait LengthPrefix: Numeric {
    /// The largest byte count the prefix can describe.
    const MAX_LEN: u64;

    /// Converts a decoded prefix to a byte count, if it fits in `usize`.
    fn to_len(self) -> Option<usize>;

    /// Converts a byte count to a prefix, if the prefix type can hold it.
    fn from_len(len: usize) -> Option<Self>;
}

macro_rules! numeric {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {}
        )*
    };
}

numeric!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

macro_rules! length_prefix {
    ($($t:ty),*) => {
        $(
            impl LengthPrefix for $t {
                const MAX_LEN: u64 = <$t>::MAX as u64;

                #[inline(always)]
                fn to_len(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline(always)]
                fn from_len(len: usize) -> Option<Self> {
                    <$t>::try_from(len).ok()
                }
            }
        )*
    };
}

length_prefix!(u8, u16, u32, u64);

/// Decodes `src` into `dest`. This is the only place that reorders bytes on the read side;
/// [`decode`] and every `read_numeric*` method go through it.
///
/// `src` must be exactly `T::WIDTH` bytes long. Callers check bounds before getting here.
#[inline(always)]
pub(crate) fn decode_into<T: Numeric>(src: &[u8], order: ByteOrder, dest: &mut T) {
    let bytes = dest.as_mut_bytes();
    bytes.copy_from_slice(src);
    if !order.is_native() {
        bytes.reverse();
    }
}

#[inline(always)]
pub(crate) fn decode<T: Numeric>(src: &[u8], order: ByteOrder) -> T {
    let mut value = T::new_zeroed();
    decode_into(src, order, &mut value);
    value
}

/// Encodes `value` into `dst`, which must be exactly `T::WIDTH` bytes long.
#[inline(always)]
pub(crate) fn encode_into<T: Numeric>(value: T, order: ByteOrder, dst: &mut [u8]) {
    dst.copy_from_slice(value.as_bytes());
    if !order.is_native() {
        dst.reverse();
    }
}
