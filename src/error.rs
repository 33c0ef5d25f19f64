use core::ops::Range;

/// Result type for reader and writer operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for `BinaryReader`, `BinaryWriter` and `VecWriter`.
///
/// Every error is detected before any byte is transferred, so a failed write never leaves a
/// partially written value behind, and a failed sequential operation never moves the cursor.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// The span `offset .. offset + width` does not lie within a buffer of `len` bytes.
    ///
    /// This covers reads and writes past the end of the buffer, and spans whose end cannot be
    /// represented in `usize`.
    OutOfRange {
        /// The first byte of the rejected span.
        offset: usize,
        /// The number of bytes the operation needed.
        width: usize,
        /// The length of the buffer.
        len: usize,
    },

    /// A length-prefixed write was given `len` bytes, but the prefix type can describe at most
    /// `max` bytes.
    LengthOverflow {
        /// The number of bytes that were to be written.
        len: usize,
        /// The largest length the prefix type can hold.
        max: u64,
    },
}

impl Error {
    /// Returns `true` for [`Error::OutOfRange`]. Format layers that treat the end of the buffer
    /// as a normal termination condition can use this to tell it apart from other failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub(crate) fn out_of_range(offset: usize, width: usize, len: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(offset, width, len, "access out of range");

        Self::OutOfRange { offset, width, len }
    }

    pub(crate) fn length_overflow(len: usize, max: u64) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(len, max, "length does not fit prefix");

        Self::LengthOverflow { len, max }
    }
}

/// Checks that `width` bytes starting at `offset` fit in a buffer of `len` bytes and returns the
/// span. A zero-width span is in range at every offset up to and including `len`.
#[inline(always)]
pub(crate) fn span(offset: usize, width: usize, len: usize) -> Result<Range<usize>> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(Error::out_of_range(offset, width, len)),
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { offset, width, len } => write!(
                f,
                "access of {width} bytes at offset {offset} is out of range for a buffer of {len} bytes"
            ),
            Self::LengthOverflow { len, max } => write!(
                f,
                "length {len} does not fit the length prefix (maximum {max})"
            ),
        }
    }
}
