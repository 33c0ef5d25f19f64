use crate::error::{span, Error, Result};
use crate::numeric::{encode_into, LengthPrefix, Numeric};
use crate::{ByteOrder, Endian};

/// Writes numbers and strings into a fixed-size, caller-owned slice of bytes.
///
/// The writer mirrors [`BinaryReader`](crate::BinaryReader): sequential writes go to the cursor
/// and advance it, and the `*_at` variants write at an absolute offset without moving it.
///
/// Writes are all-or-nothing. The target span is checked against the slice before any byte is
/// stored, so an out-of-range write leaves both the slice and the cursor untouched.
#[derive(Debug)]
pub struct BinaryWriter<'a> {
    buf: &'a mut [u8],
    position: usize,
    endian: Endian,
}

impl<'a> BinaryWriter<'a> {
    /// Creates a writer at position 0 using [`Endian::Default`].
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::with_position(buf, Endian::Default, 0)
    }

    /// Creates a writer at position 0 using the given byte-order policy.
    pub fn with_endian(buf: &'a mut [u8], endian: Endian) -> Self {
        Self::with_position(buf, endian, 0)
    }

    /// Creates a writer whose cursor starts at `position`.
    pub fn with_position(buf: &'a mut [u8], endian: Endian, position: usize) -> Self {
        Self {
            buf,
            position,
            endian,
        }
    }

    /// The length of the output slice.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the output slice is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of bytes between the cursor and the end of the output.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.position)
    }

    /// The active byte-order policy.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Changes the byte-order policy used by subsequent writes.
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Moves the cursor to `position`, which may be at most `len()`.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        span(position, 0, self.buf.len())?;
        self.position = position;
        Ok(())
    }

    /// The bytes before the cursor.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.position.min(self.buf.len())]
    }

    /// Releases the output slice.
    pub fn into_inner(self) -> &'a mut [u8] {
        self.buf
    }

    #[inline(always)]
    fn order(&self) -> ByteOrder {
        self.endian.resolve()
    }

    /// Checks the span, hands it to `fill`, then advances the cursor for sequential access.
    #[inline(always)]
    fn put<F>(&mut self, offset: Option<usize>, width: usize, fill: F) -> Result<()>
    where
        F: FnOnce(&mut [u8]),
    {
        let range = span(offset.unwrap_or(self.position), width, self.buf.len())?;
        let end = range.end;
        fill(&mut self.buf[range]);
        if offset.is_none() {
            self.position = end;
        }
        Ok(())
    }

    /// Writes a numeric value at the cursor and advances the cursor by `T::WIDTH`.
    #[inline(always)]
    pub fn write_numeric<T: Numeric>(&mut self, value: T) -> Result<()> {
        let order = self.order();
        self.put(None, T::WIDTH, |dst| encode_into(value, order, dst))
    }

    /// Writes a numeric value at `offset`. The cursor does not move.
    #[inline(always)]
    pub fn write_numeric_at<T: Numeric>(&mut self, value: T, offset: usize) -> Result<()> {
        let order = self.order();
        self.put(Some(offset), T::WIDTH, |dst| encode_into(value, order, dst))
    }

    /// Writes `bytes` verbatim at the cursor and advances the cursor past them.
    #[inline(always)]
    pub fn write_string(&mut self, bytes: &[u8]) -> Result<()> {
        self.put(None, bytes.len(), |dst| dst.copy_from_slice(bytes))
    }

    /// Writes `bytes` verbatim at `offset`. The cursor does not move.
    #[inline(always)]
    pub fn write_string_at(&mut self, bytes: &[u8], offset: usize) -> Result<()> {
        self.put(Some(offset), bytes.len(), |dst| dst.copy_from_slice(bytes))
    }

    /// Passes `value` through `encoder` and writes the result at the cursor.
    ///
    /// The codec does not know how a format encodes its strings; the format supplies that here.
    pub fn write_string_with<F, B>(&mut self, value: &[u8], encoder: F) -> Result<()>
    where
        F: FnOnce(&[u8]) -> B,
        B: AsRef<[u8]>,
    {
        self.write_string(encoder(value).as_ref())
    }

    /// Passes `value` through `encoder` and writes the result at `offset`. The cursor does not
    /// move.
    pub fn write_string_with_at<F, B>(
        &mut self,
        value: &[u8],
        offset: usize,
        encoder: F,
    ) -> Result<()>
    where
        F: FnOnce(&[u8]) -> B,
        B: AsRef<[u8]>,
    {
        self.write_string_at(encoder(value).as_ref(), offset)
    }

    fn size_and_bytes<S: LengthPrefix>(
        &mut self,
        bytes: &[u8],
        offset: Option<usize>,
    ) -> Result<()> {
        let Some(size) = S::from_len(bytes.len()) else {
            return Err(Error::length_overflow(bytes.len(), S::MAX_LEN));
        };
        let start = offset.unwrap_or(self.position);
        let Some(width) = S::WIDTH.checked_add(bytes.len()) else {
            return Err(Error::out_of_range(start, usize::MAX, self.buf.len()));
        };

        let order = self.order();
        self.put(offset, width, |dst| {
            let (prefix, body) = dst.split_at_mut(S::WIDTH);
            encode_into(size, order, prefix);
            body.copy_from_slice(bytes);
        })
    }

    /// Writes the length of `bytes` as a prefix of type `S`, followed by `bytes`, at the cursor.
    ///
    /// The prefix is encoded using the active byte order. Fails with [`Error::LengthOverflow`] if
    /// the length does not fit `S`. Nothing is written unless the prefix and the bytes both fit.
    pub fn write_size_and_bytes<S: LengthPrefix>(&mut self, bytes: &[u8]) -> Result<()> {
        self.size_and_bytes::<S>(bytes, None)
    }

    /// Writes a length-prefixed byte string at `offset`. The cursor does not move.
    pub fn write_size_and_bytes_at<S: LengthPrefix>(
        &mut self,
        bytes: &[u8],
        offset: usize,
    ) -> Result<()> {
        self.size_and_bytes::<S>(bytes, Some(offset))
    }

    /// Encodes `value` with `encoder`, then writes the encoded length as a prefix of type `S`
    /// followed by the encoded bytes, at the cursor.
    pub fn write_size_and_string_with<S, F, B>(&mut self, value: &[u8], encoder: F) -> Result<()>
    where
        S: LengthPrefix,
        F: FnOnce(&[u8]) -> B,
        B: AsRef<[u8]>,
    {
        self.size_and_bytes::<S>(encoder(value).as_ref(), None)
    }

    /// Writes an encoded, length-prefixed string at `offset`. The cursor does not move.
    pub fn write_size_and_string_with_at<S, F, B>(
        &mut self,
        value: &[u8],
        offset: usize,
        encoder: F,
    ) -> Result<()>
    where
        S: LengthPrefix,
        F: FnOnce(&[u8]) -> B,
        B: AsRef<[u8]>,
    {
        self.size_and_bytes::<S>(encoder(value).as_ref(), Some(offset))
    }
}
