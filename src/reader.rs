use crate::error::{span, Error, Result};
use crate::numeric::{decode, decode_into, LengthPrefix, Numeric};
use crate::{ByteOrder, Endian};
use core::ops::Range;

/// Reads numbers and strings from a slice of bytes.
///
/// The reader keeps a cursor into the slice. Sequential reads (`read_numeric`, `read_string`,
/// and so on) start at the cursor and advance it by the number of bytes consumed. The `*_at`
/// variants take an absolute offset instead, and never move the cursor.
///
/// Every read is bounds-checked before any byte is looked at. If the requested span does not lie
/// within the slice, the read fails with [`Error::OutOfRange`] and the cursor is left where it
/// was.
///
/// Multi-byte numbers are decoded using the reader's [`Endian`] policy, which can be changed
/// between reads with [`BinaryReader::set_endian`]. Strings are returned in buffer order; the byte
/// order does not apply to them.
///
/// This type does not copy the data it returns. String reads hand back subslices of the input.
#[derive(Clone, Debug)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
    endian: Endian,
}

impl<'a> BinaryReader<'a> {
    /// Creates a reader at position 0 using [`Endian::Default`].
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_position(data, Endian::Default, 0)
    }

    /// Creates a reader at position 0 using the given byte-order policy.
    pub fn with_endian(data: &'a [u8], endian: Endian) -> Self {
        Self::with_position(data, endian, 0)
    }

    /// Creates a reader whose cursor starts at `position`.
    ///
    /// A position past the end of `data` is allowed; every non-empty sequential read from it will
    /// fail with [`Error::OutOfRange`].
    pub fn with_position(data: &'a [u8], endian: Endian, position: usize) -> Self {
        Self {
            data,
            position,
            endian,
        }
    }

    /// The whole input slice, regardless of the cursor.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The length of the input slice.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the input slice is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of bytes between the cursor and the end of the input.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Returns `true` if at least one byte can be read at the cursor.
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// The active byte-order policy.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Changes the byte-order policy used by subsequent reads.
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Moves the cursor to `position`, which may be at most `len()`.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        span(position, 0, self.data.len())?;
        self.position = position;
        Ok(())
    }

    /// Advances the cursor by `len` bytes without decoding them.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    #[inline(always)]
    fn order(&self) -> ByteOrder {
        self.endian.resolve()
    }

    /// Resolves the effective offset and checks the span. Does not touch the cursor.
    #[inline(always)]
    fn locate(&self, offset: Option<usize>, width: usize) -> Result<Range<usize>> {
        span(offset.unwrap_or(self.position), width, self.data.len())
    }

    #[inline(always)]
    fn slice(&self, offset: Option<usize>, width: usize) -> Result<&'a [u8]> {
        let data = self.data;
        Ok(&data[self.locate(offset, width)?])
    }

    /// Reads `width` bytes at the cursor, then advances it. A failed check leaves it alone.
    #[inline(always)]
    fn take(&mut self, width: usize) -> Result<&'a [u8]> {
        let bytes = self.slice(None, width)?;
        self.position += width;
        Ok(bytes)
    }

    /// Reads a numeric value at the cursor and advances the cursor by `T::WIDTH`.
    #[inline(always)]
    pub fn read_numeric<T: Numeric>(&mut self) -> Result<T> {
        let order = self.order();
        Ok(decode(self.take(T::WIDTH)?, order))
    }

    /// Reads a numeric value at `offset`. The cursor does not move.
    #[inline(always)]
    pub fn read_numeric_at<T: Numeric>(&self, offset: usize) -> Result<T> {
        Ok(decode(self.slice(Some(offset), T::WIDTH)?, self.order()))
    }

    /// Reads a numeric value at the cursor into `dest` and advances the cursor by `T::WIDTH`.
    ///
    /// On failure `dest` is not modified.
    #[inline(always)]
    pub fn read_numeric_into<T: Numeric>(&mut self, dest: &mut T) -> Result<()> {
        let order = self.order();
        decode_into(self.take(T::WIDTH)?, order, dest);
        Ok(())
    }

    /// Reads a numeric value at `offset` into `dest`. The cursor does not move.
    #[inline(always)]
    pub fn read_numeric_into_at<T: Numeric>(&self, dest: &mut T, offset: usize) -> Result<()> {
        decode_into(self.slice(Some(offset), T::WIDTH)?, self.order(), dest);
        Ok(())
    }

    /// Reads exactly `len` bytes at the cursor and advances the cursor past them.
    ///
    /// This function returns a slice reference to the bytes; it does not copy them. A zero-length
    /// read always succeeds as long as the cursor is within the input.
    #[inline(always)]
    pub fn read_string(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Reads exactly `len` bytes at `offset`. The cursor does not move.
    #[inline(always)]
    pub fn read_string_at(&self, len: usize, offset: usize) -> Result<&'a [u8]> {
        self.slice(Some(offset), len)
    }

    /// Reads `len` bytes at the cursor and passes them to `decoder`, returning its result.
    ///
    /// The codec does not interpret string contents. Formats that store text in some encoding
    /// supply the decoder here. The cursor only advances if the bytes are in range; what `decoder`
    /// returns has no effect on it.
    pub fn read_string_with<F, R>(&mut self, len: usize, decoder: F) -> Result<R>
    where
        F: FnOnce(&'a [u8]) -> R,
    {
        Ok(decoder(self.read_string(len)?))
    }

    /// Reads `len` bytes at the cursor and returns them as a `bstr::BStr`.
    ///
    /// The caller must handle validating that the string is well-formed UTF-8, if necessary.
    #[cfg(feature = "bstr")]
    pub fn read_bstr(&mut self, len: usize) -> Result<&'a bstr::BStr> {
        Ok(bstr::BStr::new(self.read_string(len)?))
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Locates the bytes described by a length prefix at `offset`, or at the cursor.
    fn size_and_bytes<S: LengthPrefix>(&self, offset: Option<usize>) -> Result<Range<usize>> {
        let prefix = self.locate(offset, S::WIDTH)?;
        let body_start = prefix.end;
        let size: S = decode(&self.data[prefix], self.order());
        let Some(size) = size.to_len() else {
            return Err(Error::out_of_range(body_start, usize::MAX, self.data.len()));
        };

        span(body_start, size, self.data.len())
    }

    /// Reads a length prefix of type `S` at the cursor, then that many bytes.
    ///
    /// The prefix is decoded using the active byte order. The operation is all-or-nothing: if
    /// either the prefix or the bytes it describes extend past the end of the input, the cursor
    /// is not moved.
    pub fn read_size_and_bytes<S: LengthPrefix>(&mut self) -> Result<&'a [u8]> {
        let body = self.size_and_bytes::<S>(None)?;
        self.position = body.end;
        let data = self.data;
        Ok(&data[body])
    }

    /// Reads a length prefix of type `S` at `offset`, then that many bytes. The cursor does not
    /// move.
    pub fn read_size_and_bytes_at<S: LengthPrefix>(&self, offset: usize) -> Result<&'a [u8]> {
        let data = self.data;
        Ok(&data[self.size_and_bytes::<S>(Some(offset))?])
    }

    /// Reads a length-prefixed string at the cursor and passes its bytes to `decoder`.
    pub fn read_size_and_string_with<S, F, R>(&mut self, decoder: F) -> Result<R>
    where
        S: LengthPrefix,
        F: FnOnce(&'a [u8]) -> R,
    {
        Ok(decoder(self.read_size_and_bytes::<S>()?))
    }
}
