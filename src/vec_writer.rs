use crate::error::{Error, Result};
use crate::numeric::{encode_into, LengthPrefix, Numeric};
use crate::Endian;

extern crate alloc;
use alloc::vec::Vec;

/// Appends numbers and strings to an owned `Vec<u8>`.
///
/// This is the growable counterpart of [`BinaryWriter`](crate::BinaryWriter), for serializing
/// when the final size is not known up front. Every write appends at the end, so there is no
/// cursor and nothing can be out of range. The bytes produced are the same as a sequence of
/// sequential `BinaryWriter` writes under the same byte order.
#[derive(Clone, Debug, Default)]
pub struct VecWriter {
    out: Vec<u8>,
    endian: Endian,
}

impl VecWriter {
    /// Creates an empty writer using [`Endian::Default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer using the given byte-order policy.
    pub fn with_endian(endian: Endian) -> Self {
        Self {
            out: Vec::new(),
            endian,
        }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(endian: Endian, capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            endian,
        }
    }

    /// The active byte-order policy.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Changes the byte-order policy used by subsequent writes.
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.out
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }

    /// Appends a numeric value.
    pub fn write_numeric<T: Numeric>(&mut self, value: T) {
        let start = self.out.len();
        self.out.resize(start + T::WIDTH, 0);
        encode_into(value, self.endian.resolve(), &mut self.out[start..]);
    }

    /// Appends `bytes` verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Passes `value` through `encoder` and appends the result.
    pub fn write_string_with<F, B>(&mut self, value: &[u8], encoder: F)
    where
        F: FnOnce(&[u8]) -> B,
        B: AsRef<[u8]>,
    {
        self.write_bytes(encoder(value).as_ref())
    }

    /// Appends the length of `bytes` as a prefix of type `S`, followed by `bytes`.
    ///
    /// Fails with [`Error::LengthOverflow`] if the length does not fit `S`, in which case nothing
    /// is appended.
    pub fn write_size_and_bytes<S: LengthPrefix>(&mut self, bytes: &[u8]) -> Result<()> {
        let Some(size) = S::from_len(bytes.len()) else {
            return Err(Error::length_overflow(bytes.len(), S::MAX_LEN));
        };
        self.out.reserve(S::WIDTH + bytes.len());
        self.write_numeric(size);
        self.write_bytes(bytes);
        Ok(())
    }

    /// Encodes `value` with `encoder`, then appends the encoded length as a prefix of type `S`
    /// followed by the encoded bytes.
    pub fn write_size_and_string_with<S, F, B>(&mut self, value: &[u8], encoder: F) -> Result<()>
    where
        S: LengthPrefix,
        F: FnOnce(&[u8]) -> B,
        B: AsRef<[u8]>,
    {
        self.write_size_and_bytes::<S>(encoder(value).as_ref())
    }
}
