//! Bounds-checked reading and writing of fixed-width numbers and byte strings in a contiguous
//! buffer, under a byte-order policy that can be switched between calls.
//!
//! [`BinaryReader`] and [`BinaryWriter`] keep a cursor into a borrowed slice. Each operation
//! either works at the cursor and advances it, or takes an explicit offset and leaves the cursor
//! alone. Any access that would fall outside the slice fails with [`Error::OutOfRange`] before a
//! single byte is transferred.
//!
//! The byte order is chosen per reader or writer with [`Endian`]. [`Endian::Default`] means the
//! host's native order, and stays distinguishable from an explicit `Little` or `Big`.
//!
//! This crate only transcodes bytes. It knows nothing about the file formats or protocols built
//! on top of it, which decide how strings are delimited and what the decoded values mean.
//!
//! ```
//! use endian_cursor::{BinaryReader, Endian};
//!
//! let mut r = BinaryReader::with_endian(&[0x01, 0x02, 0x03, 0x04], Endian::Big);
//! assert_eq!(r.read_numeric::<u32>(), Ok(0x01020304));
//! assert_eq!(r.position(), 4);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod endian;
mod error;
mod numeric;
mod reader;
#[cfg(feature = "std")]
mod vec_writer;
mod writer;


pub use endian::{ByteOrder, Endian};
pub use error::{Error, Result};
pub use numeric::{LengthPrefix, Numeric};
pub use reader::BinaryReader;
#[cfg(feature = "std")]
pub use vec_writer::VecWriter;
pub use writer::BinaryWriter;
