//! Little-endian cursor over a seekable byte source.
//!
//! Every parse call owns one [`ByteReader`]; there is no shared position. Reads that
//! run past the end of the source are reported as [`DrsFileError::Truncated`] with
//! the offset the read started at.

use std::io::{self, Read, Seek, SeekFrom};

use encoding_rs::WINDOWS_1252;

use super::{DrsFileError, FileType};

/// Cursor over a `Read + Seek` source, tagged with the format being parsed.
#[derive(Debug)]
pub struct ByteReader<R> {
	inner: R,
	file_type: FileType,
}

impl<R: Read + Seek> ByteReader<R> {
	/// Wraps a reader. The current position of `inner` is kept.
	pub fn new(inner: R, file_type: FileType) -> Self {
		Self {
			inner,
			file_type,
		}
	}

	/// Format this cursor reports errors for.
	pub fn file_type(&self) -> FileType {
		self.file_type
	}

	/// Current absolute position.
	pub fn position(&mut self) -> Result<u64, DrsFileError> {
		Ok(self.inner.stream_position()?)
	}

	/// Moves to an absolute position.
	pub fn seek_to(&mut self, offset: u64) -> Result<(), DrsFileError> {
		self.inner.seek(SeekFrom::Start(offset))?;
		Ok(())
	}

	/// Total length of the source. The position is left unchanged.
	pub fn stream_len(&mut self) -> Result<u64, DrsFileError> {
		let current = self.inner.stream_position()?;
		let len = self.inner.seek(SeekFrom::End(0))?;
		self.inner.seek(SeekFrom::Start(current))?;
		Ok(len)
	}

	/// Fails with `OffsetMismatch` unless the cursor sits exactly at `expected`.
	pub fn expect_position(
		&mut self,
		expected: u64,
		context: impl FnOnce() -> String,
	) -> Result<(), DrsFileError> {
		let actual = self.position()?;
		if actual != expected {
			return Err(DrsFileError::offset_mismatch(self.file_type, context(), expected, actual));
		}
		Ok(())
	}

	/// Fills `buf` completely or fails with `Truncated`.
	pub fn read_into(&mut self, buf: &mut [u8]) -> Result<(), DrsFileError> {
		let offset = self.position()?;
		let file_type = self.file_type;
		let needed = buf.len() as u64;
		self.inner.read_exact(buf).map_err(|e| {
			if e.kind() == io::ErrorKind::UnexpectedEof {
				DrsFileError::truncated(file_type, offset, needed)
			} else {
				DrsFileError::IOError(e)
			}
		})
	}

	/// Reads a fixed-size byte array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DrsFileError> {
		let mut buf = [0u8; N];
		self.read_into(&mut buf)?;
		Ok(buf)
	}

	/// Reads `len` bytes into a new buffer.
	pub fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, DrsFileError> {
		let mut buf = vec![0u8; len];
		self.read_into(&mut buf)?;
		Ok(buf)
	}

	/// Reads one byte.
	pub fn read_u8(&mut self) -> Result<u8, DrsFileError> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Reads a little-endian `i16`.
	pub fn read_i16(&mut self) -> Result<i16, DrsFileError> {
		Ok(i16::from_le_bytes(self.read_array()?))
	}

	/// Reads a little-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32, DrsFileError> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Reads a little-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32, DrsFileError> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}
}

impl<R> ByteReader<R> {
	/// Returns the wrapped reader.
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Borrows the wrapped reader.
	pub fn get_mut(&mut self) -> &mut R {
		&mut self.inner
	}
}

/// Decodes a fixed-width, NUL-padded text field.
pub(crate) fn decode_text(raw: &[u8]) -> String {
	let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
	let (text, _encoding, _had_errors) = WINDOWS_1252.decode(&raw[..end]);
	text.trim_end().to_string()
}

/// Converts a signed count or offset read from a header, rejecting negative values.
pub(crate) fn non_negative(
	file_type: FileType,
	field: &str,
	value: i32,
) -> Result<u32, DrsFileError> {
	u32::try_from(value).map_err(|_| {
		DrsFileError::malformed_header(file_type, format!("{field} is negative ({value})"))
	})
}
