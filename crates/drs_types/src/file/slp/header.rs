//! SLP file header.

use std::fmt;
use std::io::{Read, Seek};

use serde::Serialize;

use crate::file::reader::{ByteReader, decode_text, non_negative};
use crate::file::{DrsFileError, FileType};

use super::constants;

/// SLP file header (32 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Header {
	/// Version tag, e.g. `2.0N`
	pub version: String,
	/// Number of frame descriptors following the header
	pub frame_count: u32,
	/// Comment text
	pub comment: String,

	#[serde(skip)]
	raw_version: [u8; constants::VERSION_SIZE],
	#[serde(skip)]
	raw_comment: [u8; constants::COMMENT_SIZE],
}

impl Header {
	/// Size of the header in bytes
	pub const SIZE: usize = constants::HEADER_SIZE;

	/// Reads the header at the cursor.
	pub fn from_reader<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, DrsFileError> {
		let raw_version = reader.read_array::<{ constants::VERSION_SIZE }>()?;
		let frame_count = non_negative(FileType::Slp, "frame count", reader.read_i32()?)?;
		let raw_comment = reader.read_array::<{ constants::COMMENT_SIZE }>()?;

		Ok(Self {
			version: decode_text(&raw_version),
			frame_count,
			comment: decode_text(&raw_comment),
			raw_version,
			raw_comment,
		})
	}

	/// Raw version bytes.
	pub fn raw_version(&self) -> &[u8; constants::VERSION_SIZE] {
		&self.raw_version
	}

	/// Raw comment bytes, padding included.
	pub fn raw_comment(&self) -> &[u8; constants::COMMENT_SIZE] {
		&self.raw_comment
	}
}

impl fmt::Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"SLP {{ version: '{}', frames: {}, comment: '{}' }}",
			self.version, self.frame_count, self.comment
		)
	}
}
