//! Archive header and table descriptors.

use std::fmt;
use std::io::{Read, Seek};

use serde::Serialize;

use crate::file::reader::{ByteReader, decode_text, non_negative};
use crate::file::{DrsFileError, FileType};

use super::constants;

/// DRS archive header (64 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Header {
	/// Copyright / comment text
	pub copyright: String,
	/// Version tag, e.g. `1.00`
	pub version: String,
	/// Archive type tag with padding removed
	pub archive_type: String,
	/// Number of table descriptors following the header
	pub table_count: u32,
	/// Offset of the first file's data (informational)
	pub first_file_offset: u32,

	#[serde(skip)]
	raw_copyright: [u8; constants::COPYRIGHT_SIZE],
	#[serde(skip)]
	raw_version: [u8; constants::VERSION_SIZE],
}

impl Header {
	/// Size of the header in bytes
	pub const SIZE: usize = constants::HEADER_SIZE;

	/// Reads the header from the start of the cursor.
	///
	/// Fails with `MalformedHeader` if the archive type differs from
	/// [`constants::ARCHIVE_TYPE`] in any byte; nothing after the header is read then.
	pub fn from_reader<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, DrsFileError> {
		let raw_copyright = reader.read_array::<{ constants::COPYRIGHT_SIZE }>()?;
		let raw_version = reader.read_array::<{ constants::VERSION_SIZE }>()?;
		let raw_type = reader.read_array::<{ constants::ARCHIVE_TYPE_SIZE }>()?;

		if raw_type != constants::ARCHIVE_TYPE {
			return Err(DrsFileError::malformed_header(
				FileType::Drs,
				format!(
					"archive type {:02X?} does not match {:02X?}",
					raw_type,
					constants::ARCHIVE_TYPE
				),
			));
		}

		let table_count = non_negative(FileType::Drs, "table count", reader.read_i32()?)?;
		let first_file_offset =
			non_negative(FileType::Drs, "first file offset", reader.read_i32()?)?;

		Ok(Self {
			copyright: decode_text(&raw_copyright),
			version: decode_text(&raw_version),
			archive_type: decode_text(&raw_type),
			table_count,
			first_file_offset,
			raw_copyright,
			raw_version,
		})
	}

	/// Raw copyright bytes, padding included.
	pub fn raw_copyright(&self) -> &[u8; constants::COPYRIGHT_SIZE] {
		&self.raw_copyright
	}

	/// Raw version bytes.
	pub fn raw_version(&self) -> &[u8; constants::VERSION_SIZE] {
		&self.raw_version
	}
}

impl fmt::Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"DRS {{ version: '{}', type: '{}', tables: {}, first file: 0x{:08X} }}",
			self.version, self.archive_type, self.table_count, self.first_file_offset
		)
	}
}

/// Table descriptor (12 bytes): one group of entries sharing an extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Table {
	/// File-type tag, e.g. `a` for binary tables or ` ` for others
	pub file_type: char,
	/// Extension, already un-reversed (`slp`, `wav`, `bin`, ...)
	pub extension: String,
	/// Absolute offset of this table's entry list
	pub offset: u32,
	/// Number of entries in the list
	pub file_count: u32,
}

impl Table {
	/// Size of a table descriptor in bytes
	pub const SIZE: usize = constants::TABLE_SIZE;

	/// Reads one descriptor at the current position.
	pub fn from_reader<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, DrsFileError> {
		let file_type = char::from(reader.read_u8()?);

		// stored back to front: "pls" is "slp"
		let mut raw_extension = reader.read_array::<3>()?;
		raw_extension.reverse();
		let extension = decode_text(&raw_extension).trim().to_string();

		let offset = non_negative(FileType::Drs, "table offset", reader.read_i32()?)?;
		let file_count = non_negative(FileType::Drs, "table file count", reader.read_i32()?)?;

		Ok(Self {
			file_type,
			extension,
			offset,
			file_count,
		})
	}
}

impl fmt::Display for Table {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Table {{ type: '{}', extension: '{}', offset: 0x{:08X}, files: {} }}",
			self.file_type, self.extension, self.offset, self.file_count
		)
	}
}
