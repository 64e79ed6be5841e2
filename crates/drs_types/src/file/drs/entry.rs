//! Archive file entries.

use std::fmt;
use std::io::{Read, Seek};

use serde::Serialize;

use crate::file::reader::{ByteReader, non_negative};
use crate::file::{DrsFileError, FileType};

use super::constants;

/// One file stored in the archive.
///
/// Identifiers are unique within a table only; the logical name joins the
/// identifier with the table extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
	/// Numeric resource identifier
	pub id: i32,
	/// Absolute offset of the file data
	pub offset: u32,
	/// Length of the file data in bytes
	pub length: u32,
	/// Extension of the table this entry belongs to
	pub extension: String,
	/// Index of the table this entry was read from
	pub table: usize,
}

impl Entry {
	/// Size of an entry record in bytes
	pub const SIZE: usize = constants::ENTRY_SIZE;

	/// Reads one entry record at the current position.
	pub fn from_reader<R: Read + Seek>(
		reader: &mut ByteReader<R>,
		extension: &str,
		table: usize,
	) -> Result<Self, DrsFileError> {
		let id = reader.read_i32()?;
		let offset = non_negative(FileType::Drs, "entry offset", reader.read_i32()?)?;
		let length = non_negative(FileType::Drs, "entry length", reader.read_i32()?)?;

		Ok(Self {
			id,
			offset,
			length,
			extension: extension.to_string(),
			table,
		})
	}

	/// Logical name, `"{id}.{extension}"`.
	pub fn name(&self) -> String {
		format!("{}.{}", self.id, self.extension)
	}

	/// Offset one past the last data byte.
	#[inline]
	pub fn end(&self) -> u64 {
		u64::from(self.offset) + u64::from(self.length)
	}
}

impl fmt::Display for Entry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Entry {{ name: '{}', offset: 0x{:08X}, length: {} }}",
			self.name(),
			self.offset,
			self.length
		)
	}
}
