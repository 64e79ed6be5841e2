//! Core archive operations.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::io::{Cursor, Read, Seek};

use log::{debug, trace};

use crate::file::reader::ByteReader;
use crate::file::{DrsFileError, FileType, ParseConfig};

use super::entry::Entry;
use super::entry_reader::EntryReader;
use super::header::{Header, Table};
use super::iterator::EntryDataIter;

/// An opened `.DRS` archive.
///
/// Metadata is parsed once at construction and never changes afterwards. File data
/// stays in the source until requested.
#[derive(Debug)]
pub struct File<R> {
	reader: ByteReader<R>,
	header: Header,
	tables: Vec<Table>,
	entries: Vec<Entry>,
	index: HashMap<String, usize>,
}

impl<R: Read + Seek> File<R> {
	/// Reads an archive from the given reader with default parse limits.
	pub fn from_reader(reader: R) -> Result<Self, DrsFileError> {
		Self::from_reader_with_config(reader, &ParseConfig::default())
	}

	/// Reads an archive from the given reader.
	///
	/// # Errors
	///
	/// - `MalformedHeader` if the archive type tag is wrong or a field is negative
	/// - `OffsetMismatch` if a table's entry list starts inside the table header block
	/// - `Truncated` if the source ends early or an entry's data lies past its end
	/// - `LimitExceeded` if a count exceeds `config`
	pub fn from_reader_with_config(reader: R, config: &ParseConfig) -> Result<Self, DrsFileError> {
		let mut reader = ByteReader::new(reader, FileType::Drs);
		reader.seek_to(0)?;
		let stream_len = reader.stream_len()?;

		let header = Header::from_reader(&mut reader)?;
		if header.table_count > config.max_tables {
			return Err(DrsFileError::limit_exceeded(
				FileType::Drs,
				"table count",
				header.table_count.into(),
				config.max_tables.into(),
			));
		}

		let mut tables = Vec::with_capacity(header.table_count as usize);
		for _ in 0..header.table_count {
			tables.push(Table::from_reader(&mut reader)?);
		}
		let table_block_end = reader.position()?;
		debug!("DRS: {}, table headers end at 0x{:08X}", header, table_block_end);

		let mut entries = Vec::new();
		let mut index = HashMap::new();

		for (table_index, table) in tables.iter().enumerate() {
			if table.file_count > config.max_entries_per_table {
				return Err(DrsFileError::limit_exceeded(
					FileType::Drs,
					"table file count",
					table.file_count.into(),
					config.max_entries_per_table.into(),
				));
			}

			if u64::from(table.offset) < table_block_end {
				return Err(DrsFileError::offset_mismatch(
					FileType::Drs,
					format!("entry list of table {table_index} (inside table header block)"),
					table.offset.into(),
					table_block_end,
				));
			}

			reader.seek_to(table.offset.into())?;
			trace!("DRS: reading {}", table);

			for _ in 0..table.file_count {
				let entry = Entry::from_reader(&mut reader, &table.extension, table_index)?;

				// duplicates are dropped unvalidated; only kept entries must fit the stream
				match index.entry(entry.name()) {
					hash_map::Entry::Vacant(slot) => {
						if entry.end() > stream_len {
							return Err(DrsFileError::truncated(
								FileType::Drs,
								entry.offset.into(),
								entry.length.into(),
							));
						}
						slot.insert(entries.len());
						entries.push(entry);
					}
					hash_map::Entry::Occupied(slot) => {
						debug!("DRS: ignoring duplicate entry '{}'", slot.key());
					}
				}
			}
		}

		debug!("DRS: {} tables, {} unique entries", tables.len(), entries.len());

		Ok(Self {
			reader,
			header,
			tables,
			entries,
			index,
		})
	}

	/// Reads the bytes of the entry with the given logical name.
	///
	/// Seeks to the entry and reads exactly `length` bytes.
	pub fn read(&mut self, name: &str) -> Result<Vec<u8>, DrsFileError> {
		let (offset, length) = self.locate(name)?;
		self.read_range(offset, length)
	}

	/// Opens a `Read + Seek` view over the entry with the given logical name.
	///
	/// Positions in the view are relative to the entry start, so the view can be
	/// handed directly to [`slp::File::from_reader`](crate::file::slp::File::from_reader).
	pub fn open_entry(&mut self, name: &str) -> Result<EntryReader<'_, R>, DrsFileError> {
		let (offset, length) = self.locate(name)?;
		Ok(EntryReader::new(self.reader.get_mut(), offset.into(), length.into()))
	}

	/// Reads every entry eagerly, in archive order.
	pub fn extract_all(&mut self) -> Result<Vec<(Entry, Vec<u8>)>, DrsFileError> {
		self.iter_data().collect()
	}

	/// Returns an iterator that reads entries one at a time.
	pub fn iter_data(&mut self) -> EntryDataIter<'_, R> {
		EntryDataIter {
			file: self,
			current_index: 0,
		}
	}

	pub(super) fn read_range(&mut self, offset: u32, length: u32) -> Result<Vec<u8>, DrsFileError> {
		self.reader.seek_to(offset.into())?;
		self.reader.read_vec(length as usize)
	}

	fn locate(&self, name: &str) -> Result<(u32, u32), DrsFileError> {
		let entry = self.entry(name).ok_or_else(|| DrsFileError::not_found(name))?;
		Ok((entry.offset, entry.length))
	}
}

impl<R> File<R> {
	/// Returns the archive header.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the table descriptors in file order.
	pub fn tables(&self) -> &[Table] {
		&self.tables
	}

	/// Returns all unique entries in the order they were first encountered.
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Returns the number of unique entries.
	pub fn entry_count(&self) -> usize {
		self.entries.len()
	}

	/// Looks up entry metadata by logical name.
	pub fn entry(&self, name: &str) -> Option<&Entry> {
		self.index.get(name).map(|&i| &self.entries[i])
	}

	/// Checks if an entry with the given logical name exists.
	pub fn contains(&self, name: &str) -> bool {
		self.index.contains_key(name)
	}

	/// Returns an iterator over entry metadata.
	pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
		self.entries.iter()
	}

	/// Consumes the archive and returns the underlying reader.
	pub fn into_inner(self) -> R {
		self.reader.into_inner()
	}
}

impl File<std::io::BufReader<std::fs::File>> {
	/// Opens a `.DRS` file from the given path
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DrsFileError> {
		let file = std::fs::File::open(path)?;
		Self::from_reader(std::io::BufReader::new(file))
	}
}

impl<'a> File<Cursor<&'a [u8]>> {
	/// Reads an archive held in memory.
	pub fn from_bytes(data: &'a [u8]) -> Result<Self, DrsFileError> {
		Self::from_reader(Cursor::new(data))
	}
}

impl<R> fmt::Display for File<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.header)?;
		for table in &self.tables {
			writeln!(f, "  {}", table)?;
		}
		write!(f, "  {} entries", self.entries.len())
	}
}

impl<'a, R> IntoIterator for &'a File<R> {
	type Item = &'a Entry;
	type IntoIter = std::slice::Iter<'a, Entry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
