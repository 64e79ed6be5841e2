//! Iterator reading archive entries on demand.

use std::io::{Read, Seek};

use crate::file::DrsFileError;

use super::File;
use super::entry::Entry;

/// Iterator over `(entry, data)` pairs.
///
/// Each call to `next()` seeks to one entry and reads it.
pub struct EntryDataIter<'a, R> {
	pub(super) file: &'a mut File<R>,
	pub(super) current_index: usize,
}

impl<R: Read + Seek> Iterator for EntryDataIter<'_, R> {
	type Item = Result<(Entry, Vec<u8>), DrsFileError>;

	fn next(&mut self) -> Option<Self::Item> {
		let entry = self.file.entries().get(self.current_index)?.clone();
		self.current_index += 1;

		Some(self.file.read_range(entry.offset, entry.length).map(|data| (entry, data)))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.file.entry_count() - self.current_index;
		(remaining, Some(remaining))
	}
}

impl<R: Read + Seek> ExactSizeIterator for EntryDataIter<'_, R> {}
