//! Bounded view over one archive entry.

use std::io::{self, Read, Seek, SeekFrom};

/// `Read + Seek` window over a single entry's bytes.
///
/// Positions are relative to the start of the entry, so offsets stored inside an
/// embedded file (such as an SLP sprite's frame tables) resolve correctly without
/// copying the entry out of the archive.
#[derive(Debug)]
pub struct EntryReader<'a, R> {
	inner: &'a mut R,
	start: u64,
	len: u64,
	pos: u64,
}

impl<'a, R: Read + Seek> EntryReader<'a, R> {
	/// Creates a view of `len` bytes starting at absolute offset `start`.
	pub fn new(inner: &'a mut R, start: u64, len: u64) -> Self {
		Self {
			inner,
			start,
			len,
			pos: 0,
		}
	}

	/// Length of the entry in bytes.
	pub fn len(&self) -> u64 {
		self.len
	}

	/// Returns `true` if the entry holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl<R: Read + Seek> Read for EntryReader<'_, R> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if self.pos >= self.len {
			return Ok(0);
		}

		let remaining = self.len - self.pos;
		let max = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));

		// the inner reader may have been moved by someone else since the last read
		self.inner.seek(SeekFrom::Start(self.start + self.pos))?;
		let n = self.inner.read(&mut buf[..max])?;
		self.pos += n as u64;
		Ok(n)
	}
}

impl<R: Read + Seek> Seek for EntryReader<'_, R> {
	fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
		let target = match pos {
			SeekFrom::Start(offset) => Some(offset),
			SeekFrom::End(delta) => self.len.checked_add_signed(delta),
			SeekFrom::Current(delta) => self.pos.checked_add_signed(delta),
		};

		match target {
			Some(target) => {
				self.pos = target;
				Ok(target)
			}
			None => Err(io::Error::new(
				io::ErrorKind::InvalidInput,
				"invalid seek to a negative or overflowing position",
			)),
		}
	}
}
