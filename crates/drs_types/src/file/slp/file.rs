//! SLP file decoding.

use std::fmt;
use std::io::{Cursor, Read, Seek};

use log::debug;

use crate::file::reader::ByteReader;
use crate::file::{DrsFileError, FileType, ParseConfig};

use super::frame::{Frame, FrameHeader};
use super::header::Header;

/// A decoded SLP sprite.
///
/// Every row of every frame is decoded when the sprite is read; a sprite either
/// decodes completely or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	header: Header,
	frames: Vec<Frame>,
}

impl File {
	/// Decodes a sprite from any seekable reader with default parse limits.
	///
	/// Offsets inside the sprite are measured from position 0 of `reader`; pass an
	/// [`EntryReader`](crate::file::drs::EntryReader) to decode a sprite stored in an
	/// archive.
	pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self, DrsFileError> {
		Self::from_reader_with_config(reader, &ParseConfig::default())
	}

	/// Decodes a sprite from any seekable reader.
	///
	/// # Errors
	///
	/// - `MalformedHeader` for negative counts or dimensions
	/// - `OffsetMismatch` if a table or row stream is not where the file says
	/// - `Truncated` if the source ends early
	/// - `UnknownOpcode` for an unknown extended command
	/// - `RowLengthMismatch` if a row's pixels disagree with the frame width
	/// - `LimitExceeded` if a count or dimension exceeds `config`
	pub fn from_reader_with_config<R: Read + Seek>(
		reader: R,
		config: &ParseConfig,
	) -> Result<Self, DrsFileError> {
		let mut reader = ByteReader::new(reader, FileType::Slp);
		reader.seek_to(0)?;

		let header = Header::from_reader(&mut reader)?;
		if header.frame_count > config.max_frames {
			return Err(DrsFileError::limit_exceeded(
				FileType::Slp,
				"frame count",
				header.frame_count.into(),
				config.max_frames.into(),
			));
		}
		debug!("SLP: {}", header);

		let mut frame_headers = Vec::with_capacity(header.frame_count as usize);
		for index in 0..header.frame_count as usize {
			let frame_header = FrameHeader::from_reader(&mut reader)?;
			frame_header.validate(index, config)?;
			frame_headers.push(frame_header);
		}

		let mut frames = Vec::with_capacity(frame_headers.len());
		for (index, frame_header) in frame_headers.into_iter().enumerate() {
			frames.push(Frame::from_reader(&mut reader, frame_header, index, config)?);
		}

		Ok(Self {
			header,
			frames,
		})
	}

	/// Decodes a sprite held in memory.
	pub fn from_bytes(data: &[u8]) -> Result<Self, DrsFileError> {
		Self::from_reader(Cursor::new(data))
	}

	/// Opens and decodes an SLP file from the specified path.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DrsFileError> {
		let file = std::fs::File::open(path)?;
		Self::from_reader(std::io::BufReader::new(file))
	}

	/// Returns the file header.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the number of frames in the file.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns all frames.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Gets a frame by index.
	pub fn get_frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns an iterator over all frames in the file.
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}
}

impl fmt::Display for File {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SLP File: '{}', {} frames", self.header.version, self.frames.len())
	}
}

impl<'a> IntoIterator for &'a File {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl TryFrom<&[u8]> for File {
	type Error = DrsFileError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}
