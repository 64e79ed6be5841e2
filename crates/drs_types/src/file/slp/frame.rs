//! SLP frame structures.
//!
//! A frame is described by a 32-byte [`FrameHeader`] in the header block and owns
//! one [`Row`] per scanline once decoded.

use std::fmt;
use std::io::{Read, Seek};

use log::debug;
use serde::Serialize;

use crate::file::reader::ByteReader;
use crate::file::{DrsFileError, FileType, ParseConfig};

use super::constants;
use super::decode::{RowEdges, RowLocation, decode_row};

/// Frame descriptor (32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FrameHeader {
	/// Offset of the per-row command offset table
	pub command_table_offset: u32,
	/// Offset of the per-row edge table
	pub outline_table_offset: u32,
	/// Offset of the palette (unused by the decoder)
	pub palette_offset: u32,
	/// Properties bitmask
	pub properties: u32,
	/// Width in pixels
	pub width: i32,
	/// Height in pixels
	pub height: i32,
	/// Hotspot X coordinate
	pub hotspot_x: i32,
	/// Hotspot Y coordinate
	pub hotspot_y: i32,
}

impl FrameHeader {
	/// Size of a frame descriptor in bytes
	pub const SIZE: usize = constants::FRAME_HEADER_SIZE;

	/// Reads one descriptor at the cursor.
	pub fn from_reader<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, DrsFileError> {
		Ok(Self {
			command_table_offset: reader.read_u32()?,
			outline_table_offset: reader.read_u32()?,
			palette_offset: reader.read_u32()?,
			properties: reader.read_u32()?,
			width: reader.read_i32()?,
			height: reader.read_i32()?,
			hotspot_x: reader.read_i32()?,
			hotspot_y: reader.read_i32()?,
		})
	}

	/// Checks the dimensions and pixel count against `config`.
	pub(super) fn validate(&self, index: usize, config: &ParseConfig) -> Result<(), DrsFileError> {
		for (what, value) in [("frame width", self.width), ("frame height", self.height)] {
			if value < 0 {
				return Err(DrsFileError::malformed_header(
					FileType::Slp,
					format!("frame {index}: {what} is negative ({value})"),
				));
			}
			if value as u32 > config.max_frame_dimension {
				return Err(DrsFileError::limit_exceeded(
					FileType::Slp,
					what,
					value as u64,
					config.max_frame_dimension.into(),
				));
			}
		}

		let pixels = self.width as u64 * self.height as u64;
		if pixels > config.max_frame_pixels {
			return Err(DrsFileError::limit_exceeded(
				FileType::Slp,
				"frame pixels",
				pixels,
				config.max_frame_pixels,
			));
		}
		Ok(())
	}
}

impl fmt::Display for FrameHeader {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}×{} (hotspot: {}, {})",
			self.width, self.height, self.hotspot_x, self.hotspot_y
		)
	}
}

/// Render hints collected from extended commands while decoding a row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RenderHints {
	/// Last X-flip hint seen
	pub flip_x: bool,
	/// Last color table hint seen; `true` selects the alternate table
	pub alternate_color_table: bool,
}

/// One decoded scanline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	left: i16,
	right: i16,
	command_offset: u32,
	hints: RenderHints,
	pixels: Vec<u8>,
}

impl Row {
	/// Left transparent margin as stored in the file.
	#[inline]
	pub fn left(&self) -> i16 {
		self.left
	}

	/// Right transparent margin as stored in the file.
	#[inline]
	pub fn right(&self) -> i16 {
		self.right
	}

	/// Absolute offset of the row's command stream.
	#[inline]
	pub fn command_offset(&self) -> u32 {
		self.command_offset
	}

	/// Returns `true` if either edge holds the transparent-row sentinel.
	#[inline]
	pub fn is_transparent(&self) -> bool {
		self.left == constants::TRANSPARENT_EDGE || self.right == constants::TRANSPARENT_EDGE
	}

	/// Render hints seen in the row's command stream.
	#[inline]
	pub fn hints(&self) -> RenderHints {
		self.hints
	}

	/// Palette indices, one per pixel.
	#[inline]
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}
}

/// A fully decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	header: FrameHeader,
	rows: Vec<Row>,
}

impl Frame {
	/// Decodes a frame whose tables start at the cursor.
	///
	/// The cursor must sit on the frame's edge table, the command offset table must
	/// follow it directly, and each row's commands must start where the previous
	/// row ended. Any deviation is an `OffsetMismatch`.
	pub(super) fn from_reader<R: Read + Seek>(
		reader: &mut ByteReader<R>,
		header: FrameHeader,
		index: usize,
		config: &ParseConfig,
	) -> Result<Self, DrsFileError> {
		let width = header.width as usize;
		let height = header.height as usize;

		reader.expect_position(header.outline_table_offset.into(), || {
			format!("edge table of frame {index}")
		})?;

		// each row holds an edge pair, a command offset and at least one stream byte
		let start = reader.position()?;
		let needed = height as u64 * 9;
		if needed > reader.stream_len()?.saturating_sub(start) {
			return Err(DrsFileError::truncated(FileType::Slp, start, needed));
		}

		let mut edges = Vec::with_capacity(height);
		for _ in 0..height {
			edges.push(RowEdges {
				left: reader.read_i16()?,
				right: reader.read_i16()?,
			});
		}

		reader.expect_position(header.command_table_offset.into(), || {
			format!("command offset table of frame {index}")
		})?;
		let mut offsets = Vec::with_capacity(height);
		for _ in 0..height {
			offsets.push(reader.read_u32()?);
		}

		let mut rows = Vec::with_capacity(height);
		for (row_index, (edge, command_offset)) in edges.into_iter().zip(offsets).enumerate() {
			reader.expect_position(command_offset.into(), || {
				format!("commands of frame {index}, row {row_index}")
			})?;

			let location = RowLocation {
				frame: index,
				row: row_index,
			};
			let decoded = decode_row(reader, edge, width, config.background, location)?;

			rows.push(Row {
				left: edge.left,
				right: edge.right,
				command_offset,
				hints: decoded.hints,
				pixels: decoded.pixels,
			});
		}

		debug!("SLP: decoded frame {} ({})", index, header);

		Ok(Self {
			header,
			rows,
		})
	}

	/// Returns the frame descriptor.
	#[inline]
	pub fn header(&self) -> &FrameHeader {
		&self.header
	}

	/// Returns the frame width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.header.width as u32
	}

	/// Returns the frame height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.header.height as u32
	}

	/// Returns the hotspot X coordinate.
	#[inline]
	pub fn hotspot_x(&self) -> i32 {
		self.header.hotspot_x
	}

	/// Returns the hotspot Y coordinate.
	#[inline]
	pub fn hotspot_y(&self) -> i32 {
		self.header.hotspot_y
	}

	/// Returns the decoded rows.
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Returns one row.
	pub fn row(&self, y: usize) -> Option<&Row> {
		self.rows.get(y)
	}

	/// Returns all pixels in row-major order (`width * height` palette indices).
	pub fn pixels(&self) -> Vec<u8> {
		let mut pixels = Vec::with_capacity(self.pixel_count());
		for row in &self.rows {
			pixels.extend_from_slice(&row.pixels);
		}
		pixels
	}

	/// Gets the palette index at the specified coordinates.
	///
	/// Returns `None` if the coordinates are out of bounds.
	pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
		self.rows.get(y as usize)?.pixels.get(x as usize).copied()
	}

	/// Returns the total number of pixels in this frame.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.width() as usize * self.height() as usize
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.header)
	}
}
