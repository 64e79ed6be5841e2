//! Row opcode interpreter.
//!
//! ## State
//!
//! - `pixels`: the row, `width` bytes pre-filled with the background index
//! - `position`: next pixel to write, starting at the left edge
//! - `hints`: render hints seen in the stream
//!
//! ## Invariants
//!
//! - `position` never exceeds `width`; a command that would overrun the row fails
//!   before touching the buffer.
//! - At end of row `position + right == width`.
//!
//! Fully transparent rows (edge sentinel) consume exactly one padding byte and
//! produce the background row.

use std::io::{Read, Seek};

use log::trace;

use crate::file::DrsFileError;
use crate::file::reader::ByteReader;

use super::constants;
use super::frame::RenderHints;
use super::opcode::{Command, ExtendedCommand};

/// Where a row sits, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RowLocation {
	pub frame: usize,
	pub row: usize,
}

/// Left and right transparent margins of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RowEdges {
	pub left: i16,
	pub right: i16,
}

impl RowEdges {
	pub fn is_transparent(self) -> bool {
		self.left == constants::TRANSPARENT_EDGE || self.right == constants::TRANSPARENT_EDGE
	}
}

/// Output of decoding one row.
#[derive(Debug)]
pub(super) struct DecodedRow {
	pub pixels: Vec<u8>,
	pub hints: RenderHints,
}

struct RowCanvas {
	pixels: Vec<u8>,
	position: usize,
	hints: RenderHints,
	edges: RowEdges,
	location: RowLocation,
}

impl RowCanvas {
	fn width(&self) -> usize {
		self.pixels.len()
	}

	fn mismatch(&self, written: usize) -> DrsFileError {
		DrsFileError::RowLengthMismatch {
			frame: self.location.frame,
			row: self.location.row,
			left: self.edges.left.into(),
			written,
			right: self.edges.right.into(),
			width: self.width(),
		}
	}

	/// Reserves `len` pixels at the current position and returns their range.
	fn claim(&mut self, len: usize) -> Result<std::ops::Range<usize>, DrsFileError> {
		let start = self.position;
		let end = start + len;
		if end > self.width() {
			// left edge is non-negative here, checked on entry
			let left = self.edges.left as usize;
			return Err(self.mismatch(end - left));
		}
		self.position = end;
		Ok(start..end)
	}

	fn fill(&mut self, len: usize, color: u8) -> Result<(), DrsFileError> {
		let range = self.claim(len)?;
		self.pixels[range].fill(color);
		Ok(())
	}

	fn copy<R: Read + Seek>(
		&mut self,
		reader: &mut ByteReader<R>,
		len: usize,
	) -> Result<(), DrsFileError> {
		let range = self.claim(len)?;
		reader.read_into(&mut self.pixels[range])?;
		Ok(())
	}

	fn execute<R: Read + Seek>(
		&mut self,
		reader: &mut ByteReader<R>,
		command: Command,
	) -> Result<(), DrsFileError> {
		match command {
			Command::BlockCopy {
				len,
			} => self.copy(reader, len),
			Command::Skip {
				len,
			} => self.claim(len).map(|_| ()),
			Command::PlayerColorCopy {
				len,
				color,
			} => self.fill(len, color.wrapping_add(constants::PLAYER_COLOR_OFFSET)),
			Command::Fill {
				len,
				color,
			} => self.fill(len, color),
			Command::FillPlayerColor {
				len,
				color,
			} => self.fill(len, color.wrapping_add(constants::PLAYER_COLOR_OFFSET)),
			Command::Shadow {
				len,
			} => self.fill(len, constants::SHADOW_INDEX),
			Command::Extended(extended) => self.execute_extended(extended),
			Command::EndOfRow => Ok(()),
		}
	}

	fn execute_extended(&mut self, command: ExtendedCommand) -> Result<(), DrsFileError> {
		match command {
			ExtendedCommand::FlipX(flip) => {
				self.hints.flip_x = flip;
				Ok(())
			}
			ExtendedCommand::AlternateColorTable(alternate) => {
				self.hints.alternate_color_table = alternate;
				Ok(())
			}
			ExtendedCommand::PlayerOutline {
				len,
			} => self.fill(len, constants::PLAYER_OUTLINE_INDEX),
			ExtendedCommand::BlackOutline {
				len,
			} => self.fill(len, constants::BLACK_OUTLINE_INDEX),
		}
	}
}

/// Decodes the command stream of one row starting at the cursor.
pub(super) fn decode_row<R: Read + Seek>(
	reader: &mut ByteReader<R>,
	edges: RowEdges,
	width: usize,
	background: u8,
	location: RowLocation,
) -> Result<DecodedRow, DrsFileError> {
	let mut canvas = RowCanvas {
		pixels: vec![background; width],
		position: 0,
		hints: RenderHints::default(),
		edges,
		location,
	};

	if edges.is_transparent() {
		// the stream still holds one padding byte for this row
		reader.read_u8()?;
		trace!("SLP: frame {} row {} is transparent", location.frame, location.row);
		return Ok(DecodedRow {
			pixels: canvas.pixels,
			hints: canvas.hints,
		});
	}

	if edges.left < 0 || edges.right < 0 || edges.left as usize > width {
		return Err(canvas.mismatch(0));
	}
	canvas.position = edges.left as usize;

	loop {
		let command = Command::read(reader)?;
		if command == Command::EndOfRow {
			break;
		}
		canvas.execute(reader, command)?;
	}

	let written = canvas.position - edges.left as usize;
	if canvas.position + edges.right as usize != width {
		return Err(canvas.mismatch(written));
	}

	trace!(
		"SLP: frame {} row {}: {} + {} + {}",
		location.frame, location.row, edges.left, written, edges.right
	);

	Ok(DecodedRow {
		pixels: canvas.pixels,
		hints: canvas.hints,
	})
}
