//! SLP draw commands.
//!
//! A command starts with one opcode byte. Its low nibble selects an entry in the
//! primary table ([`Opcode`]); the remaining bits of the same byte, the following
//! byte, or both carry the run length. Low nibble `0xE` defers to the extended
//! table ([`ExtendedOpcode`]), which is keyed by the full byte.
//!
//! | Low nibble | Opcode             | Length encoding                       |
//! |------------|--------------------|---------------------------------------|
//! | 0, 4, 8, C | `LesserBlockCopy`  | `byte >> 2`                           |
//! | 1, 5, 9, D | `LesserSkip`       | `byte >> 2`                           |
//! | 2          | `GreaterBlockCopy` | `(byte & 0xF0) << 4 \| next`          |
//! | 3          | `GreaterSkip`      | `(byte & 0xF0) << 4 \| next`          |
//! | 6          | `PlayerColorCopy`  | `byte >> 4`, or `next` when that is 0 |
//! | 7          | `FillColor`        | `byte >> 4`, or `next` when that is 0 |
//! | A          | `FillPlayerColor`  | `byte >> 4`, or `next` when that is 0 |
//! | B          | `Shadow`           | `byte >> 4`, or `next` when that is 0 |
//! | E          | `Extended`         | see [`ExtendedOpcode`]                |
//! | F          | `EndOfRow`         | none                                  |

use std::io::{Read, Seek};

use crate::file::DrsFileError;
use crate::file::reader::ByteReader;

/// Primary opcode, selected by the low nibble of the opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
	/// Copy up to 63 literal palette indices
	LesserBlockCopy,
	/// Skip up to 63 transparent pixels
	LesserSkip,
	/// Copy up to 4095 literal palette indices
	GreaterBlockCopy,
	/// Skip up to 4095 transparent pixels
	GreaterSkip,
	/// Repeat one source index shifted into the player color range
	PlayerColorCopy,
	/// Repeat one literal index
	FillColor,
	/// Repeat one index shifted into the player color range
	FillPlayerColor,
	/// Repeat the shadow index
	Shadow,
	/// Second-level command keyed by the full byte
	Extended,
	/// End of the row's command stream
	EndOfRow,
}

impl Opcode {
	/// Classifies an opcode byte by its low nibble.
	pub fn from_byte(byte: u8) -> Self {
		match byte & 0x0F {
			0x0 | 0x4 | 0x8 | 0xC => Opcode::LesserBlockCopy,
			0x1 | 0x5 | 0x9 | 0xD => Opcode::LesserSkip,
			0x2 => Opcode::GreaterBlockCopy,
			0x3 => Opcode::GreaterSkip,
			0x6 => Opcode::PlayerColorCopy,
			0x7 => Opcode::FillColor,
			0xA => Opcode::FillPlayerColor,
			0xB => Opcode::Shadow,
			0xE => Opcode::Extended,
			0xF => Opcode::EndOfRow,
			_ => unreachable!("low nibble is 4 bits wide"),
		}
	}
}

/// Extended opcode, selected by the full byte when the low nibble is `0xE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExtendedOpcode {
	/// Render hint: draw mirrored on X
	RenderHintFlipX = 0x0E,
	/// Render hint: draw unmirrored
	RenderHintNotFlipX = 0x1E,
	/// Use the normal color table
	TableColorNormal = 0x2E,
	/// Use the alternate color table
	TableColorAlt = 0x3E,
	/// One player-colored outline pixel (transparent for other renderers)
	PlayerOrTransparent = 0x4E,
	/// Run of player-colored outline pixels, length in the next byte
	PlayerOutlineSpan = 0x5E,
	/// One black outline pixel
	BlackOutline = 0x6E,
	/// Run of black outline pixels, length in the next byte
	BlackOutlineSpan = 0x7E,
}

impl ExtendedOpcode {
	/// Looks up a full opcode byte in the extended table.
	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			0x0E => Some(Self::RenderHintFlipX),
			0x1E => Some(Self::RenderHintNotFlipX),
			0x2E => Some(Self::TableColorNormal),
			0x3E => Some(Self::TableColorAlt),
			0x4E => Some(Self::PlayerOrTransparent),
			0x5E => Some(Self::PlayerOutlineSpan),
			0x6E => Some(Self::BlackOutline),
			0x7E => Some(Self::BlackOutlineSpan),
			_ => None,
		}
	}
}

/// A draw command with its operands decoded.
///
/// Literal pixel bytes of block copies are not part of the command; they follow
/// it in the stream and are read by the interpreter straight into the row.
/// Player color copies carry their single source byte as `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	/// `len` literal indices follow
	BlockCopy {
		/// Run length
		len: usize,
	},
	/// Advance `len` pixels without writing
	Skip {
		/// Run length
		len: usize,
	},
	/// Write the source byte `color` shifted into the player color range `len` times
	PlayerColorCopy {
		/// Run length
		len: usize,
		/// Source byte before the player shift
		color: u8,
	},
	/// Write `color` `len` times
	Fill {
		/// Run length
		len: usize,
		/// Palette index
		color: u8,
	},
	/// Write `color` shifted into the player color range `len` times
	FillPlayerColor {
		/// Run length
		len: usize,
		/// Palette index before the player shift
		color: u8,
	},
	/// Write the shadow index `len` times
	Shadow {
		/// Run length
		len: usize,
	},
	/// Extended command
	Extended(ExtendedCommand),
	/// End of row
	EndOfRow,
}

/// Decoded extended command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtendedCommand {
	/// Mirror hint, `true` for flipped
	FlipX(bool),
	/// Color table hint, `true` for the alternate table
	AlternateColorTable(bool),
	/// Write the player outline index `len` times
	PlayerOutline {
		/// Run length
		len: usize,
	},
	/// Write the black outline index `len` times
	BlackOutline {
		/// Run length
		len: usize,
	},
}

impl Command {
	/// Reads one command and its operands at the cursor.
	///
	/// Fails with `UnknownOpcode` for an extended byte outside [`ExtendedOpcode`].
	pub fn read<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, DrsFileError> {
		let offset = reader.position()?;
		let byte = reader.read_u8()?;

		let command = match Opcode::from_byte(byte) {
			Opcode::LesserBlockCopy => Command::BlockCopy {
				len: top_six_bits(byte),
			},
			Opcode::LesserSkip => Command::Skip {
				len: top_six_bits(byte),
			},
			Opcode::GreaterBlockCopy => Command::BlockCopy {
				len: nibble_and_next(byte, reader.read_u8()?),
			},
			Opcode::GreaterSkip => Command::Skip {
				len: nibble_and_next(byte, reader.read_u8()?),
			},
			Opcode::PlayerColorCopy => {
				let len = nibble_or_next(byte, reader)?;
				Command::PlayerColorCopy {
					len,
					color: reader.read_u8()?,
				}
			}
			Opcode::FillColor => {
				let len = nibble_or_next(byte, reader)?;
				Command::Fill {
					len,
					color: reader.read_u8()?,
				}
			}
			Opcode::FillPlayerColor => {
				let len = nibble_or_next(byte, reader)?;
				Command::FillPlayerColor {
					len,
					color: reader.read_u8()?,
				}
			}
			Opcode::Shadow => Command::Shadow {
				len: nibble_or_next(byte, reader)?,
			},
			Opcode::Extended => {
				let Some(extended) = ExtendedOpcode::from_byte(byte) else {
					return Err(DrsFileError::UnknownOpcode {
						opcode: byte,
						offset,
					});
				};
				Command::Extended(ExtendedCommand::read(extended, reader)?)
			}
			Opcode::EndOfRow => Command::EndOfRow,
		};

		Ok(command)
	}
}

impl ExtendedCommand {
	fn read<R: Read + Seek>(
		opcode: ExtendedOpcode,
		reader: &mut ByteReader<R>,
	) -> Result<Self, DrsFileError> {
		Ok(match opcode {
			ExtendedOpcode::RenderHintFlipX => ExtendedCommand::FlipX(true),
			ExtendedOpcode::RenderHintNotFlipX => ExtendedCommand::FlipX(false),
			ExtendedOpcode::TableColorNormal => ExtendedCommand::AlternateColorTable(false),
			ExtendedOpcode::TableColorAlt => ExtendedCommand::AlternateColorTable(true),
			ExtendedOpcode::PlayerOrTransparent => ExtendedCommand::PlayerOutline {
				len: 1,
			},
			ExtendedOpcode::PlayerOutlineSpan => ExtendedCommand::PlayerOutline {
				len: usize::from(reader.read_u8()?),
			},
			ExtendedOpcode::BlackOutline => ExtendedCommand::BlackOutline {
				len: 1,
			},
			ExtendedOpcode::BlackOutlineSpan => ExtendedCommand::BlackOutline {
				len: usize::from(reader.read_u8()?),
			},
		})
	}
}

#[inline]
fn top_six_bits(byte: u8) -> usize {
	usize::from(byte >> 2)
}

#[inline]
fn nibble_and_next(byte: u8, next: u8) -> usize {
	(usize::from(byte & 0xF0) << 4) | usize::from(next)
}

fn nibble_or_next<R: Read + Seek>(
	byte: u8,
	reader: &mut ByteReader<R>,
) -> Result<usize, DrsFileError> {
	match byte >> 4 {
		0 => Ok(usize::from(reader.read_u8()?)),
		len => Ok(usize::from(len)),
	}
}
