//! `.SLP` sprite support.
//!
//! An SLP file holds one or more frames of palette-indexed pixels. Every row of a
//! frame is stored as a short command stream (runs of literal indices, skips,
//! fills) bracketed by transparent left and right margins.
//!
//! # File Structure
//!
//! | Offset | Size | Field         | Description                        |
//! |--------|------|---------------|------------------------------------|
//! | 0x00   | 4    | `version`     | Version tag, e.g. `2.0N`           |
//! | 0x04   | 4    | `frame_count` | Number of frames                   |
//! | 0x08   | 24   | `comment`     | Comment text, padded               |
//!
//! `frame_count` frame descriptors (32 bytes each) follow the header. For every
//! frame, in order, the file then holds:
//!
//! 1. `height` edge pairs (`i16` left, `i16` right)
//! 2. `height` command offsets (`u32`)
//! 3. the command streams of all rows, back to back
//!
//! An edge of `0x8000` marks a fully transparent row, whose stream is a single
//! padding byte. See [`opcode`] for the command encoding.
//!
//! # Examples
//!
//! ```no_run
//! use drs_types::file::slp::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let slp = File::open("50500.slp")?;
//!
//! for frame in &slp {
//!     println!("{frame}: {} pixels", frame.pixels().len());
//! }
//! # Ok(())
//! # }
//! ```

mod decode;
mod file;
mod frame;
mod header;
pub mod opcode;


pub use file::File;
pub use frame::{Frame, FrameHeader, RenderHints, Row};
pub use header::Header;

/// SLP file constants.
pub mod constants {
	/// Size of the version field
	pub const VERSION_SIZE: usize = 4;

	/// Size of the comment field
	pub const COMMENT_SIZE: usize = 24;

	/// Size of the file header
	pub const HEADER_SIZE: usize = VERSION_SIZE + 4 + COMMENT_SIZE;

	/// Size of a frame descriptor
	pub const FRAME_HEADER_SIZE: usize = 32;

	/// Edge value marking a fully transparent row (`0x8000`)
	pub const TRANSPARENT_EDGE: i16 = i16::MIN;

	/// Shift applied to player color indices, player slot 1
	pub const PLAYER_COLOR_OFFSET: u8 = (1 + 1) * 16;

	/// Palette index written by shadow runs
	pub const SHADOW_INDEX: u8 = 56;

	/// Palette index written by player outline runs
	pub const PLAYER_OUTLINE_INDEX: u8 = PLAYER_COLOR_OFFSET;

	/// Palette index written by black outline runs
	pub const BLACK_OUTLINE_INDEX: u8 = 0xFF;
}
