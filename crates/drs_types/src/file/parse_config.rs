//! Parse limits shared by the archive reader and the sprite decoder.
//!
//! Counts and dimensions come straight from file headers, so a corrupt header can
//! ask for billions of tables, frames or pixels. These limits reject such values
//! with [`DrsFileError::LimitExceeded`](super::DrsFileError::LimitExceeded) before
//! anything is allocated.

/// Configuration for parsing archives and sprites.
///
/// # Presets
///
/// - `default()`: limits that comfortably cover shipped game data
/// - `lenient()`: higher limits for modded or unusual files
/// - `strict()`: tight limits for untrusted input
///
/// # Examples
///
/// ```
/// use drs_types::file::ParseConfig;
///
/// let config = ParseConfig::default();
/// assert_eq!(config.background, 0);
///
/// let config = ParseConfig::strict().with_background(0xFF);
/// assert_eq!(config.background, 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
	/// Maximum number of tables in an archive
	pub max_tables: u32,
	/// Maximum number of entries in one archive table
	pub max_entries_per_table: u32,
	/// Maximum number of frames in a sprite
	pub max_frames: u32,
	/// Maximum width or height of a sprite frame
	pub max_frame_dimension: u32,
	/// Maximum pixel count (width × height) of a sprite frame
	pub max_frame_pixels: u64,
	/// Palette index written to pixels no draw command touches
	pub background: u8,
}

impl Default for ParseConfig {
	fn default() -> Self {
		Self {
			max_tables: 64,
			max_entries_per_table: 65_536,
			max_frames: 4_096,
			max_frame_dimension: 4_096,
			max_frame_pixels: 4_194_304,
			background: 0,
		}
	}
}

impl ParseConfig {
	/// Create a configuration with custom limits and a zero background.
	pub fn new(
		max_tables: u32,
		max_entries_per_table: u32,
		max_frames: u32,
		max_frame_dimension: u32,
		max_frame_pixels: u64,
	) -> Self {
		Self {
			max_tables,
			max_entries_per_table,
			max_frames,
			max_frame_dimension,
			max_frame_pixels,
			background: 0,
		}
	}

	/// Create a lenient configuration with higher limits.
	pub fn lenient() -> Self {
		Self {
			max_tables: 1_024,
			max_entries_per_table: 1_048_576,
			max_frames: 65_536,
			max_frame_dimension: 32_768,
			max_frame_pixels: 268_435_456,
			background: 0,
		}
	}

	/// Create a strict configuration with lower limits.
	pub fn strict() -> Self {
		Self {
			max_tables: 16,
			max_entries_per_table: 8_192,
			max_frames: 512,
			max_frame_dimension: 1_024,
			max_frame_pixels: 262_144,
			background: 0,
		}
	}

	/// Returns a copy using `background` as the fill value for untouched pixels.
	pub fn with_background(mut self, background: u8) -> Self {
		self.background = background;
		self
	}
}
