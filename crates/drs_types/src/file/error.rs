//! Error types for archive and sprite parsing.

use std::fmt;

use thiserror::Error;

/// File format an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
	/// `.DRS` resource archive
	Drs,
	/// `.SLP` sprite
	Slp,
}

impl fmt::Display for FileType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FileType::Drs => write!(f, "DRS"),
			FileType::Slp => write!(f, "SLP"),
		}
	}
}

/// Errors that can occur while reading DRS archives or decoding SLP sprites.
///
/// Every variant is terminal for the decode in progress.
#[derive(Debug, Error)]
pub enum DrsFileError {
	/// Header field does not hold the value the format requires
	#[error("{file_type}: malformed header: {message}")]
	MalformedHeader {
		/// Format being parsed
		file_type: FileType,
		/// What was wrong
		message: String,
	},

	/// A structure did not start at the offset recorded for it
	#[error(
		"{file_type}: offset mismatch at {context}: expected 0x{expected:08X}, stream is at 0x{actual:08X}"
	)]
	OffsetMismatch {
		/// Format being parsed
		file_type: FileType,
		/// Which structure was being located
		context: String,
		/// Offset recorded in the file
		expected: u64,
		/// Actual stream position
		actual: u64,
	},

	/// Read past the end of the source
	#[error("{file_type}: truncated data at offset 0x{offset:08X}: {needed} more bytes required")]
	Truncated {
		/// Format being parsed
		file_type: FileType,
		/// Offset where the read started
		offset: u64,
		/// Number of bytes the read required
		needed: u64,
	},

	/// Extended draw command byte outside the known table
	#[error("SLP: unknown extended opcode 0x{opcode:02X} at offset 0x{offset:08X}")]
	UnknownOpcode {
		/// The opcode byte
		opcode: u8,
		/// Offset of the opcode byte
		offset: u64,
	},

	/// Decoded pixel count disagrees with the frame width and row edges
	#[error(
		"SLP: row length mismatch in frame {frame}, row {row}: left {left} + written {written} + right {right} != width {width}"
	)]
	RowLengthMismatch {
		/// Frame index
		frame: usize,
		/// Row index within the frame
		row: usize,
		/// Left edge value
		left: i32,
		/// Pixels produced (or requested) by draw commands
		written: usize,
		/// Right edge value
		right: i32,
		/// Frame width
		width: usize,
	},

	/// Archive lookup by an unknown name
	#[error("DRS: entry not found: {name}")]
	NotFound {
		/// Requested logical name
		name: String,
	},

	/// A count or dimension exceeds the configured parse limits
	#[error("{file_type}: {what} {value} exceeds limit {limit}")]
	LimitExceeded {
		/// Format being parsed
		file_type: FileType,
		/// Which quantity was too large
		what: &'static str,
		/// Value found in the file
		value: u64,
		/// Configured limit
		limit: u64,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl DrsFileError {
	/// Creates a `MalformedHeader` error
	pub fn malformed_header(file_type: FileType, message: impl Into<String>) -> Self {
		Self::MalformedHeader {
			file_type,
			message: message.into(),
		}
	}

	/// Creates an `OffsetMismatch` error
	pub fn offset_mismatch(
		file_type: FileType,
		context: impl Into<String>,
		expected: u64,
		actual: u64,
	) -> Self {
		Self::OffsetMismatch {
			file_type,
			context: context.into(),
			expected,
			actual,
		}
	}

	/// Creates a `Truncated` error
	pub fn truncated(file_type: FileType, offset: u64, needed: u64) -> Self {
		Self::Truncated {
			file_type,
			offset,
			needed,
		}
	}

	/// Creates a `NotFound` error
	pub fn not_found(name: impl Into<String>) -> Self {
		Self::NotFound {
			name: name.into(),
		}
	}

	/// Creates a `LimitExceeded` error
	pub fn limit_exceeded(file_type: FileType, what: &'static str, value: u64, limit: u64) -> Self {
		Self::LimitExceeded {
			file_type,
			what,
			value,
			limit,
		}
	}
}
