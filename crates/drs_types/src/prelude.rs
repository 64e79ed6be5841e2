//! Prelude module for `drs_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```no_run
//! use drs_types::prelude::*;
//!
//! # fn main() -> Result<(), DrsFileError> {
//! let drs = DrsFile::open("interfac.drs")?;
//! println!("{} entries", drs.entry_count());
//! # Ok(())
//! # }
//! ```

#[doc(inline)]
pub use crate::file::{
	// Common
	DrsFileError,
	FileType,
	ParseConfig,

	// DRS types
	DrsEntry,
	DrsEntryReader,
	DrsFile,
	DrsHeader,
	DrsTable,

	// SLP types
	SlpFile,
	SlpFrame,
	SlpFrameHeader,
	SlpHeader,
	SlpRenderHints,
	SlpRow,
};
