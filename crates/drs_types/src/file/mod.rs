//! File format support for `drs-rs`.

mod error;
mod parse_config;

pub mod drs;
pub mod reader;
pub mod slp;

// Re-export unified error type
pub use error::{DrsFileError, FileType};
pub use parse_config::ParseConfig;
pub use reader::ByteReader;

// Re-export main file types
pub use drs::{
	Entry as DrsEntry, EntryReader as DrsEntryReader, File as DrsFile, Header as DrsHeader,
	Table as DrsTable,
};
pub use slp::{
	File as SlpFile, Frame as SlpFrame, FrameHeader as SlpFrameHeader, Header as SlpHeader,
	RenderHints as SlpRenderHints, Row as SlpRow,
};
