//! This crate provides readers for the `.DRS` resource archive and `.SLP` sprite
//! formats.
//!
//! # File Formats
//!
//! - **DRS**: Archives bundling many files, grouped into typed tables
//! - **SLP**: Multi-frame palette-indexed sprites with per-row command streams
//!
//! Both readers work on any `Read + Seek` source. Sprites stored inside an archive
//! are decoded through the archive's entry view, so offsets inside the sprite stay
//! relative to the sprite.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use drs_types::prelude::*;
//!
//! # fn main() -> Result<(), DrsFileError> {
//! let mut drs = DrsFile::open("graphics.drs")?;
//! let sprite = SlpFile::from_reader(drs.open_entry("50500.slp")?)?;
//!
//! for frame in &sprite {
//!     println!("{}×{}", frame.width(), frame.height());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use drs_types::file::{ParseConfig, slp};
//!
//! # fn main() -> Result<(), drs_types::file::DrsFileError> {
//! let data = std::fs::read("50500.slp")?;
//! let sprite = slp::File::from_reader_with_config(
//!     std::io::Cursor::new(data),
//!     &ParseConfig::strict(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use drs_types::prelude::*;` to import commonly used items.
pub mod prelude;
