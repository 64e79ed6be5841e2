#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `drs-rs` reads `.DRS` resource archives and decodes the `.SLP` sprites stored in
//! them.
//!
//! The format support lives in the `drs_types` crate; this crate re-exports it.
//!
//! ```no_run
//! use drs_rs::prelude::*;
//!
//! # fn main() -> Result<(), DrsFileError> {
//! let mut drs = DrsFile::open("graphics.drs")?;
//! let sprite = SlpFile::from_reader(drs.open_entry("50500.slp")?)?;
//! println!("{sprite}");
//! # Ok(())
//! # }
//! ```

pub use drs_types;
pub use drs_types::file::*;

/// `use drs_rs::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use drs_types::prelude::*;
}
