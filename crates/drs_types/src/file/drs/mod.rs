//! `.DRS` resource archive support.
//!
//! A DRS archive bundles many files, grouped into tables by file type. Files are
//! addressed by a numeric identifier that is unique within its table; the logical
//! name of a file is `"{id}.{extension}"`.
//!
//! # File Structure
//!
//! All integers are little-endian.
//!
//! | Offset | Size | Field               | Description                                  |
//! |--------|------|---------------------|----------------------------------------------|
//! | 0x00   | 40   | `copyright`         | Copyright text, padded                       |
//! | 0x28   | 4    | `version`           | Version tag, e.g. `1.00`                     |
//! | 0x2C   | 12   | `archive_type`      | Must be `tribe` followed by NUL padding      |
//! | 0x38   | 4    | `table_count`       | Number of table descriptors                  |
//! | 0x3C   | 4    | `first_file_offset` | Offset of the first file's data              |
//!
//! The header is followed by `table_count` table descriptors (12 bytes each):
//!
//! | Size | Field        | Description                                   |
//! |------|--------------|-----------------------------------------------|
//! | 1    | `file_type`  | Type tag                                      |
//! | 3    | `extension`  | Extension, stored reversed (`pls` for `slp`)  |
//! | 4    | `offset`     | Absolute offset of the table's entry list     |
//! | 4    | `file_count` | Number of entries                             |
//!
//! Then the entry lists of all tables (12 bytes per entry: `id`, `offset`,
//! `length`), then the file data. Headers and entry lists never interleave with
//! data.
//!
//! # Examples
//!
//! ```no_run
//! use drs_types::file::drs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut drs = File::open("graphics.drs")?;
//!
//! for entry in drs.iter() {
//!     println!("{}: {} bytes", entry.name(), entry.length);
//! }
//!
//! let data = drs.read("50500.slp")?;
//! println!("read {} bytes", data.len());
//! # Ok(())
//! # }
//! ```

mod entry;
mod entry_reader;
mod file;
mod header;
mod iterator;


pub use entry::Entry;
pub use entry_reader::EntryReader;
pub use file::File;
pub use header::{Header, Table};
pub use iterator::EntryDataIter;

/// DRS file constants.
pub mod constants {
	/// Size of the copyright field
	pub const COPYRIGHT_SIZE: usize = 40;

	/// Size of the version field
	pub const VERSION_SIZE: usize = 4;

	/// Size of the archive type field
	pub const ARCHIVE_TYPE_SIZE: usize = 12;

	/// Archive type every resource archive carries
	pub const ARCHIVE_TYPE: [u8; ARCHIVE_TYPE_SIZE] = *b"tribe\0\0\0\0\0\0\0";

	/// Size of the file header
	pub const HEADER_SIZE: usize = COPYRIGHT_SIZE + VERSION_SIZE + ARCHIVE_TYPE_SIZE + 8;

	/// Size of a table descriptor
	pub const TABLE_SIZE: usize = 12;

	/// Size of an entry record
	pub const ENTRY_SIZE: usize = 12;
}
