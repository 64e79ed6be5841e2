//! DRS/SLP CLI Utility
//!
//! A command-line tool for inspecting resource archives and the sprites stored in
//! them.
//!
//! # Features
//!
//! - **list**: List tables and entries of an archive
//! - **extract**: Extract one or all entries into a directory
//! - **slp-info**: Show sprite header and frame descriptors
//! - **slp-export**: Export sprite frames as grayscale palette-index PNGs
//!
//! # Usage Examples
//!
//! ```bash
//! # List the contents of an archive as JSON
//! cargo run --example drs_utils -- list data/graphics.drs --json
//!
//! # Extract every entry
//! cargo run --example drs_utils -- extract data/graphics.drs -o extracted/
//!
//! # Inspect a sprite stored inside an archive
//! cargo run --example drs_utils -- slp-info data/graphics.drs --entry 50500.slp
//!
//! # Export the frames of a standalone sprite
//! cargo run --example drs_utils -- slp-export 50500.slp -o frames/
//! ```

use std::{
	fs,
	io::Cursor,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use drs_rs::prelude::*;
use image::GrayImage;
use log::{info, warn};
use serde::Serialize;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::List(args) => run_list(args),
		Command::Extract(args) => run_extract(args),
		Command::SlpInfo(args) => run_slp_info(args),
		Command::SlpExport(args) => run_slp_export(args),
	}
}

#[derive(Parser)]
#[command(name = "drs_utils")]
#[command(author = "drs-rs project")]
#[command(version)]
#[command(about = "Inspect DRS archives and decode SLP sprites", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// List tables and entries of an archive
	List(ListArgs),
	/// Extract entries from an archive
	Extract(ExtractArgs),
	/// Show sprite header and frames
	SlpInfo(SlpInfoArgs),
	/// Export sprite frames as grayscale PNGs
	SlpExport(SlpExportArgs),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Limits {
	/// Default limits
	#[default]
	Default,
	/// Larger limits for unusual files
	Lenient,
	/// Tight limits for untrusted files
	Strict,
}

impl Limits {
	fn config(self) -> ParseConfig {
		match self {
			Limits::Default => ParseConfig::default(),
			Limits::Lenient => ParseConfig::lenient(),
			Limits::Strict => ParseConfig::strict(),
		}
	}
}

#[derive(Args)]
struct ListArgs {
	/// Archive path
	#[arg(value_name = "DRS")]
	input: PathBuf,

	/// Print JSON instead of a table
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Parse limits
	#[arg(long, value_enum, default_value_t)]
	limits: Limits,
}

#[derive(Args)]
struct ExtractArgs {
	/// Archive path
	#[arg(value_name = "DRS")]
	input: PathBuf,

	/// Entry names to extract; all entries when empty
	#[arg(value_name = "NAMES")]
	names: Vec<String>,

	/// Output directory
	#[arg(short, long, value_name = "OUTPUT_DIR", default_value = "extracted")]
	output: PathBuf,
}

/// Where a sprite comes from: a standalone file, or an entry of an archive.
#[derive(Args)]
struct SpriteSource {
	/// SLP file, or DRS archive when `--entry` is given
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Entry name inside the archive, e.g. `50500.slp`
	#[arg(short, long, value_name = "NAME")]
	entry: Option<String>,

	/// Parse limits
	#[arg(long, value_enum, default_value_t)]
	limits: Limits,
}

#[derive(Args)]
struct SlpInfoArgs {
	#[command(flatten)]
	source: SpriteSource,

	/// Print JSON instead of text
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct SlpExportArgs {
	#[command(flatten)]
	source: SpriteSource,

	/// Output directory
	#[arg(short, long, value_name = "OUTPUT_DIR", default_value = "frames")]
	output: PathBuf,

	/// Palette index written to transparent pixels
	#[arg(long, value_name = "INDEX", default_value_t = 0)]
	background: u8,
}

#[derive(Serialize)]
struct ArchiveListing<'a> {
	header: &'a DrsHeader,
	tables: &'a [DrsTable],
	entries: &'a [DrsEntry],
}

#[derive(Serialize)]
struct SpriteInfo<'a> {
	header: &'a SlpHeader,
	frames: Vec<&'a SlpFrameHeader>,
}

fn open_archive(path: &Path, config: &ParseConfig) -> Result<DrsFile<Cursor<Vec<u8>>>> {
	let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	DrsFile::from_reader_with_config(Cursor::new(data), config)
		.with_context(|| format!("Failed to parse archive {}", path.display()))
}

fn load_sprite(source: &SpriteSource, config: &ParseConfig) -> Result<SlpFile> {
	match &source.entry {
		Some(name) => {
			let mut drs = open_archive(&source.input, config)?;
			let entry = drs.open_entry(name).with_context(|| {
				format!("Entry {} not found in {}", name, source.input.display())
			})?;
			SlpFile::from_reader_with_config(entry, config)
				.with_context(|| format!("Failed to decode {name}"))
		}
		None => {
			let data = fs::read(&source.input)
				.with_context(|| format!("Failed to read {}", source.input.display()))?;
			SlpFile::from_reader_with_config(Cursor::new(data), config)
				.with_context(|| format!("Failed to decode {}", source.input.display()))
		}
	}
}

fn run_list(args: ListArgs) -> Result<()> {
	let drs = open_archive(&args.input, &args.limits.config())?;

	if args.json {
		let listing = ArchiveListing {
			header: drs.header(),
			tables: drs.tables(),
			entries: drs.entries(),
		};
		println!("{}", serde_json::to_string_pretty(&listing)?);
		return Ok(());
	}

	println!("{}", drs.header());
	for table in drs.tables() {
		println!("  {table}");
	}
	println!();
	println!("{:<16} {:>10} {:>10}", "NAME", "OFFSET", "LENGTH");
	for entry in drs.iter() {
		println!("{:<16} {:>#10X} {:>10}", entry.name(), entry.offset, entry.length);
	}
	println!("{} entries", drs.entry_count());

	Ok(())
}

fn run_extract(args: ExtractArgs) -> Result<()> {
	let mut drs = open_archive(&args.input, &ParseConfig::default())?;
	fs::create_dir_all(&args.output)
		.with_context(|| format!("Failed to create {}", args.output.display()))?;

	let names: Vec<String> = if args.names.is_empty() {
		drs.iter().map(DrsEntry::name).collect()
	} else {
		args.names
	};

	for name in &names {
		let data = drs.read(name).with_context(|| format!("Failed to read {name}"))?;
		let path = args.output.join(name);
		fs::write(&path, &data).with_context(|| format!("Failed to write {}", path.display()))?;
		info!("{name}: {} bytes", data.len());
	}

	info!("Extracted {} entries to {}", names.len(), args.output.display());
	Ok(())
}

fn run_slp_info(args: SlpInfoArgs) -> Result<()> {
	let slp = load_sprite(&args.source, &args.source.limits.config())?;

	if args.json {
		let info = SpriteInfo {
			header: slp.header(),
			frames: slp.iter().map(SlpFrame::header).collect(),
		};
		println!("{}", serde_json::to_string_pretty(&info)?);
		return Ok(());
	}

	println!("{}", slp.header());
	for (index, frame) in slp.iter().enumerate() {
		let transparent = frame.rows().iter().filter(|row| row.is_transparent()).count();
		println!(
			"  [{index:3}] {frame}, properties 0x{:08X}, {transparent} transparent rows",
			frame.header().properties
		);
	}

	Ok(())
}

fn run_slp_export(args: SlpExportArgs) -> Result<()> {
	let config = args.source.limits.config().with_background(args.background);
	let slp = load_sprite(&args.source, &config)?;
	fs::create_dir_all(&args.output)
		.with_context(|| format!("Failed to create {}", args.output.display()))?;

	let mut written = 0usize;
	for (index, frame) in slp.iter().enumerate() {
		if frame.pixel_count() == 0 {
			warn!("Frame {index} is empty, skipping");
			continue;
		}

		let Some(img) = GrayImage::from_raw(frame.width(), frame.height(), frame.pixels()) else {
			bail!("Frame {index} has an inconsistent pixel buffer");
		};
		let path = args.output.join(format!("frame_{index:03}.png"));
		img.save(&path).with_context(|| format!("Failed to save {}", path.display()))?;
		written += 1;
	}

	info!("Exported {written} frames to {}", args.output.display());
	Ok(())
}
