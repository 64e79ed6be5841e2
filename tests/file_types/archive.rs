use drs_rs::prelude::*;
use log::info;

use crate::builder;

fn interface_archive() -> Vec<u8> {
	builder::archive(&[
		(b'a', "bin", vec![(50_500, b"JASC-PAL".to_vec()), (50_501, vec![1, 2, 3])]),
		(b' ', "slp", vec![(50_100, vec![0xAB; 300]), (50_101, Vec::new())]),
		(b' ', "wav", vec![(50_300, b"RIFF....WAVE".to_vec())]),
	])
}

#[test_log::test]
fn test_listing_and_reading() {
	let data = interface_archive();
	let mut drs = DrsFile::from_bytes(&data).unwrap();
	info!("{}", drs);

	let names: Vec<String> = drs.iter().map(DrsEntry::name).collect();
	assert_eq!(names, ["50500.bin", "50501.bin", "50100.slp", "50101.slp", "50300.wav"]);

	assert_eq!(drs.read("50500.bin").unwrap(), b"JASC-PAL");
	assert_eq!(drs.read("50100.slp").unwrap(), vec![0xAB; 300]);
	assert!(drs.read("50101.slp").unwrap().is_empty());
	assert!(matches!(drs.read("50102.slp"), Err(DrsFileError::NotFound { .. })));
}

#[test_log::test]
fn test_extract_to_directory() {
	let data = interface_archive();
	let mut drs = DrsFile::from_bytes(&data).unwrap();
	let out = std::env::temp_dir().join(format!("drs-rs-extract-{}", std::process::id()));
	std::fs::create_dir_all(&out).unwrap();

	for result in drs.iter_data() {
		let (entry, bytes) = result.unwrap();
		std::fs::write(out.join(entry.name()), &bytes).unwrap();
	}

	assert_eq!(std::fs::read(out.join("50300.wav")).unwrap(), b"RIFF....WAVE");
	assert_eq!(std::fs::read_dir(&out).unwrap().count(), 5);
	std::fs::remove_dir_all(&out).unwrap();
}

#[test]
fn test_open_from_path() {
	let data = interface_archive();
	let path = std::env::temp_dir().join(format!("drs-rs-open-{}.drs", std::process::id()));
	std::fs::write(&path, &data).unwrap();

	let mut drs = DrsFile::open(&path).unwrap();
	assert_eq!(drs.entry_count(), 5);
	assert_eq!(drs.read("50501.bin").unwrap(), [1, 2, 3]);

	std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_lenient_and_strict_limits() {
	let files: Vec<(i32, Vec<u8>)> = (0..20).map(|id| (id, vec![id as u8])).collect();
	let data = builder::archive(&[(b' ', "slp", files)]);

	let strict = ParseConfig::new(16, 16, 512, 1024, 1 << 20);
	assert!(matches!(
		DrsFile::from_reader_with_config(std::io::Cursor::new(&data), &strict),
		Err(DrsFileError::LimitExceeded { .. })
	));

	let drs = DrsFile::from_reader_with_config(std::io::Cursor::new(&data), &ParseConfig::lenient())
		.unwrap();
	assert_eq!(drs.entry_count(), 20);
}
