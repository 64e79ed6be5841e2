use std::io::Cursor;

use drs_rs::prelude::*;
use log::info;

use crate::builder;

fn sprite_rows(seed: u8, width: usize, height: usize) -> Vec<Vec<u8>> {
	(0..height)
		.map(|y| (0..width).map(|x| seed.wrapping_add((x * 7 + y * 3) as u8)).collect())
		.collect()
}

#[test_log::test]
fn test_sprite_decodes_through_entry_view() {
	let frames = vec![sprite_rows(1, 5, 3), sprite_rows(100, 5, 3)];
	let sprite = builder::literal_sprite(&frames, (2, 3));
	let data = builder::archive(&[
		(b'a', "bin", vec![(1, vec![0xFF; 17])]),
		(b' ', "slp", vec![(50_500, sprite.clone())]),
	]);

	let mut drs = DrsFile::from_bytes(&data).unwrap();
	let entry = drs.open_entry("50500.slp").unwrap();
	assert_eq!(entry.len(), sprite.len() as u64);

	let slp = SlpFile::from_reader(entry).unwrap();
	info!("{}", slp);
	assert_eq!(slp.frame_count(), 2);

	for (frame, rows) in slp.iter().zip(&frames) {
		assert_eq!((frame.width(), frame.height()), (5, 3));
		assert_eq!((frame.hotspot_x(), frame.hotspot_y()), (2, 3));
		assert_eq!(frame.pixels(), rows.concat());
	}

	// same sprite decoded from the extracted bytes
	let extracted = drs.read("50500.slp").unwrap();
	assert_eq!(SlpFile::from_bytes(&extracted).unwrap(), slp);
}

#[test_log::test]
fn test_parallel_entries_with_independent_readers() {
	let sprites: Vec<Vec<u8>> =
		(0..4u8).map(|i| builder::literal_sprite(&[sprite_rows(i, 64, 8)], (0, 0))).collect();
	let files = sprites.iter().enumerate().map(|(id, sprite)| (id as i32, sprite.clone())).collect();
	let data = builder::archive(&[(b' ', "slp", files)]);

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..sprites.len())
			.map(|id| {
				let data = data.as_slice();
				scope.spawn(move || {
					let mut drs = DrsFile::from_reader(Cursor::new(data))?;
					let entry = drs.open_entry(&format!("{id}.slp"))?;
					SlpFile::from_reader(entry)
				})
			})
			.collect();

		for (id, handle) in handles.into_iter().enumerate() {
			let slp = handle.join().unwrap().unwrap();
			assert_eq!(slp.frames()[0].pixels(), sprite_rows(id as u8, 64, 8).concat());
		}
	});
}

#[test]
fn test_corrupt_sprite_in_archive_is_reported() {
	let mut sprite = builder::literal_sprite(&[sprite_rows(0, 4, 2)], (0, 0));
	// break the first row's end-of-row byte into an unknown extended command
	let first_row_end = 32 + 32 + 2 * 8 + 5;
	sprite[first_row_end] = 0x9E;
	let data = builder::archive(&[(b' ', "slp", vec![(7, sprite)])]);

	let mut drs = DrsFile::from_bytes(&data).unwrap();
	let result = SlpFile::from_reader(drs.open_entry("7.slp").unwrap());
	assert!(matches!(
		result,
		Err(DrsFileError::UnknownOpcode {
			opcode: 0x9E,
			..
		})
	));
}
