//! Benchmark helper utilities for drs-rs
//!
//! This module generates synthetic SLP sprites and DRS archives so the benchmark
//! suite runs without game data.

/// Size of an SLP file header
const SLP_HEADER_SIZE: usize = 32;

/// Size of an SLP frame descriptor
const SLP_FRAME_HEADER_SIZE: usize = 32;

/// Encodes one row of a synthetic frame.
///
/// Rows mix the common command kinds: a literal run, a fill, a shadow run, a skip
/// and a player color run, repeated until the row is full.
fn encode_row(width: usize, y: usize) -> (i16, i16, Vec<u8>) {
	let left = (y % 4).min(width);
	let right = (y % 3).min(width - left);
	let mut remaining = width - left - right;
	let mut stream = Vec::new();
	let mut step = 0usize;

	while remaining > 0 {
		match step % 5 {
			0 => {
				let len = remaining.min(12);
				stream.push((len as u8) << 2);
				stream.extend((0..len).map(|x| (x + y) as u8));
				remaining -= len;
			}
			1 => {
				let len = remaining.min(15);
				stream.push(((len as u8) << 4) | 0x07);
				stream.push(0x40 + (y % 16) as u8);
				remaining -= len;
			}
			2 => {
				let len = remaining.min(4);
				stream.push(((len as u8) << 4) | 0x0B);
				remaining -= len;
			}
			3 => {
				let len = remaining.min(8);
				stream.push(((len as u8) << 2) | 0x01);
				remaining -= len;
			}
			_ => {
				let len = remaining.min(6);
				stream.push(((len as u8) << 4) | 0x06);
				stream.push((y % 8) as u8);
				remaining -= len;
			}
		}
		step += 1;
	}
	stream.push(0x0F);

	(left as i16, right as i16, stream)
}

/// Generates a valid SLP sprite with `frames` frames of `width × height` pixels.
pub fn generate_test_slp_data(frames: usize, width: usize, height: usize) -> Vec<u8> {
	let rows: Vec<_> = (0..height).map(|y| encode_row(width, y)).collect();
	let streams_len: usize = rows.iter().map(|(_, _, stream)| stream.len()).sum();
	let frame_len = height * 8 + streams_len;
	let data_start = SLP_HEADER_SIZE + frames * SLP_FRAME_HEADER_SIZE;

	let mut data = Vec::with_capacity(data_start + frames * frame_len);
	data.extend_from_slice(b"2.0N");
	data.extend_from_slice(&(frames as i32).to_le_bytes());
	data.extend_from_slice(&[0u8; 24]);

	for index in 0..frames {
		let outline_table_offset = data_start + index * frame_len;
		let command_table_offset = outline_table_offset + height * 4;
		data.extend_from_slice(&(command_table_offset as u32).to_le_bytes());
		data.extend_from_slice(&(outline_table_offset as u32).to_le_bytes());
		data.extend_from_slice(&0u32.to_le_bytes());
		data.extend_from_slice(&0u32.to_le_bytes());
		data.extend_from_slice(&(width as i32).to_le_bytes());
		data.extend_from_slice(&(height as i32).to_le_bytes());
		data.extend_from_slice(&((width / 2) as i32).to_le_bytes());
		data.extend_from_slice(&(height as i32).to_le_bytes());
	}

	for index in 0..frames {
		for (left, right, _) in &rows {
			data.extend_from_slice(&left.to_le_bytes());
			data.extend_from_slice(&right.to_le_bytes());
		}
		let mut offset = data_start + index * frame_len + height * 8;
		for (_, _, stream) in &rows {
			data.extend_from_slice(&(offset as u32).to_le_bytes());
			offset += stream.len();
		}
		for (_, _, stream) in &rows {
			data.extend_from_slice(stream);
		}
	}

	data
}

/// Generates a DRS archive holding `entries` files of `entry_size` bytes in one
/// `slp` table.
pub fn generate_test_drs_data(entries: usize, entry_size: usize) -> Vec<u8> {
	let lists_start = 64 + 12;
	let data_start = lists_start + entries * 12;

	let mut data = Vec::with_capacity(data_start + entries * entry_size);
	data.extend_from_slice(&[0u8; 40]);
	data.extend_from_slice(b"1.00");
	data.extend_from_slice(b"tribe\0\0\0\0\0\0\0");
	data.extend_from_slice(&1i32.to_le_bytes());
	data.extend_from_slice(&(data_start as i32).to_le_bytes());

	data.push(b' ');
	data.extend_from_slice(b"pls");
	data.extend_from_slice(&(lists_start as i32).to_le_bytes());
	data.extend_from_slice(&(entries as i32).to_le_bytes());

	for id in 0..entries {
		data.extend_from_slice(&(id as i32).to_le_bytes());
		data.extend_from_slice(&((data_start + id * entry_size) as i32).to_le_bytes());
		data.extend_from_slice(&(entry_size as i32).to_le_bytes());
	}

	for id in 0..entries {
		data.extend(std::iter::repeat_n(id as u8, entry_size));
	}

	data
}

#[cfg(test)]
mod tests {
	use super::*;
	use drs_types::file::{DrsFile, SlpFile};

	#[test]
	fn test_generated_slp_decodes() {
		let data = generate_test_slp_data(3, 64, 32);
		let slp = SlpFile::from_bytes(&data).unwrap();
		assert_eq!(slp.frame_count(), 3);
		assert_eq!(slp.frames()[2].pixels().len(), 64 * 32);
	}

	#[test]
	fn test_generated_drs_reads() {
		let data = generate_test_drs_data(10, 100);
		let mut drs = DrsFile::from_bytes(&data).unwrap();
		assert_eq!(drs.entry_count(), 10);
		assert_eq!(drs.read("9.slp").unwrap(), vec![9u8; 100]);
	}
}
