//! In-memory builders for archives and sprites.

/// One table: type tag, extension, files as `(id, content)`.
pub(crate) type TableLayout = (u8, &'static str, Vec<(i32, Vec<u8>)>);

/// Builds an archive with header, table descriptors, entry lists and data in that
/// order.
pub(crate) fn archive(tables: &[TableLayout]) -> Vec<u8> {
	let entry_count: usize = tables.iter().map(|(_, _, files)| files.len()).sum();
	let lists_start = 64 + tables.len() * 12;
	let data_start = lists_start + entry_count * 12;

	let mut data = Vec::new();
	let mut copyright = [0u8; 40];
	copyright[..14].copy_from_slice(b"Copyright 1999");
	data.extend_from_slice(&copyright);
	data.extend_from_slice(b"1.00");
	data.extend_from_slice(b"tribe\0\0\0\0\0\0\0");
	data.extend_from_slice(&(tables.len() as i32).to_le_bytes());
	data.extend_from_slice(&(data_start as i32).to_le_bytes());

	let mut list_offset = lists_start;
	for (file_type, extension, files) in tables {
		data.push(*file_type);
		data.extend(extension.bytes().rev());
		data.extend_from_slice(&(list_offset as i32).to_le_bytes());
		data.extend_from_slice(&(files.len() as i32).to_le_bytes());
		list_offset += files.len() * 12;
	}

	let mut data_offset = data_start;
	for (_, _, files) in tables {
		for (id, content) in files {
			data.extend_from_slice(&id.to_le_bytes());
			data.extend_from_slice(&(data_offset as i32).to_le_bytes());
			data.extend_from_slice(&(content.len() as i32).to_le_bytes());
			data_offset += content.len();
		}
	}

	for (_, _, files) in tables {
		for (_, content) in files {
			data.extend_from_slice(content);
		}
	}

	data
}

/// Builds a sprite of equally sized frames whose rows are all literal copies.
///
/// `frames[f][y]` is the pixel row `y` of frame `f`; every row of every frame must
/// have the same length.
pub(crate) fn literal_sprite(frames: &[Vec<Vec<u8>>], hotspot: (i32, i32)) -> Vec<u8> {
	let streams: Vec<Vec<Vec<u8>>> = frames
		.iter()
		.map(|rows| {
			rows.iter()
				.map(|pixels| {
					let mut stream = Vec::new();
					for chunk in pixels.chunks(63) {
						stream.push((chunk.len() as u8) << 2);
						stream.extend_from_slice(chunk);
					}
					stream.push(0x0F);
					stream
				})
				.collect()
		})
		.collect();

	let mut cursor = 32 + frames.len() * 32;
	let mut tables = Vec::new();
	for rows in &streams {
		let outline = cursor;
		let command = outline + rows.len() * 4;
		cursor = command + rows.len() * 4;
		let mut offsets = Vec::new();
		for stream in rows {
			offsets.push(cursor as u32);
			cursor += stream.len();
		}
		tables.push((outline as u32, command as u32, offsets));
	}

	let mut data = Vec::with_capacity(cursor);
	data.extend_from_slice(b"2.0N");
	data.extend_from_slice(&(frames.len() as i32).to_le_bytes());
	let mut comment = [0u8; 24];
	comment[..4].copy_from_slice(b"test");
	data.extend_from_slice(&comment);

	for (rows, (outline, command, _)) in frames.iter().zip(&tables) {
		let width = rows.first().map_or(0, Vec::len);
		data.extend_from_slice(&command.to_le_bytes());
		data.extend_from_slice(&outline.to_le_bytes());
		data.extend_from_slice(&0u32.to_le_bytes());
		data.extend_from_slice(&0u32.to_le_bytes());
		data.extend_from_slice(&(width as i32).to_le_bytes());
		data.extend_from_slice(&(rows.len() as i32).to_le_bytes());
		data.extend_from_slice(&hotspot.0.to_le_bytes());
		data.extend_from_slice(&hotspot.1.to_le_bytes());
	}

	for (rows, (_, _, offsets)) in streams.iter().zip(&tables) {
		for _ in rows {
			data.extend_from_slice(&0i16.to_le_bytes());
			data.extend_from_slice(&0i16.to_le_bytes());
		}
		for offset in offsets {
			data.extend_from_slice(&offset.to_le_bytes());
		}
		for stream in rows {
			data.extend_from_slice(stream);
		}
	}

	data
}
