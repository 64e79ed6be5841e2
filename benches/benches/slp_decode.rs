//! Benchmark suite for SLP sprite decoding and DRS archive access
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use drs_benches::{generate_test_drs_data, generate_test_slp_data};
use drs_types::file::{DrsFile, SlpFile};
use std::{hint::black_box, io::Cursor};

/// Benchmark full sprite decoding at several frame sizes
fn bench_slp_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("slp_decode");

	for (width, height) in [(32, 32), (128, 128), (640, 480)] {
		let data = generate_test_slp_data(4, width, height);
		group.throughput(Throughput::Elements((4 * width * height) as u64));
		group.bench_with_input(
			BenchmarkId::new("decode", format!("{width}x{height}")),
			&data,
			|b, data| {
				b.iter(|| {
					let result = SlpFile::from_reader(Cursor::new(black_box(data.as_slice())));
					black_box(result)
				});
			},
		);
	}

	group.finish();
}

/// Benchmark flattening decoded frames into pixel buffers
fn bench_frame_pixels(c: &mut Criterion) {
	let mut group = c.benchmark_group("slp_pixels");

	let data = generate_test_slp_data(1, 640, 480);
	let Ok(slp) = SlpFile::from_bytes(&data) else {
		eprintln!("Warning: generated sprite failed to decode");
		return;
	};

	group.throughput(Throughput::Elements(640 * 480));
	group.bench_function("flatten", |b| {
		b.iter(|| {
			for frame in black_box(&slp) {
				black_box(frame.pixels());
			}
		});
	});

	group.finish();
}

/// Benchmark archive index parsing and entry lookup
fn bench_drs_index(c: &mut Criterion) {
	let mut group = c.benchmark_group("drs_index");

	for entries in [16, 1024, 16384] {
		let data = generate_test_drs_data(entries, 64);
		group.throughput(Throughput::Elements(entries as u64));
		group.bench_with_input(BenchmarkId::new("parse", entries), &data, |b, data| {
			b.iter(|| black_box(DrsFile::from_bytes(black_box(data.as_slice()))));
		});
	}

	let data = generate_test_drs_data(1024, 64);
	if let Ok(mut drs) = DrsFile::from_bytes(&data) {
		group.bench_function("read_entry", |b| {
			b.iter(|| black_box(drs.read(black_box("512.slp"))));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_slp_decode, bench_frame_pixels, bench_drs_index);

criterion_main!(benches);
