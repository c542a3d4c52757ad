#![allow(missing_docs)]

use wavefmt::config::{ParseOptions, ParsingMode};

use std::io::Cursor;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

const ASSETS: [&str; 4] = [
	"minimal.wav",
	"mono_8bit.wav",
	"ima_adpcm.wav",
	"extensible.wav",
];

#[allow(clippy::missing_panics_doc)]
pub fn get_reader(path: &str) -> Cursor<Vec<u8>> {
	let path = Path::new("tests/files/assets").join(path);

	let b = std::fs::read(path).unwrap();
	Cursor::new(b)
}

fn parse_all_modes(data: &[u8]) {
	for mode in [ParsingMode::Relaxed, ParsingMode::Strict] {
		let _ = wavefmt::read_header(
			&mut Cursor::new(data),
			ParseOptions::new().parsing_mode(mode),
		);
	}
}

// Every byte of the header replaced by a handful of interesting values
#[test]
fn byte_mutations() {
	for asset in ASSETS {
		let original = get_reader(asset).into_inner();
		let header_len = original.len().min(64);

		for pos in 0..header_len {
			for value in [0x00, 0x01, 0x0F, 0x10, 0x7F, 0x80, 0xFE, 0xFF] {
				let mut data = original.clone();
				data[pos] = value;
				parse_all_modes(&data);
			}
		}
	}
}

#[test]
fn truncations() {
	for asset in ASSETS {
		let original = get_reader(asset).into_inner();
		for len in 0..original.len() {
			parse_all_modes(&original[..len]);
		}
	}
}

// A huge declared size must not be allocated up front
#[test]
fn oom1() {
	let instant = Instant::now();
	let thread = thread::spawn(|| {
		let mut data = get_reader("minimal.wav").into_inner();
		data[16..20].copy_from_slice(&i32::MAX.to_le_bytes());

		wavefmt::read_from(&mut Cursor::new(data), ParseOptions::new())
			.map(|_| ())
			.map_err(|e| e.to_string())
	});

	let result = thread.join().unwrap();
	assert!(result.is_err());
	assert!(instant.elapsed() < Duration::from_secs(5));
}
