#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use wavefmt::config::{ParseOptions, ParsingMode};

fuzz_target!(|data: Vec<u8>| {
	let _ = wavefmt::read_from(
		&mut Cursor::new(data),
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	);
});
