#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use wavefmt::config::ParseOptions;

fuzz_target!(|data: Vec<u8>| {
	let _ = wavefmt::read_header(&mut Cursor::new(data), ParseOptions::new());
});
