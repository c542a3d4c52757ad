use std::fs::File;
use std::io::BufReader;

/// Builds a RIFF/WAVE prefix with the given `fmt ` chunk fields, and `extension` appended to its body
pub fn wav_prefix(fields: (i16, i16, i32, i32, i16, i16), extension: &[u8]) -> Vec<u8> {
	let (format_tag, channels, sample_rate, byte_rate, block_align, bits_per_sample) = fields;

	let mut fmt_body = Vec::new();
	fmt_body.extend(format_tag.to_le_bytes());
	fmt_body.extend(channels.to_le_bytes());
	fmt_body.extend(sample_rate.to_le_bytes());
	fmt_body.extend(byte_rate.to_le_bytes());
	fmt_body.extend(block_align.to_le_bytes());
	fmt_body.extend(bits_per_sample.to_le_bytes());
	fmt_body.extend_from_slice(extension);

	with_fmt_body(*b"RIFF", *b"WAVE", *b"fmt ", fmt_body.len() as i32, &fmt_body)
}

/// Builds a RIFF/WAVE prefix with arbitrary identifiers and a raw `fmt ` chunk
pub fn with_fmt_body(
	riff: [u8; 4],
	form_type: [u8; 4],
	fmt_id: [u8; 4],
	declared_size: i32,
	fmt_body: &[u8],
) -> Vec<u8> {
	let mut bytes = Vec::new();
	bytes.extend(riff);
	bytes.extend((4 + 8 + fmt_body.len() as i32).to_le_bytes());
	bytes.extend(form_type);
	bytes.extend(fmt_id);
	bytes.extend(declared_size.to_le_bytes());
	bytes.extend_from_slice(fmt_body);
	bytes
}

pub fn open(path: &str) -> BufReader<File> {
	BufReader::new(File::open(path).unwrap())
}
