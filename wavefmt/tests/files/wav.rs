use crate::util::{open, wav_prefix, with_fmt_body};

use wavefmt::FormatInfo;
use wavefmt::chunk::FourCC;
use wavefmt::config::{ParseOptions, ParsingMode};
use wavefmt::error::ErrorKind;

use std::io::{Cursor, Read};

fn strict() -> ParseOptions {
	ParseOptions::new().parsing_mode(ParsingMode::Strict)
}

#[test_log::test]
fn read_minimal() {
	let info = wavefmt::read_from_path("tests/files/assets/minimal.wav", ParseOptions::new()).unwrap();
	assert_eq!(info, FormatInfo::new(1, 2, 44100, 1_411_200));
	assert!(info.is_pcm());
}

#[test_log::test]
fn read_mono_8bit() {
	// The bitrate follows the byte rate, not the sample depth
	let info = wavefmt::read_from_path("tests/files/assets/mono_8bit.wav", strict()).unwrap();
	assert_eq!(info, FormatInfo::new(1, 1, 8000, 64000));
}

#[test_log::test]
fn read_ima_adpcm() {
	let mut reader = open("tests/files/assets/ima_adpcm.wav");
	let header = wavefmt::read_header(&mut reader, strict()).unwrap();

	assert_eq!(header.fmt_header().size, 20);
	assert_eq!(header.fmt().extension_len(), 4);
	assert_eq!(header.fmt().bits_per_sample(), 4);
	assert_eq!(header.len(), 40);

	// The reader should be right at the "data" chunk
	let mut next = [0; 4];
	reader.read_exact(&mut next).unwrap();
	assert_eq!(&next, b"data");
}

#[test_log::test]
fn read_extensible() {
	let mut reader = open("tests/files/assets/extensible.wav");
	let header = wavefmt::read_header(&mut reader, strict()).unwrap();

	assert_eq!(header.riff().fourcc, FourCC::RIFF);
	assert_eq!(header.form_type(), FourCC::WAVE);
	assert_eq!(header.fmt_header().fourcc, FourCC::FMT);
	assert_eq!(header.fmt().extension_len(), 24);
	assert_eq!(header.fmt().block_align(), 18);

	let info = FormatInfo::try_from(*header.fmt()).unwrap();
	// 0xFFFE, decoded as signed
	assert_eq!(info.format_code(), -2);
	assert_eq!(info.channels(), 6);
	assert_eq!(info.sample_rate(), 48000);
	assert_eq!(info.bitrate(), 864_000 * 8);
	assert!(!info.is_pcm());
}

#[test_log::test]
fn round_trip() {
	let bytes = wav_prefix((1, 2, 44100, 176_400, 4, 16), &[]);
	let info = wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).unwrap();

	assert_eq!(info.format_code(), 1);
	assert_eq!(info.channels(), 2);
	assert_eq!(info.sample_rate(), 44100);
	assert_eq!(info.bitrate(), 1_411_200);
}

#[test_log::test]
fn consumes_exactly_declared_size() {
	for k in [0_usize, 1, 2, 7, 22, 300] {
		let extension = vec![0x5A; k];
		let mut bytes = wav_prefix((2, 1, 11025, 5644, 256, 4), &extension);
		bytes.extend(b"data");

		let mut cursor = Cursor::new(bytes);
		let header = wavefmt::read_header(&mut cursor, ParseOptions::new()).unwrap();

		let expected = (8 + 4 + 8 + 16 + k) as u64;
		assert_eq!(cursor.position(), expected);
		assert_eq!(header.len(), expected);
		assert_eq!(header.fmt().extension_len() as usize, k);
	}
}

#[test_log::test]
fn format_chunk_too_small() {
	for size in [i32::MIN, -1, 0, 8, 15] {
		let bytes = with_fmt_body(*b"RIFF", *b"WAVE", *b"fmt ", size, &[0; 16]);
		let err = wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).unwrap_err();

		assert!(
			matches!(err.kind(), ErrorKind::InvalidFormatChunk(s) if *s == size),
			"size {size}: {err:?}"
		);
	}
}

#[test_log::test]
fn truncated() {
	let bytes = wav_prefix((1, 2, 44100, 176_400, 4, 16), &[1, 2, 3, 4]);

	// Every proper prefix is missing something
	for len in 0..bytes.len() {
		let err = wavefmt::read_from(&mut &bytes[..len], ParseOptions::new()).unwrap_err();
		assert!(
			matches!(err.kind(), ErrorKind::TruncatedInput),
			"length {len}: {err:?}"
		);
	}

	assert!(wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).is_ok());
}

#[test_log::test]
fn declared_size_past_end() {
	let bytes = with_fmt_body(*b"RIFF", *b"WAVE", *b"fmt ", 4096, &[0; 40]);
	let err = wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).unwrap_err();

	assert!(matches!(err.kind(), ErrorKind::TruncatedInput));
}

#[test_log::test]
fn unexpected_identifiers() {
	let mut body = wav_prefix((1, 2, 44100, 176_400, 4, 16), &[]);
	body.drain(..20);

	let bytes = with_fmt_body(*b"RIFX", *b"AVI ", *b"junk", 16, &body);

	// Relaxed parsing never looks at the identifiers
	let info = wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).unwrap();
	assert_eq!(info, FormatInfo::new(1, 2, 44100, 1_411_200));

	let err = wavefmt::read_from(&mut &bytes[..], strict()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::FileDecoding(_)));

	for (riff, form_type, fmt_id) in [
		(*b"RIFX", *b"WAVE", *b"fmt "),
		(*b"RIFF", *b"AVI ", *b"fmt "),
		(*b"RIFF", *b"WAVE", *b"LIST"),
	] {
		let bytes = with_fmt_body(riff, form_type, fmt_id, 16, &body);
		assert!(wavefmt::read_from(&mut &bytes[..], strict()).is_err());
		assert!(wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).is_ok());
	}
}

#[test_log::test]
fn non_ascii_identifier() {
	let mut body = wav_prefix((1, 2, 44100, 176_400, 4, 16), &[]);
	body.drain(..20);

	let bytes = with_fmt_body(*b"RIFF", [b'W', 0xC1, b'V', b'E'], *b"fmt ", 16, &body);
	let err = wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).unwrap_err();

	assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));
}

#[test_log::test]
fn invalid_format_fields() {
	for fields in [(1, 0, 44100, 176_400, 4, 16), (1, 2, 0, 0, 4, 16), (1, 2, -8000, 0, 4, 16)] {
		let bytes = wav_prefix(fields, &[]);

		let err = wavefmt::read_from(&mut &bytes[..], strict()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::FileDecoding(_)));

		// Values are passed through untouched otherwise
		let info = wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).unwrap();
		assert_eq!(info.channels(), fields.1);
		assert_eq!(info.sample_rate(), fields.2);
	}
}

#[test_log::test]
fn negative_channel_count() {
	let bytes = wav_prefix((1, -3, 44100, 176_400, 4, 16), &[]);

	let err = wavefmt::read_from(&mut &bytes[..], strict()).unwrap_err();
	match err.kind() {
		ErrorKind::FileDecoding(e) => {
			assert_eq!(e.description(), "File declares an invalid channel count");
		},
		other => panic!("unexpected error: {other:?}"),
	}
	assert_eq!(
		err.to_string(),
		"Wav: File declares an invalid channel count"
	);

	let info = wavefmt::read_from(&mut &bytes[..], ParseOptions::new()).unwrap();
	assert_eq!(info.channels(), -3);
}

#[test_log::test]
fn missing_file() {
	let err = wavefmt::read_from_path("tests/files/assets/does_not_exist.wav", ParseOptions::new())
		.unwrap_err();

	match err.kind() {
		ErrorKind::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
		other => panic!("unexpected error: {other:?}"),
	}
}
