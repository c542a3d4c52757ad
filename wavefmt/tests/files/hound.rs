use wavefmt::config::{ParseOptions, ParsingMode};

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

fn write_wav(path: &Path, spec: WavSpec) {
	let mut writer = WavWriter::create(path, spec).unwrap();
	for i in 0..(u32::from(spec.channels) * 64) {
		match spec.bits_per_sample {
			8 => writer.write_sample((i % 100) as i8).unwrap(),
			_ => writer.write_sample((i % 1000) as i16).unwrap(),
		}
	}
	writer.finalize().unwrap();
}

#[test_log::test]
fn hound() {
	let dir = tempfile::tempdir().unwrap();

	let specs = [
		(1, 8000, 8),
		(1, 22050, 16),
		(2, 44100, 16),
		(2, 48000, 8),
		// Written as WAVE_FORMAT_EXTENSIBLE
		(6, 48000, 16),
	];

	for (channels, sample_rate, bits_per_sample) in specs {
		let spec = WavSpec {
			channels,
			sample_rate,
			bits_per_sample,
			sample_format: SampleFormat::Int,
		};

		let path = dir
			.path()
			.join(format!("{channels}ch_{sample_rate}_{bits_per_sample}.wav"));
		write_wav(&path, spec);

		println!("Name: {}", path.display());

		let mut reader = std::fs::File::open(&path).unwrap();
		let header = wavefmt::read_header(
			&mut reader,
			ParseOptions::new().parsing_mode(ParsingMode::Strict),
		)
		.unwrap();
		assert_eq!(header.len(), 20 + header.fmt_header().size as u64);

		let fmt = header.fmt();
		assert_eq!(fmt.channels() as u16, spec.channels);
		assert_eq!(fmt.sample_rate() as u32, spec.sample_rate);
		assert_eq!(fmt.bits_per_sample() as u16, spec.bits_per_sample);

		let info = wavefmt::read_from_path(&path, ParseOptions::new()).unwrap();
		let block_align = u32::from(spec.channels) * u32::from(spec.bits_per_sample / 8);
		assert_eq!(info.channels() as u16, spec.channels);
		assert_eq!(info.sample_rate() as u32, spec.sample_rate);
		assert_eq!(info.bitrate() as u32, spec.sample_rate * block_align * 8);
	}
}
