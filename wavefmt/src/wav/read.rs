use super::WaveHeader;
use super::format::{FormatInfo, read_fmt_chunk};
use crate::chunk::{ChunkHeader, FourCC};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{decode_err, parse_mode_choice};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read the leading chunks of a RIFF/WAVE stream
///
/// This reads the RIFF group header, the form type, and the `fmt ` chunk, in that order.
/// The reader is left positioned directly after the `fmt ` chunk body, see [`WaveHeader::len`].
///
/// # Errors
///
/// * The input ends before the `fmt ` chunk body is fully read ([`ErrorKind::TruncatedInput`])
/// * The `fmt ` chunk declares a size below 16 ([`ErrorKind::InvalidFormatChunk`])
/// * A chunk identifier is not ASCII ([`ErrorKind::TextDecode`])
/// * Using [`ParsingMode::Strict`], the identifiers or the format fields are invalid
///
/// [`ErrorKind::TruncatedInput`]: crate::error::ErrorKind::TruncatedInput
/// [`ErrorKind::InvalidFormatChunk`]: crate::error::ErrorKind::InvalidFormatChunk
/// [`ErrorKind::TextDecode`]: crate::error::ErrorKind::TextDecode
/// [`ParsingMode::Strict`]: crate::config::ParsingMode::Strict
///
/// # Examples
///
/// ```rust,no_run
/// use wavefmt::config::ParseOptions;
///
/// # fn main() -> wavefmt::error::Result<()> {
/// let mut file = std::fs::File::open("foo.wav")?;
/// let header = wavefmt::read_header(&mut file, ParseOptions::new())?;
///
/// println!("Bits per sample: {}", header.fmt().bits_per_sample());
/// # Ok(()) }
/// ```
pub fn read_header<R>(data: &mut R, parse_options: ParseOptions) -> Result<WaveHeader>
where
	R: Read,
{
	let parsing_mode = parse_options.parsing_mode;

	let riff = ChunkHeader::read(data)?;
	if riff.fourcc != FourCC::RIFF {
		parse_mode_choice!(
			parsing_mode,
			STRICT: decode_err!(@BAIL "File doesn't contain a RIFF chunk"),
			RELAXED: log::debug!("Ignoring unexpected group identifier \"{}\"", riff.fourcc),
		);
	}

	let form_type = FourCC::read(data)?;
	if form_type != FourCC::WAVE {
		parse_mode_choice!(
			parsing_mode,
			STRICT: decode_err!(@BAIL "Found RIFF file, format is not WAVE"),
			RELAXED: log::debug!("Ignoring unexpected form type \"{form_type}\""),
		);
	}

	let fmt_header = ChunkHeader::read(data)?;
	if fmt_header.fourcc != FourCC::FMT {
		parse_mode_choice!(
			parsing_mode,
			STRICT: decode_err!(@BAIL "Expected a \"fmt \" chunk directly after the form type"),
			RELAXED: log::debug!(
				"Treating chunk \"{}\" as the format chunk",
				fmt_header.fourcc
			),
		);
	}

	let fmt = read_fmt_chunk(data, fmt_header.size)?;

	if fmt.channels < 1 {
		parse_mode_choice!(
			parsing_mode,
			STRICT: decode_err!(@BAIL "File declares an invalid channel count"),
			RELAXED: log::warn!("Format chunk declares {} channels", fmt.channels),
		);
	}

	if fmt.sample_rate <= 0 {
		parse_mode_choice!(
			parsing_mode,
			STRICT: decode_err!(@BAIL "File has an invalid sample rate"),
			RELAXED: log::warn!("Format chunk declares a sample rate of {}", fmt.sample_rate),
		);
	}

	log::debug!(
		"Read format chunk: {} channels @ {} Hz, format {:#06x}",
		fmt.channels,
		fmt.sample_rate,
		fmt.format_tag
	);

	Ok(WaveHeader {
		riff,
		form_type,
		fmt_header,
		fmt,
	})
}

/// Read the [`FormatInfo`] of a RIFF/WAVE stream
///
/// See [`read_header`] for the layout that is read.
///
/// # Errors
///
/// * See [`read_header`]
/// * The byte rate is too large to be converted to a bitrate
///
/// # Examples
///
/// ```rust
/// use wavefmt::config::ParseOptions;
///
/// # fn main() -> wavefmt::error::Result<()> {
/// # let mut bytes = Vec::new();
/// # bytes.extend(b"RIFF\x24\x00\x00\x00WAVEfmt \x10\x00\x00\x00");
/// # bytes.extend([1, 0, 2, 0, 0x44, 0xAC, 0, 0, 0x10, 0xB1, 0x02, 0, 4, 0, 16, 0]);
/// let format_info = wavefmt::read_from(&mut &bytes[..], ParseOptions::new())?;
///
/// assert_eq!(format_info.channels(), 2);
/// assert_eq!(format_info.bitrate(), 176_400 * 8);
/// # Ok(()) }
/// ```
pub fn read_from<R>(data: &mut R, parse_options: ParseOptions) -> Result<FormatInfo>
where
	R: Read,
{
	let header = read_header(data, parse_options)?;
	FormatInfo::try_from(header.fmt)
}

/// Read the [`FormatInfo`] of the WAV file at `path`
///
/// The file is only open for the duration of this call.
///
/// # Errors
///
/// * `path` cannot be opened
/// * See [`read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use wavefmt::config::ParseOptions;
///
/// # fn main() -> wavefmt::error::Result<()> {
/// let format_info = wavefmt::read_from_path("foo.wav", ParseOptions::new())?;
/// println!("Sample rate: {}", format_info.sample_rate());
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<FormatInfo>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	log::debug!("Reading format information from {}", path.display());

	let mut reader = BufReader::new(File::open(path)?);
	read_from(&mut reader, parse_options)
}
