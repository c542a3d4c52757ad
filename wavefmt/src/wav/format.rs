use crate::error::{Result, WaveFmtError};
use crate::macros::{decode_err, err};

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

/// The size of the fixed portion of a `fmt ` chunk
pub const FMT_CHUNK_MIN_SIZE: i32 = 16;

/// The format code of uncompressed PCM audio
pub const PCM: i16 = 0x0001;

/// A decoded `fmt ` chunk
///
/// All fields are kept signed, matching how they are decoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct FmtChunk {
	pub(crate) format_tag: i16,
	pub(crate) channels: i16,
	pub(crate) sample_rate: i32,
	pub(crate) byte_rate: i32,
	pub(crate) block_align: i16,
	pub(crate) bits_per_sample: i16,
	pub(crate) extension_len: u32,
}

impl FmtChunk {
	/// Audio format code (1 = PCM)
	pub fn format_tag(&self) -> i16 {
		self.format_tag
	}

	/// Channel count
	pub fn channels(&self) -> i16 {
		self.channels
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> i32 {
		self.sample_rate
	}

	/// Average bytes per second
	pub fn byte_rate(&self) -> i32 {
		self.byte_rate
	}

	/// Bytes per sample frame
	pub fn block_align(&self) -> i16 {
		self.block_align
	}

	/// Bits per sample
	pub fn bits_per_sample(&self) -> i16 {
		self.bits_per_sample
	}

	/// Number of bytes following the fixed fields, skipped without being interpreted
	pub fn extension_len(&self) -> u32 {
		self.extension_len
	}
}

// Reads exactly `size` bytes: the 16 fixed bytes, then the extended format
// information (if any) which is discarded.
pub(super) fn read_fmt_chunk<R>(data: &mut R, size: i32) -> Result<FmtChunk>
where
	R: Read,
{
	if size < FMT_CHUNK_MIN_SIZE {
		err!(InvalidFormatChunk(size));
	}

	let format_tag = data.read_i16::<LittleEndian>()?;
	let channels = data.read_i16::<LittleEndian>()?;
	let sample_rate = data.read_i32::<LittleEndian>()?;
	let byte_rate = data.read_i32::<LittleEndian>()?;
	let block_align = data.read_i16::<LittleEndian>()?;
	let bits_per_sample = data.read_i16::<LittleEndian>()?;

	let extension_len = (size - FMT_CHUNK_MIN_SIZE) as u32;
	if extension_len > 0 {
		log::debug!("Skipping {extension_len} bytes of extended format information");

		let skipped = std::io::copy(
			&mut data.by_ref().take(u64::from(extension_len)),
			&mut std::io::sink(),
		)?;
		if skipped != u64::from(extension_len) {
			err!(TruncatedInput);
		}
	}

	Ok(FmtChunk {
		format_tag,
		channels,
		sample_rate,
		byte_rate,
		block_align,
		bits_per_sample,
		extension_len,
	})
}

/// The audio format parameters of a WAV file
///
/// NOTE: [`FormatInfo::bitrate`] is derived from the *byte rate* of the `fmt ` chunk, not from its
///       bits per sample. Use [`FmtChunk::bits_per_sample`] (through [`crate::read_header`]) when the
///       actual sample depth is needed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct FormatInfo {
	pub(crate) format_code: i16,
	pub(crate) channels: i16,
	pub(crate) sample_rate: i32,
	pub(crate) bitrate: i32,
}

impl FormatInfo {
	/// Column names of the fields, in their natural order
	pub const FIELD_NAMES: [&'static str; 4] = ["FormatCode", "Channels", "Samplerate", "Bitrate"];

	/// Create a new `FormatInfo`
	///
	/// # Examples
	///
	/// ```rust
	/// use wavefmt::FormatInfo;
	///
	/// let info = FormatInfo::new(1, 2, 44100, 1_411_200);
	/// assert_eq!(info.sample_rate(), 44100);
	/// ```
	#[must_use]
	pub const fn new(format_code: i16, channels: i16, sample_rate: i32, bitrate: i32) -> Self {
		Self {
			format_code,
			channels,
			sample_rate,
			bitrate,
		}
	}

	/// Audio format code (1 = PCM)
	pub fn format_code(&self) -> i16 {
		self.format_code
	}

	/// Whether the audio is uncompressed PCM
	pub fn is_pcm(&self) -> bool {
		self.format_code == PCM
	}

	/// Channel count
	pub fn channels(&self) -> i16 {
		self.channels
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> i32 {
		self.sample_rate
	}

	/// Byte rate * 8
	pub fn bitrate(&self) -> i32 {
		self.bitrate
	}

	/// The field values, in the same order as [`FormatInfo::FIELD_NAMES`]
	pub fn values(&self) -> [i32; 4] {
		[
			i32::from(self.format_code),
			i32::from(self.channels),
			self.sample_rate,
			self.bitrate,
		]
	}
}

impl TryFrom<FmtChunk> for FormatInfo {
	type Error = WaveFmtError;

	fn try_from(fmt: FmtChunk) -> Result<Self> {
		let Some(bitrate) = fmt.byte_rate.checked_mul(8) else {
			decode_err!(@BAIL "Byte rate is too large to be expressed as a bitrate");
		};

		Ok(Self {
			format_code: fmt.format_tag,
			channels: fmt.channels,
			sample_rate: fmt.sample_rate,
			bitrate,
		})
	}
}
