//! WAV specific items

mod format;
pub(crate) mod read;

use crate::chunk::{ChunkHeader, FourCC, RIFF_CHUNK_HEADER_SIZE};

// Exports
pub use format::{FMT_CHUNK_MIN_SIZE, FmtChunk, FormatInfo, PCM};

/// The leading chunks of a RIFF/WAVE stream
///
/// This is everything [`read_header`](crate::read_header) reads, from the start of the stream up to
/// the end of the `fmt ` chunk body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WaveHeader {
	pub(crate) riff: ChunkHeader,
	pub(crate) form_type: FourCC,
	pub(crate) fmt_header: ChunkHeader,
	pub(crate) fmt: FmtChunk,
}

impl WaveHeader {
	/// The RIFF group header
	///
	/// NOTE: The size is never validated or used.
	pub fn riff(&self) -> ChunkHeader {
		self.riff
	}

	/// The RIFF form type (`WAVE` in a well-formed file)
	pub fn form_type(&self) -> FourCC {
		self.form_type
	}

	/// The header of the format chunk
	pub fn fmt_header(&self) -> ChunkHeader {
		self.fmt_header
	}

	/// The decoded format chunk
	pub fn fmt(&self) -> &FmtChunk {
		&self.fmt
	}

	/// The number of bytes consumed from the stream
	///
	/// This is always `8 + 4 + 8 + fmt_header().size`.
	pub fn len(&self) -> u64 {
		RIFF_CHUNK_HEADER_SIZE + 4 + RIFF_CHUNK_HEADER_SIZE + self.fmt_header.size as u64
	}
}
