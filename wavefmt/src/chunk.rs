//! RIFF chunk headers

use crate::error::Result;
use crate::macros::err;

use std::fmt::{Display, Formatter};
use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

/// The size of a RIFF chunk header (identifier + size)
pub const RIFF_CHUNK_HEADER_SIZE: u64 = 8;

/// A four character code identifying a RIFF chunk or form type
///
/// The code is guaranteed to be ASCII, though not necessarily printable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FourCC([u8; 4]);

impl FourCC {
	/// The identifier of the RIFF group chunk
	pub const RIFF: Self = Self(*b"RIFF");
	/// The WAVE form type
	pub const WAVE: Self = Self(*b"WAVE");
	/// The identifier of the format chunk
	pub const FMT: Self = Self(*b"fmt ");

	/// Decode a `FourCC` from raw bytes
	///
	/// # Errors
	///
	/// * `bytes` contains anything outside of the ASCII range
	///
	/// # Examples
	///
	/// ```rust
	/// use wavefmt::chunk::FourCC;
	///
	/// # fn main() -> wavefmt::error::Result<()> {
	/// let fourcc = FourCC::from_bytes(*b"WAVE")?;
	/// assert_eq!(fourcc, FourCC::WAVE);
	///
	/// assert!(FourCC::from_bytes([0xFF, b'A', b'V', b'E']).is_err());
	/// # Ok(()) }
	/// ```
	pub fn from_bytes(bytes: [u8; 4]) -> Result<Self> {
		if !bytes.is_ascii() {
			err!(TextDecode("Chunk identifier contains non-ASCII bytes"));
		}

		Ok(Self(bytes))
	}

	/// Read and decode a `FourCC`
	///
	/// # Errors
	///
	/// * The reader does not have 4 bytes remaining
	/// * See [`FourCC::from_bytes`]
	pub fn read<R>(data: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut fourcc = [0; 4];
		data.read_exact(&mut fourcc)?;

		Self::from_bytes(fourcc)
	}

	/// The raw identifier
	pub fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}

	/// The identifier as a `str`
	pub fn as_str(&self) -> &str {
		// Checked to be ASCII on construction
		std::str::from_utf8(&self.0).unwrap_or_default()
	}
}

impl Display for FourCC {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A RIFF chunk header
///
/// NOTE: The size is kept signed. Anything that relies on it (such as the `fmt ` chunk body)
/// must reject values that make no sense for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChunkHeader {
	/// The chunk identifier
	pub fourcc: FourCC,
	/// The declared size of the chunk body
	pub size: i32,
}

impl ChunkHeader {
	/// Read a chunk header
	///
	/// # Errors
	///
	/// * The reader does not have 8 bytes remaining
	/// * The identifier is not ASCII
	pub fn read<R>(data: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let fourcc = FourCC::read(data)?;
		let size = data.read_i32::<LittleEndian>()?;

		Ok(Self { fourcc, size })
	}
}

#[cfg(test)]
mod tests {
	use super::{ChunkHeader, FourCC};
	use crate::error::ErrorKind;

	#[test_log::test]
	fn read_header() {
		let bytes = [b'f', b'm', b't', b' ', 0x10, 0x00, 0x00, 0x00];
		let header = ChunkHeader::read(&mut &bytes[..]).unwrap();

		assert_eq!(header.fourcc, FourCC::FMT);
		assert_eq!(header.size, 16);
	}

	#[test_log::test]
	fn negative_size() {
		let bytes = [b'f', b'm', b't', b' ', 0xFF, 0xFF, 0xFF, 0xFF];
		let header = ChunkHeader::read(&mut &bytes[..]).unwrap();

		assert_eq!(header.size, -1);
	}

	#[test_log::test]
	fn short_header() {
		let bytes = [b'R', b'I', b'F', b'F', 0x00];
		let err = ChunkHeader::read(&mut &bytes[..]).unwrap_err();

		assert!(matches!(err.kind(), ErrorKind::TruncatedInput));
	}

	#[test_log::test]
	fn non_ascii_identifier() {
		let bytes = [0xC3, 0xA9, b'a', b'b', 0x00, 0x00, 0x00, 0x00];
		let err = ChunkHeader::read(&mut &bytes[..]).unwrap_err();

		assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));
	}

	#[test_log::test]
	fn display() {
		assert_eq!(FourCC::FMT.to_string(), "fmt ");
		assert_eq!(FourCC::RIFF.as_bytes(), b"RIFF");
	}
}
