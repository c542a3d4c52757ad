//! Contains the errors that can arise within `wavefmt`
//!
//! The primary error is [`WaveFmtError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, WaveFmtError>`
pub type Result<T> = std::result::Result<T, WaveFmtError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The input ended before a region of the header could be read
	///
	/// This covers both the fixed 8 byte chunk headers and the declared body of the `fmt ` chunk.
	TruncatedInput,
	/// The `fmt ` chunk declares a size too small to hold the fixed format fields
	///
	/// The declared size is attached. It can be negative, as chunk sizes are decoded as signed.
	InvalidFormatChunk(i32),
	/// Errors that occur while decoding a file
	FileDecoding(FileDecodingError),
	/// Errors that arise while decoding text, such as a non-ASCII chunk identifier
	TextDecode(&'static str),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`], except for [`std::io::ErrorKind::UnexpectedEof`],
	/// which becomes [`ErrorKind::TruncatedInput`].
	Io(std::io::Error),
}

/// An error that arises while decoding a file
pub struct FileDecodingError {
	description: &'static str,
}

impl FileDecodingError {
	/// Create a `FileDecodingError` from a description
	///
	/// # Examples
	///
	/// ```rust
	/// use wavefmt::error::FileDecodingError;
	///
	/// let error = FileDecodingError::new("Something went wrong in the WAV file!");
	/// assert_eq!(error.description(), "Something went wrong in the WAV file!");
	/// ```
	#[must_use]
	pub const fn new(description: &'static str) -> Self {
		Self { description }
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Wav: {:?}", self.description)
	}
}

impl Display for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Wav: {}", self.description)
	}
}

/// Errors that could occur within `wavefmt`
pub struct WaveFmtError {
	pub(crate) kind: ErrorKind,
}

impl WaveFmtError {
	/// Create a `WaveFmtError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use wavefmt::error::{ErrorKind, WaveFmtError};
	///
	/// let truncated = WaveFmtError::new(ErrorKind::TruncatedInput);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use wavefmt::error::{ErrorKind, WaveFmtError};
	///
	/// let truncated = WaveFmtError::new(ErrorKind::TruncatedInput);
	/// if let ErrorKind::TruncatedInput = truncated.kind() {
	/// 	println!("Where's the rest of the file?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for WaveFmtError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for WaveFmtError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<FileDecodingError> for WaveFmtError {
	fn from(input: FileDecodingError) -> Self {
		Self {
			kind: ErrorKind::FileDecoding(input),
		}
	}
}

impl From<std::io::Error> for WaveFmtError {
	fn from(input: std::io::Error) -> Self {
		// `read_exact` and the `byteorder` readers report a short read as `UnexpectedEof`
		if input.kind() == std::io::ErrorKind::UnexpectedEof {
			return Self {
				kind: ErrorKind::TruncatedInput,
			};
		}

		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for WaveFmtError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::TruncatedInput => write!(
				f,
				"Reached the end of the input before the header could be fully read"
			),
			ErrorKind::InvalidFormatChunk(size) => write!(
				f,
				"Encountered a \"fmt \" chunk with an invalid size ({size}), expected at least 16 bytes"
			),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::FileDecoding(ref file_decode_err) => write!(f, "{file_decode_err}"),
		}
	}
}
