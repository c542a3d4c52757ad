/// Options to control how `wavefmt` parses a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::Relaxed,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::Relaxed;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use wavefmt::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use wavefmt::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::Relaxed. Here, we only want real WAV files.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}
}

/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust,no_run
/// use wavefmt::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> wavefmt::error::Result<()> {
/// // We only want to read well-formed WAV files
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let format_info = wavefmt::read_from_path("foo.wav", parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * The RIFF, form type, or format chunk identifiers are not `RIFF`, `WAVE`, and `fmt ` - The parser will error
	/// * The format chunk declares fewer than 1 channel or a sample rate <= 0 - The parser will error
	Strict,
	/// Default mode, only errors when the format fields cannot be read at all
	///
	/// Chunk identifiers are decoded but never compared, so any 4 ASCII bytes are accepted in their place.
	///
	/// ## Examples of behavior
	///
	/// * The chunk identifiers are unexpected - The parser moves on
	/// * The format chunk declares fewer than 1 channel or a sample rate <= 0 - A warning is logged, and the values are returned as-is
	#[default]
	Relaxed,
}
