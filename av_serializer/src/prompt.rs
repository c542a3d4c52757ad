//! Confirmation before anything is copied into the ingest directories

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Asks yes/no questions
pub trait Prompt {
	/// Ask `question`, returning whether it was confirmed
	///
	/// # Errors
	///
	/// Depends on the implementation
	fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// A [`Prompt`] reading answers line by line
///
/// An answer starting with `y` (in any case) confirms, anything else, including the end of the
/// input, declines.
pub struct LinePrompt<R, W> {
	input: R,
	output: W,
}

impl LinePrompt<StdinLock<'static>, Stdout> {
	/// A `LinePrompt` on the terminal
	pub fn stdio() -> Self {
		Self::new(io::stdin().lock(), io::stdout())
	}
}

impl<R, W> LinePrompt<R, W>
where
	R: BufRead,
	W: Write,
{
	/// Create a `LinePrompt` reading answers from `input` and writing questions to `output`
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	/// Return the underlying output
	pub fn into_output(self) -> W {
		self.output
	}
}

impl<R, W> Prompt for LinePrompt<R, W>
where
	R: BufRead,
	W: Write,
{
	fn confirm(&mut self, question: &str) -> io::Result<bool> {
		write!(self.output, "\t{question} ")?;
		self.output.flush()?;

		let mut answer = String::new();
		if self.input.read_line(&mut answer)? == 0 {
			writeln!(self.output)?;
			return Ok(false);
		}

		let confirmed = answer
			.trim_end_matches(['\r', '\n'])
			.to_lowercase()
			.starts_with('y');
		log::debug!("\"{question}\" answered {confirmed}");

		Ok(confirmed)
	}
}
