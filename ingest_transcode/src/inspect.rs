//! Format information of individual files, written as a format log

use crate::planner::item_code;
use crate::report::FormatLog;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use wavefmt::config::ParseOptions;
use wavefmt::error::WaveFmtError;

/// The outcome of [`inspect`]
#[derive(Debug, Default)]
pub struct Inspection {
	/// The number of rows written
	pub rows: usize,
	/// The files that could not be read, in input order
	pub failures: Vec<(PathBuf, WaveFmtError)>,
}

impl Inspection {
	/// Whether every file was read
	pub fn is_success(&self) -> bool {
		self.failures.is_empty()
	}
}

/// Write a format log of `files` to `writer`
///
/// The log has the same layout as the one written by [`Planner::run`], with the file stem as the
/// item code. Files that can't be read produce no row and are collected in
/// [`Inspection::failures`].
///
/// [`Planner::run`]: crate::planner::Planner::run
///
/// # Errors
///
/// * Writing to `writer` fails
///
/// # Examples
///
/// ```rust,no_run
/// use ingest_transcode::inspect::inspect;
/// use std::path::PathBuf;
/// use wavefmt::config::ParseOptions;
///
/// # fn main() -> std::io::Result<()> {
/// let files = [PathBuf::from("KX0001.wav")];
/// let inspection = inspect(&files, ParseOptions::new(), std::io::stdout().lock())?;
/// assert!(inspection.is_success());
/// # Ok(()) }
/// ```
pub fn inspect<P, W>(files: &[P], parse_options: ParseOptions, writer: W) -> io::Result<Inspection>
where
	P: AsRef<Path>,
	W: Write,
{
	let mut log = FormatLog::new(writer)?;

	let mut inspection = Inspection::default();
	for path in files {
		let path = path.as_ref();
		match wavefmt::read_from_path(path, parse_options) {
			Ok(info) => log.write_row(&item_code(path), &info)?,
			Err(e) => {
				log::debug!("Failed to read {}: {e}", path.display());
				inspection.failures.push((path.to_path_buf(), e));
			},
		}
	}

	inspection.rows = log.rows();
	log.finish()?;

	Ok(inspection)
}
