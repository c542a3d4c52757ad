//! The success and failed logs of a run

use crate::record::Field;
use crate::xml::Title;

use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;

/// The name of the success log written on `date`
///
/// # Examples
///
/// ```rust
/// use av_serializer::logs::{failed_log_name, success_log_name};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2019, 7, 4).unwrap();
/// assert_eq!(success_log_name(date), "success_log_04-07-19.txt");
/// assert_eq!(failed_log_name(date), "failed_log_04-07-19.txt");
/// ```
pub fn success_log_name(date: NaiveDate) -> String {
	date.format("success_log_%d-%m-%y.txt").to_string()
}

/// The name of the failed log written on `date`
pub fn failed_log_name(date: NaiveDate) -> String {
	date.format("failed_log_%d-%m-%y.txt").to_string()
}

/// One row per serialized title: item code, media location, and Audiovault path, tab-delimited
pub struct SuccessLog<W> {
	writer: W,
	rows: usize,
}

impl<W> SuccessLog<W>
where
	W: Write,
{
	/// Create a `SuccessLog`
	pub fn new(writer: W) -> Self {
		Self { writer, rows: 0 }
	}

	/// Append the row of `title`
	///
	/// # Errors
	///
	/// * Writing to the underlying writer fails
	pub fn write_title(&mut self, title: &Title) -> io::Result<()> {
		writeln!(
			self.writer,
			"{}\t{}\t{}",
			title.item_code,
			title.media_location.display(),
			title.record.get(Field::Path)
		)?;

		self.rows += 1;
		Ok(())
	}

	/// The number of rows written
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Flush and return the underlying writer
	///
	/// # Errors
	///
	/// * Flushing fails
	pub fn finish(mut self) -> io::Result<W> {
		self.writer.flush()?;
		Ok(self.writer)
	}
}

/// One line per media file that has no serialized title, relative to the media directory
pub struct FailedLog<W> {
	writer: W,
	rows: usize,
}

impl<W> FailedLog<W>
where
	W: Write,
{
	/// Create a `FailedLog`
	pub fn new(writer: W) -> Self {
		Self { writer, rows: 0 }
	}

	/// Append `media_location`
	///
	/// # Errors
	///
	/// * Writing to the underlying writer fails
	pub fn write_path(&mut self, media_location: &Path) -> io::Result<()> {
		writeln!(self.writer, "{}", media_location.display())?;

		self.rows += 1;
		Ok(())
	}

	/// The number of rows written
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Flush and return the underlying writer
	///
	/// # Errors
	///
	/// * Flushing fails
	pub fn finish(mut self) -> io::Result<W> {
		self.writer.flush()?;
		Ok(self.writer)
	}
}
