//! The tab-delimited format log

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use wavefmt::FormatInfo;

/// The name of the format log written on `date`
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use ingest_transcode::report::log_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(log_file_name(date), "transcode_log_03-07-2024.txt");
/// ```
pub fn log_file_name(date: NaiveDate) -> String {
	date.format("transcode_log_%m-%d-%Y.txt").to_string()
}

/// The path of the format log written on `date` inside `staging`
pub fn log_file_path(staging: &Path, date: NaiveDate) -> PathBuf {
	staging.join(log_file_name(date))
}

/// Writes one row per item, with the item code followed by the [`FormatInfo`] fields
///
/// Every field, including the last, is followed by a tab.
pub struct FormatLog<W> {
	writer: W,
	rows: usize,
}

impl<W> FormatLog<W>
where
	W: Write,
{
	/// Create a `FormatLog`, writing the header row immediately
	///
	/// # Errors
	///
	/// * Writing to `writer` fails
	pub fn new(mut writer: W) -> io::Result<Self> {
		write!(writer, "Itemcode\t")?;
		for name in FormatInfo::FIELD_NAMES {
			write!(writer, "{name}\t")?;
		}
		writeln!(writer)?;

		Ok(Self { writer, rows: 0 })
	}

	/// Append the row of `item_code`
	///
	/// # Errors
	///
	/// * Writing to the underlying writer fails
	pub fn write_row(&mut self, item_code: &str, info: &FormatInfo) -> io::Result<()> {
		write!(self.writer, "{item_code}\t")?;
		for value in info.values() {
			write!(self.writer, "{value}\t")?;
		}
		writeln!(self.writer)?;

		self.rows += 1;
		Ok(())
	}

	/// The number of rows written, excluding the header
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
