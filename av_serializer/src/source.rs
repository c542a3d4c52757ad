//! Where Audiovault records come from
//!
//! The Audiovault database is only reachable through a platform ODBC driver, so it sits behind
//! [`RecordSource`]. A connection runs [`files_query`] and converts each row with
//! [`AvRecord::with`]. The binary reads a tab-delimited export of the `Files` table
//! ([`ExportSource`]) instead.

use crate::record::{AvRecord, Field, Value};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

/// A provider of `Files` table rows
pub trait RecordSource {
	/// The error returned when the rows can't be fetched
	type Error: std::error::Error + Send + Sync + 'static;

	/// Every record whose `TLM_Header` is later than the start of `since`
	///
	/// # Errors
	///
	/// Depends on the implementation
	fn modified_since(&mut self, since: NaiveDate) -> Result<Vec<AvRecord>, Self::Error>;
}

/// The query selecting every [`Field`] of the titles modified after `since`
///
/// # Examples
///
/// ```rust
/// use av_serializer::source::files_query;
/// use chrono::NaiveDate;
///
/// let query = files_query(NaiveDate::from_ymd_opt(2019, 7, 4).unwrap());
/// assert!(query.starts_with("SELECT Description, Cat, ClientID, "));
/// assert!(query.ends_with(" FROM Files WHERE TLM_Header > #07/04/2019#"));
/// ```
pub fn files_query(since: NaiveDate) -> String {
	let columns = Field::ALL.map(Field::as_str).join(", ");
	format!(
		"SELECT {columns} FROM Files WHERE TLM_Header > {}",
		since.format("#%m/%d/%Y#")
	)
}

fn modified_after(record: &AvRecord, since: NaiveDate) -> bool {
	let start = since.and_time(chrono::NaiveTime::MIN);
	record
		.get(Field::TLM_Header)
		.as_date_time()
		.is_some_and(|modified| modified > start)
}

/// Records held in memory
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
	records: Vec<AvRecord>,
}

impl MemorySource {
	/// Create a `MemorySource`
	pub fn new(records: Vec<AvRecord>) -> Self {
		Self { records }
	}
}

impl RecordSource for MemorySource {
	type Error = std::convert::Infallible;

	fn modified_since(&mut self, since: NaiveDate) -> Result<Vec<AvRecord>, Self::Error> {
		Ok(self
			.records
			.iter()
			.filter(|record| modified_after(record, since))
			.cloned()
			.collect())
	}
}

/// Errors that can occur while reading an [`ExportSource`]
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
	/// The export could not be read
	#[error("failed to read table export: {0}")]
	Io(#[from] io::Error),
	/// The export has no header row
	#[error("table export is empty")]
	MissingHeader,
	/// A row has more columns than the header
	#[error("line {line}: found {found} columns, the header has {expected}")]
	ColumnCount {
		/// The 1-based line number
		line: usize,
		/// The number of columns in the header
		expected: usize,
		/// The number of columns in the row
		found: usize,
	},
}

/// A tab-delimited export of the `Files` table, with the column names in the first row
///
/// Columns that aren't a [`Field`] are ignored, and missing columns are `NULL`. Values are typed
/// as follows:
///
/// * An empty value is `NULL`
/// * `True` and `False` are booleans
/// * Numbers are integers or floats, unless they would not display the same (e.g. `007`)
/// * `MM/DD/YYYY hh:mm:ss`, `YYYY-MM-DD hh:mm:ss` and `MM/DD/YYYY` are dates
/// * Anything else is text
pub struct ExportSource<R> {
	reader: R,
}

impl ExportSource<BufReader<File>> {
	/// Open the export at `path`
	///
	/// # Errors
	///
	/// * `path` can't be opened
	pub fn open(path: &Path) -> io::Result<Self> {
		log::debug!("Opening table export {}", path.display());
		Ok(Self::new(BufReader::new(File::open(path)?)))
	}
}

impl<R> ExportSource<R>
where
	R: BufRead,
{
	/// Create an `ExportSource` reading from `reader`
	pub fn new(reader: R) -> Self {
		Self { reader }
	}

	fn read_records(&mut self) -> Result<Vec<AvRecord>, ExportError> {
		let mut lines = (&mut self.reader).lines();

		let header = lines.next().ok_or(ExportError::MissingHeader)??;
		let columns = header
			.trim_end_matches('\r')
			.split('\t')
			.map(|name| {
				let field = Field::from_name(name.trim());
				if field.is_none() {
					log::debug!("Ignoring export column \"{name}\"");
				}
				field
			})
			.collect::<Vec<_>>();

		let mut records = Vec::new();
		for (index, line) in lines.enumerate() {
			let line = line?;
			let line = line.trim_end_matches('\r');
			if line.is_empty() {
				continue;
			}

			let values = line.split('\t').collect::<Vec<_>>();
			if values.len() > columns.len() {
				return Err(ExportError::ColumnCount {
					line: index + 2,
					expected: columns.len(),
					found: values.len(),
				});
			}

			let mut record = AvRecord::new();
			for (field, value) in columns.iter().zip(values) {
				if let Some(field) = field {
					record.set(*field, parse_value(value));
				}
			}
			records.push(record);
		}

		Ok(records)
	}
}

impl<R> RecordSource for ExportSource<R>
where
	R: BufRead,
{
	type Error = ExportError;

	fn modified_since(&mut self, since: NaiveDate) -> Result<Vec<AvRecord>, Self::Error> {
		let mut records = self.read_records()?;
		log::debug!("Read {} records from the table export", records.len());

		records.retain(|record| modified_after(record, since));
		Ok(records)
	}
}

const EXPORT_DATE_TIME_FORMATS: [&str; 2] = ["%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

fn parse_value(text: &str) -> Value {
	match text {
		"" => return Value::Null,
		"True" => return Value::Boolean(true),
		"False" => return Value::Boolean(false),
		_ => {},
	}

	if let Ok(int) = text.parse::<i64>() {
		if int.to_string() == text {
			return Value::Integer(int);
		}
	}

	if text.bytes().all(|b| b.is_ascii_digit() || b == b'.' || b == b'-') {
		if let Ok(float) = text.parse::<f64>() {
			let value = Value::Float(float);
			if value.to_string() == text {
				return value;
			}
		}
	}

	for format in EXPORT_DATE_TIME_FORMATS {
		if let Ok(date_time) = NaiveDateTime::parse_from_str(text, format) {
			return Value::DateTime(date_time);
		}
	}

	if let Ok(date) = NaiveDate::parse_from_str(text, "%m/%d/%Y") {
		return Value::DateTime(date.and_time(chrono::NaiveTime::MIN));
	}

	Value::from(text)
}

#[cfg(test)]
mod tests {
	use super::{ExportError, ExportSource, MemorySource, RecordSource, parse_value};
	use crate::record::{AvRecord, Field, Value};

	use chrono::NaiveDate;

	fn date(day: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(2019, 7, day).unwrap()
	}

	#[test_log::test]
	fn values() {
		let midnight = date(4).and_hms_opt(0, 0, 0).unwrap();
		let afternoon = date(4).and_hms_opt(15, 4, 5).unwrap();

		assert_eq!(parse_value(""), Value::Null);
		assert_eq!(parse_value("True"), Value::Boolean(true));
		assert_eq!(parse_value("42"), Value::Integer(42));
		assert_eq!(parse_value("-3"), Value::Integer(-3));
		assert_eq!(parse_value("007"), Value::from("007"));
		assert_eq!(parse_value("2.5"), Value::Float(2.5));
		assert_eq!(parse_value("NaN"), Value::from("NaN"));
		assert_eq!(parse_value("07/04/2019"), Value::DateTime(midnight));
		assert_eq!(parse_value("07/04/2019 15:04:05"), Value::DateTime(afternoon));
		assert_eq!(parse_value("2019-07-04 15:04:05"), Value::DateTime(afternoon));
		assert_eq!(parse_value("ID0001.WAV"), Value::from("ID0001.WAV"));
	}

	#[test_log::test]
	fn memory_source_filters_by_modification() {
		let record = |day: u32| {
			AvRecord::new().with(Field::TLM_Header, date(day).and_hms_opt(9, 0, 0).unwrap())
		};

		let mut source = MemorySource::new(vec![record(3), record(4), record(5), AvRecord::new()]);

		// The whole day of `since` counts as modified after it
		let records = source.modified_since(date(4)).unwrap();
		assert_eq!(records, [record(4), record(5)]);
	}

	#[test_log::test]
	fn export() {
		let text = "Description\tCat\tUnknown\tTLM_Header\tFile\r\n\
		            Station ID\tIDS\tx\t07/05/2019 10:00:00\tID0001.WAV\r\n\
		            \r\n\
		            Old\tIDS\tx\t07/01/2019 10:00:00\tID0002.WAV\r\n\
		            Short\tPSA\n";

		// Rows without a TLM_Header are never modified after anything
		let mut source = ExportSource::new(text.as_bytes());
		let records = source.modified_since(date(4)).unwrap();
		assert_eq!(records.len(), 1);

		let record = &records[0];
		assert_eq!(record.get(Field::Description), &Value::from("Station ID"));
		assert_eq!(record.get(Field::Cat), &Value::from("IDS"));
		assert_eq!(record.get(Field::File), &Value::from("ID0001.WAV"));
		assert_eq!(record.get(Field::Path), &Value::Null);
	}

	#[test_log::test]
	fn export_errors() {
		let mut empty = ExportSource::new(&b""[..]);
		assert!(matches!(
			empty.modified_since(date(4)),
			Err(ExportError::MissingHeader)
		));

		let mut wide = ExportSource::new(&b"Description\tCat\na\tb\tc\n"[..]);
		assert!(matches!(
			wide.modified_since(date(4)),
			Err(ExportError::ColumnCount {
				line: 2,
				expected: 2,
				found: 3
			})
		));
	}
}
