//! Rows of the Audiovault `Files` table

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

/// The format of every date and time written to a title XML
pub const DATE_TIME_FORMAT: &str = "%m/%d/%Y %I:%M:%S";

macro_rules! fields {
	($($variant:ident),+ $(,)?) => {
		/// A column of the Audiovault `Files` table
		///
		/// The variants are in the order they are selected and serialized in.
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
		#[allow(missing_docs, non_camel_case_types, clippy::upper_case_acronyms)]
		pub enum Field {
			$($variant),+
		}

		impl Field {
			/// Every field, in column order
			pub const ALL: [Field; FIELD_COUNT] = [$(Field::$variant),+];

			/// The column name
			pub fn as_str(self) -> &'static str {
				match self {
					$(Field::$variant => stringify!($variant)),+
				}
			}

			/// Look up a field by its column name, ignoring ASCII case
			pub fn from_name(name: &str) -> Option<Self> {
				Self::ALL
					.into_iter()
					.find(|field| field.as_str().eq_ignore_ascii_case(name))
			}
		}
	};
}

/// The number of columns read from the `Files` table
pub const FIELD_COUNT: usize = 30;

fields! {
	Description,
	Cat,
	ClientID,
	StartDate,
	KillDate,
	OutCue,
	Codes,
	Space,
	DefaultDuration,
	Vault,
	Shared,
	SampleRate,
	Hidden,
	AudioLength,
	TLM_Body,
	Tracks,
	DriveID,
	FormatName,
	AudioEnd,
	Path,
	Class,
	TLA_Body,
	FileType,
	TLA_Header,
	Found,
	TLM_Header,
	CompName,
	UFN,
	File,
	AudioBegin,
}

impl Display for Field {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single column value
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
	/// A `NULL` column
	#[default]
	Null,
	/// Text
	Text(String),
	/// An integer
	Integer(i64),
	/// A floating point number
	Float(f64),
	/// A yes/no column
	Boolean(bool),
	/// A date/time column
	DateTime(NaiveDateTime),
}

impl Value {
	/// The value as a date and time, if it is one
	pub fn as_date_time(&self) -> Option<NaiveDateTime> {
		match self {
			Value::DateTime(date_time) => Some(*date_time),
			_ => None,
		}
	}
}

impl Display for Value {
	/// Formats the value the way it is written to title XMLs
	///
	/// `NULL` is written as `None`, booleans as `True`/`False`, and dates with
	/// [`DATE_TIME_FORMAT`].
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("None"),
			Value::Text(text) => f.write_str(text),
			Value::Integer(int) => write!(f, "{int}"),
			Value::Float(float) => {
				let text = float.to_string();
				if float.is_finite() && !text.contains('.') {
					write!(f, "{text}.0")
				} else {
					f.write_str(&text)
				}
			},
			Value::Boolean(true) => f.write_str("True"),
			Value::Boolean(false) => f.write_str("False"),
			Value::DateTime(date_time) => write!(f, "{}", date_time.format(DATE_TIME_FORMAT)),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Integer(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Boolean(value)
	}
}

impl From<NaiveDateTime> for Value {
	fn from(value: NaiveDateTime) -> Self {
		Value::DateTime(value)
	}
}

/// One row of the `Files` table, with every [`Field`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvRecord {
	values: [Value; FIELD_COUNT],
}

impl AvRecord {
	/// Create a record with every field `NULL`
	pub fn new() -> Self {
		Self::default()
	}

	/// Set `field`, consuming and returning the record
	///
	/// # Examples
	///
	/// ```rust
	/// use av_serializer::record::{AvRecord, Field, Value};
	///
	/// let record = AvRecord::new()
	/// 	.with(Field::Description, "Station ID")
	/// 	.with(Field::Cat, "IDS");
	///
	/// assert_eq!(record.get(Field::Cat), &Value::from("IDS"));
	/// assert_eq!(record.get(Field::Path), &Value::Null);
	/// ```
	#[must_use]
	pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
		self.set(field, value);
		self
	}

	/// Set `field`
	pub fn set(&mut self, field: Field, value: impl Into<Value>) {
		self.values[field as usize] = value.into();
	}

	/// The value of `field`
	pub fn get(&self, field: Field) -> &Value {
		&self.values[field as usize]
	}

	/// Every field with its value, in column order
	pub fn fields(&self) -> impl Iterator<Item = (Field, &Value)> {
		Field::ALL.into_iter().zip(self.values.iter())
	}
}
