//! Title XMLs, in the layout the ingest system expects

use crate::error::MetadataError;
use crate::record::{AvRecord, Field};

use std::borrow::Cow;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// The maximum number of titles in a single XML
pub const TITLES_PER_FILE: usize = 500;

/// The value of every `KEXPSource` element
pub const SOURCE: &str = "Audio Vault";

/// The name of the `index`th XML of titles modified since `since`
///
/// # Examples
///
/// ```rust
/// use av_serializer::xml::metadata_file_name;
/// use chrono::NaiveDate;
///
/// let since = NaiveDate::from_ymd_opt(2019, 7, 4).unwrap();
/// assert_eq!(metadata_file_name(since, 1), "audiovault_metadata_07042019_1.xml");
/// ```
pub fn metadata_file_name(since: NaiveDate, index: usize) -> String {
	format!("audiovault_metadata_{}_{index}.xml", since.format("%m%d%Y"))
}

/// Remove every control character (Unicode category `Cc`) from `text`
///
/// # Examples
///
/// ```rust
/// use av_serializer::xml::strip_control;
///
/// assert_eq!(strip_control("ID\u{0}0001\t.WAV\u{7f}"), "ID0001.WAV");
/// ```
pub fn strip_control(text: &str) -> String {
	text.chars().filter(|c| !c.is_control()).collect()
}

/// A record selected for serialization
#[derive(Clone, Debug, PartialEq)]
pub struct Title {
	/// The item code, reused from a previous ingest or newly generated
	pub item_code: String,
	/// The media file, relative to the media directory (`<Cat>/<file name>`)
	pub media_location: PathBuf,
	/// The Audiovault record
	pub record: AvRecord,
}

impl Title {
	/// Every element of the title, in document order
	pub fn elements(&self) -> Vec<(Cow<'static, str>, String)> {
		let record = &self.record;
		let description = record.get(Field::Description).to_string();
		let file_name = strip_control(&record.get(Field::File).to_string());

		let mut elements = vec![
			(Cow::Borrowed("Itemcode"), self.item_code.clone()),
			(Cow::Borrowed("Key1"), self.item_code.clone()),
			(Cow::Borrowed("TitleName"), description.clone()),
			(
				Cow::Borrowed("KEXPAllegianceMediaRef"),
				format!("{description}/{file_name}"),
			),
			(
				Cow::Borrowed("KEXPAudioVaultCategory"),
				record.get(Field::Cat).to_string(),
			),
			(Cow::Borrowed("KEXPClient"), record.get(Field::ClientID).to_string()),
			(Cow::Borrowed("KEXPStartDate"), record.get(Field::StartDate).to_string()),
			(Cow::Borrowed("TitleKillDate"), record.get(Field::KillDate).to_string()),
			(Cow::Borrowed("KEXPOutCue"), record.get(Field::OutCue).to_string()),
			(Cow::Borrowed("KEXPSource"), String::from(SOURCE)),
		];

		elements.extend(
			record
				.fields()
				.map(|(field, value)| (Cow::Owned(format!("AV_{field}")), value.to_string())),
		);

		elements
	}
}

/// Write `titles` as a single XML document
///
/// The document is indented with two spaces and starts with an XML declaration. The writer is
/// returned once flushed.
///
/// # Errors
///
/// * Writing to `writer` fails
pub fn write_titles<W>(writer: W, titles: &[Title]) -> Result<W, MetadataError>
where
	W: Write,
{
	let mut writer = Writer::new_with_indent(writer, b' ', 2);

	writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
	writer.write_event(Event::Start(BytesStart::new("titles")))?;
	for title in titles {
		writer.write_event(Event::Start(BytesStart::new("title")))?;
		for (name, value) in title.elements() {
			writer.write_event(Event::Start(BytesStart::new(name.as_ref())))?;
			writer.write_event(Event::Text(BytesText::new(&value)))?;
			writer.write_event(Event::End(BytesEnd::new(name.as_ref())))?;
		}
		writer.write_event(Event::End(BytesEnd::new("title")))?;
	}
	writer.write_event(Event::End(BytesEnd::new("titles")))?;

	let mut inner = writer.into_inner();
	inner.write_all(b"\n")?;
	inner.flush()?;

	Ok(inner)
}
