//! Item codes of titles that were already ingested
//!
//! Every metadata XML the ingest system has consumed is renamed with a `_DONE` suffix. Reusing the
//! item codes found in them keeps a re-serialized title from being ingested as a duplicate.

use crate::error::MetadataError;

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;

const INGESTED_META_PATTERN: &str =
	r"(?i)^(audiovault_metadata(_\d{8})?|dalet_audiovault)_\d+\.xml_DONE";

static INGESTED_META_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(INGESTED_META_PATTERN).expect("invalid regex pattern"));

/// Whether `file_name` is a metadata XML that has already been ingested
///
/// # Examples
///
/// ```rust
/// use av_serializer::itemcodes::is_ingested_metadata;
///
/// assert!(is_ingested_metadata("audiovault_metadata_07042019_0.xml_DONE"));
/// assert!(is_ingested_metadata("Dalet_AudioVault_3.XML_done"));
/// assert!(!is_ingested_metadata("audiovault_metadata_07042019_0.xml"));
/// ```
pub fn is_ingested_metadata(file_name: &str) -> bool {
	INGESTED_META_REGEX.is_match(file_name)
}

/// A map of Audiovault media paths (`AV_Path`) to the item codes they were ingested with
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemcodeMap {
	codes: HashMap<String, String>,
}

impl ItemcodeMap {
	/// Create an empty `ItemcodeMap`
	pub fn new() -> Self {
		Self::default()
	}

	/// Collect the item codes of every ingested metadata XML in `dir`
	///
	/// See [`is_ingested_metadata`] for the files that are read.
	///
	/// # Errors
	///
	/// * `dir` can't be listed
	/// * A metadata XML can't be read or is malformed
	pub fn from_ingest_dir(dir: &Path) -> Result<Self, MetadataError> {
		let mut map = Self::new();

		let mut names = Vec::new();
		for entry in fs::read_dir(dir)? {
			let name = entry?.file_name();
			if is_ingested_metadata(&name.to_string_lossy()) {
				names.push(name);
			}
		}
		names.sort();

		for name in names {
			let path = dir.join(name);
			log::debug!("Reading item codes from {}", path.display());

			let reader = BufReader::new(File::open(&path)?);
			map.read_document(reader)
				.map_err(|e| e.in_file(&path))?;
		}

		log::info!("Found {} previously ingested titles", map.len());
		Ok(map)
	}

	/// Add the item codes of a single metadata XML
	///
	/// Each child of the root element is a title. Its item code is taken from `Itemcode`, or
	/// `ItemCode` if there is none. Titles without an `AV_Path` or an item code are skipped.
	///
	/// # Errors
	///
	/// * The XML is malformed
	pub fn read_document<R>(&mut self, reader: R) -> Result<(), MetadataError>
	where
		R: BufRead,
	{
		let mut reader = Reader::from_reader(reader);
		reader.config_mut().trim_text(true);

		let mut buf = Vec::new();
		let mut depth = 0_usize;
		let mut title = TitleCodes::default();
		let mut element = None;

		loop {
			match reader.read_event_into(&mut buf)? {
				Event::Start(start) => {
					depth += 1;
					if depth == 3 {
						element = TitleElement::from_name(start.name().as_ref());
					}
				},
				Event::Text(text) if depth == 3 => {
					if let Some(element) = element {
						title.push(element, &text.unescape()?);
					}
				},
				Event::CData(data) if depth == 3 => {
					if let Some(element) = element {
						title.push(element, &String::from_utf8_lossy(&data));
					}
				},
				Event::Empty(empty) if depth == 2 => {
					if let Some(element) = TitleElement::from_name(empty.name().as_ref()) {
						title.push(element, "");
					}
				},
				Event::End(_) => {
					if depth == 2 {
						self.insert_title(std::mem::take(&mut title));
					}
					depth = depth.saturating_sub(1);
					element = None;
				},
				Event::Eof => break,
				_ => {},
			}

			buf.clear();
		}

		Ok(())
	}

	fn insert_title(&mut self, title: TitleCodes) {
		let Some(path) = title.path else {
			log::warn!("Ignoring an ingested title without an AV_Path");
			return;
		};

		let Some(code) = title.itemcode.or(title.item_code) else {
			log::warn!("Ingested title \"{path}\" has no item code");
			return;
		};

		self.codes.insert(path, code);
	}

	/// Record the item code of `path`
	pub fn insert(&mut self, path: impl Into<String>, item_code: impl Into<String>) {
		self.codes.insert(path.into(), item_code.into());
	}

	/// The item code `path` was ingested with
	pub fn get(&self, path: &str) -> Option<&str> {
		self.codes.get(path).map(String::as_str)
	}

	/// The number of known titles
	pub fn len(&self) -> usize {
		self.codes.len()
	}

	/// Whether no titles are known
	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TitleElement {
	Path,
	Itemcode,
	ItemCode,
}

impl TitleElement {
	fn from_name(name: &[u8]) -> Option<Self> {
		match name {
			b"AV_Path" => Some(Self::Path),
			b"Itemcode" => Some(Self::Itemcode),
			b"ItemCode" => Some(Self::ItemCode),
			_ => None,
		}
	}
}

#[derive(Default)]
struct TitleCodes {
	path: Option<String>,
	itemcode: Option<String>,
	item_code: Option<String>,
}

impl TitleCodes {
	fn push(&mut self, element: TitleElement, text: &str) {
		let slot = match element {
			TitleElement::Path => &mut self.path,
			TitleElement::Itemcode => &mut self.itemcode,
			TitleElement::ItemCode => &mut self.item_code,
		};

		slot.get_or_insert_with(String::new).push_str(text);
	}
}

#[cfg(test)]
mod tests {
	use super::{ItemcodeMap, is_ingested_metadata};
	use crate::error::MetadataError;

	use std::fs;

	const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<titles>
  <title>
    <Itemcode>11111111-aaaa</Itemcode>
    <AV_Cat>IDS</AV_Cat>
    <AV_Path>C:\AV\IDS\ID0001.WAV</AV_Path>
  </title>
  <title>
    <ItemCode>22222222-bbbb</ItemCode>
    <AV_Path>C:\AV\PSA\PS&amp;0002.WAV</AV_Path>
  </title>
  <title>
    <AV_Path>C:\AV\PSA\PS0003.WAV</AV_Path>
  </title>
  <title>
    <Itemcode>44444444-dddd</Itemcode>
  </title>
</titles>
"#;

	#[test_log::test]
	fn ingested_names() {
		assert!(is_ingested_metadata("audiovault_metadata_0.xml_DONE"));
		assert!(is_ingested_metadata("AUDIOVAULT_METADATA_07042019_12.XML_DONE"));
		assert!(is_ingested_metadata("dalet_audiovault_1.xml_DONE.bak"));

		assert!(!is_ingested_metadata("audiovault_metadata_0704_1.xml_DONE"));
		assert!(!is_ingested_metadata("audiovault_metadata_0Axml_DONE"));
		assert!(!is_ingested_metadata("old_audiovault_metadata_0.xml_DONE"));
	}

	#[test_log::test]
	fn itemcode_fallback() {
		let mut map = ItemcodeMap::new();
		map.read_document(DOCUMENT.as_bytes()).unwrap();

		assert_eq!(map.len(), 2);
		assert_eq!(map.get(r"C:\AV\IDS\ID0001.WAV"), Some("11111111-aaaa"));
		assert_eq!(map.get(r"C:\AV\PSA\PS&0002.WAV"), Some("22222222-bbbb"));
		assert_eq!(map.get(r"C:\AV\PSA\PS0003.WAV"), None);
	}

	#[test_log::test]
	fn from_ingest_dir() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("audiovault_metadata_07042019_0.xml_DONE"), DOCUMENT).unwrap();
		fs::write(
			dir.path().join("audiovault_metadata_07052019_0.xml"),
			"<titles><title><Itemcode>x</Itemcode><AV_Path>pending</AV_Path></title></titles>",
		)
		.unwrap();
		fs::write(dir.path().join("notes.txt"), "<not xml").unwrap();

		let map = ItemcodeMap::from_ingest_dir(dir.path()).unwrap();
		assert_eq!(map.len(), 2);
		assert_eq!(map.get("pending"), None);
	}

	#[test_log::test]
	fn malformed_document() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("dalet_audiovault_1.xml_DONE");
		fs::write(&path, "<titles><title><AV_Path>a</Itemcode></title></titles>").unwrap();

		let err = ItemcodeMap::from_ingest_dir(dir.path()).unwrap_err();
		assert!(matches!(err, MetadataError::InFile { .. }), "{err}");
		assert!(err.to_string().contains("dalet_audiovault_1.xml_DONE"));
	}
}
