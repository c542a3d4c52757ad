//! The local copy of the Audiovault media
//!
//! Media is kept one directory per Audiovault category, named after the file name of the
//! record's `Path`.

use crate::record::{AvRecord, Field};

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate};

/// The last component of an Audiovault path
///
/// Audiovault paths are Windows paths, so both separators are accepted on every platform.
///
/// # Examples
///
/// ```rust
/// use av_serializer::media::file_name;
///
/// assert_eq!(file_name(r"C:\AV\IDS\ID0001.WAV"), "ID0001.WAV");
/// assert_eq!(file_name("ID0001.WAV"), "ID0001.WAV");
/// ```
pub fn file_name(path: &str) -> &str {
	path.rsplit(['\\', '/']).next().unwrap_or(path)
}

/// Where the media of `record` is expected, relative to the media directory
pub fn media_location(record: &AvRecord) -> PathBuf {
	let category = record.get(Field::Cat).to_string();
	let path = record.get(Field::Path).to_string();

	Path::new(&category).join(file_name(&path))
}

/// Normalize the case of `path` for comparisons, on platforms with case-insensitive paths
pub fn normcase(path: &Path) -> PathBuf {
	if cfg!(windows) {
		PathBuf::from(path.to_string_lossy().to_lowercase())
	} else {
		path.to_path_buf()
	}
}

/// The outcome of [`scan`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaScan {
	/// The local date of the most recent modification, `None` if there are no files
	pub most_recent: Option<NaiveDate>,
	/// Files that were not selected, relative to the media directory
	pub unmatched: Vec<PathBuf>,
}

/// Scan the category directories of `media` for files that are not keys of `selected`
///
/// Only the direct children of each category directory are considered. Files directly inside
/// `media` are ignored.
///
/// # Errors
///
/// * A directory can't be listed
/// * The modification time of a file can't be read
pub fn scan<V>(media: &Path, selected: &BTreeMap<PathBuf, V>) -> io::Result<MediaScan> {
	let mut most_recent: Option<SystemTime> = None;
	let mut unmatched = Vec::new();

	for category in sorted_entries(media)? {
		let directory = media.join(&category);
		if !directory.is_dir() {
			log::debug!("Ignoring {}, not a category directory", directory.display());
			continue;
		}

		for name in sorted_entries(&directory)? {
			let full_name = directory.join(&name);

			let modified = fs::metadata(&full_name)?.modified()?;
			if most_recent.is_none_or(|recent| modified > recent) {
				most_recent = Some(modified);
			}

			if !selected.contains_key(&normcase(&full_name)) {
				unmatched.push(Path::new(&category).join(name));
			}
		}
	}

	Ok(MediaScan {
		most_recent: most_recent.map(|time| DateTime::<Local>::from(time).date_naive()),
		unmatched,
	})
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
	let mut names = Vec::new();
	for entry in fs::read_dir(dir)? {
		names.push(PathBuf::from(entry?.file_name()));
	}

	names.sort();
	Ok(names)
}

/// Copy every file of `to_copy` into `destination`, named after its item code
///
/// The extension of the source is kept.
///
/// # Errors
///
/// * A copy fails
pub fn copy_media(to_copy: &BTreeMap<PathBuf, String>, destination: &Path) -> io::Result<usize> {
	for (source, item_code) in to_copy {
		let mut name = std::ffi::OsString::from(item_code);
		if let Some(extension) = source.extension() {
			name.push(".");
			name.push(extension);
		}
		let target = destination.join(name);

		log::info!("Copying {} to {}", source.display(), target.display());
		fs::copy(source, &target)?;
	}

	Ok(to_copy.len())
}

#[cfg(test)]
mod tests {
	use super::{copy_media, media_location, normcase, scan};
	use crate::record::{AvRecord, Field};

	use std::collections::BTreeMap;
	use std::fs;
	use std::path::{Path, PathBuf};

	#[test_log::test]
	fn location() {
		let record = AvRecord::new()
			.with(Field::Cat, "IDS")
			.with(Field::Path, r"\\avserver\audio\IDS\ID0001.WAV");
		assert_eq!(media_location(&record), Path::new("IDS").join("ID0001.WAV"));

		// Missing values are looked up by their display value
		assert_eq!(media_location(&AvRecord::new()), Path::new("None").join("None"));
	}

	#[test_log::test]
	fn scan_media() {
		let media = tempfile::tempdir().unwrap();
		fs::create_dir(media.path().join("IDS")).unwrap();
		fs::create_dir(media.path().join("PSA")).unwrap();
		fs::write(media.path().join("IDS").join("ID0001.WAV"), b"a").unwrap();
		fs::write(media.path().join("IDS").join("ID0002.WAV"), b"b").unwrap();
		fs::write(media.path().join("PSA").join("PS0001.WAV"), b"c").unwrap();
		fs::write(media.path().join("stray.txt"), b"d").unwrap();

		let mut selected = BTreeMap::new();
		selected.insert(normcase(&media.path().join("IDS").join("ID0001.WAV")), ());

		let scan = scan(media.path(), &selected).unwrap();
		assert_eq!(
			scan.unmatched,
			[
				Path::new("IDS").join("ID0002.WAV"),
				Path::new("PSA").join("PS0001.WAV")
			]
		);
		assert_eq!(scan.most_recent, Some(chrono::Local::now().date_naive()));
	}

	#[test_log::test]
	fn scan_empty() {
		let media = tempfile::tempdir().unwrap();
		let scan = scan(media.path(), &BTreeMap::<PathBuf, ()>::new()).unwrap();
		assert_eq!(scan.most_recent, None);
		assert!(scan.unmatched.is_empty());
	}

	#[test_log::test]
	fn copy_by_item_code() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("ID0001.WAV");
		let bare = dir.path().join("README");
		fs::write(&source, b"audio").unwrap();
		fs::write(&bare, b"text").unwrap();

		let destination = dir.path().join("ingest");
		fs::create_dir(&destination).unwrap();

		let mut to_copy = BTreeMap::new();
		to_copy.insert(source, String::from("abc"));
		to_copy.insert(bare, String::from("def"));

		assert_eq!(copy_media(&to_copy, &destination).unwrap(), 2);
		assert_eq!(fs::read(destination.join("abc.WAV")).unwrap(), b"audio");
		assert_eq!(fs::read(destination.join("def")).unwrap(), b"text");
	}
}
