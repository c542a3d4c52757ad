//! Loading of `config.yml`

use crate::error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// The default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Paths and dates for a serializer run
///
/// ```yaml
/// last_ingest: [2019, 7, 4]
/// staging: 'D:\audiovault\staging'
/// meta_ingest: 'D:\dalet\metadata'
/// media_files: 'D:\audiovault\media'
/// media_ingest: 'D:\dalet\media'
/// access_db: 'D:\audiovault\files.txt'
/// copy_bat: 'D:\audiovault\copy.bat'
/// av_media: '\\avserver\audio'
/// av_location: '\\avserver\avair\files.txt'
/// ```
///
/// `media_ingest` may be empty or left out, in which case media files are never copied.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Config {
	/// `[year, month, day, hour, minute, second]` of the previous run, the time may be left out
	pub last_ingest: Vec<u32>,
	/// Directory receiving the XMLs, logs, and staged media
	pub staging: PathBuf,
	/// Directory the ingest system picks metadata XMLs up from
	pub meta_ingest: PathBuf,
	/// Local copy of the Audiovault media, one directory per category
	pub media_files: PathBuf,
	/// Directory the ingest system picks media files up from
	#[serde(default)]
	pub media_ingest: Option<PathBuf>,
	/// Tab-delimited export of the Audiovault `Files` table
	pub access_db: PathBuf,
	/// Path of the generated copy batch file
	pub copy_bat: PathBuf,
	/// Location of the Audiovault media, copied to `media_files`
	pub av_media: String,
	/// Location of the Audiovault database, copied to the working directory
	pub av_location: String,
}

impl Config {
	/// Parse a `Config` from YAML text
	///
	/// `path` is only used for error reporting.
	///
	/// # Errors
	///
	/// * `text` is not valid YAML, or is missing a key
	pub fn from_yaml(text: &str, path: &Path) -> Result<Self, ConfigError> {
		serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Read and parse the config file at `path`
	///
	/// # Errors
	///
	/// * `path` cannot be read
	/// * See [`Config::from_yaml`]
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		log::debug!("Loading config from {}", path.display());

		let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;

		Self::from_yaml(&text, path)
	}

	/// The time of the previous run
	///
	/// # Errors
	///
	/// * `last_ingest` has fewer than 3 or more than 6 components
	/// * The components don't form a valid date and time
	pub fn last_ingest(&self) -> Result<NaiveDateTime, ConfigError> {
		let invalid = || ConfigError::LastIngest(self.last_ingest.clone());

		let [year, month, day, time @ ..] = self.last_ingest.as_slice() else {
			return Err(invalid());
		};
		if time.len() > 3 {
			return Err(invalid());
		}

		let year = i32::try_from(*year).map_err(|_| invalid())?;
		let date = NaiveDate::from_ymd_opt(year, *month, *day).ok_or_else(invalid)?;

		let component = |index: usize| time.get(index).copied().unwrap_or(0);
		date.and_hms_opt(component(0), component(1), component(2))
			.ok_or_else(invalid)
	}

	/// The media ingest directory, if media files should be copied
	pub fn media_ingest(&self) -> Option<&Path> {
		self.media_ingest
			.as_deref()
			.filter(|path| !path.as_os_str().is_empty())
	}
}
