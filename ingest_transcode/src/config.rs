//! Loading of `config.yml`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Errors that can occur while loading a [`Config`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The file could not be read
	#[error("failed to read config file {}", .path.display())]
	Read {
		/// The path of the config file
		path: PathBuf,
		/// The underlying error
		#[source]
		source: std::io::Error,
	},
	/// The file is not valid YAML, or a required key is missing
	#[error("invalid config file {}: {source}", .path.display())]
	Parse {
		/// The path of the config file
		path: PathBuf,
		/// The underlying error
		#[source]
		source: serde_yaml::Error,
	},
}

/// Paths and transcoder settings for a run
///
/// All keys are required.
///
/// ```yaml
/// failure_directory: 'D:\ingest\failed'
/// staging: 'D:\ingest\staging'
/// media_ingest: 'D:\ingest\media'
/// transcode_bat: 'D:\ingest\transcode.bat'
/// ffmpeg_location: 'C:\ffmpeg\bin\ffmpeg.exe'
/// ffmpeg_command: '-acodec pcm_s16le -ar 48000'
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Config {
	/// Directory holding the media files whose ingest failed
	pub failure_directory: PathBuf,
	/// Directory receiving the transcoded files and the format log
	pub staging: PathBuf,
	/// Directory the transcoded files are moved to once complete
	pub media_ingest: PathBuf,
	/// Path of the generated batch script
	pub transcode_bat: PathBuf,
	/// Path of the transcoder executable
	pub ffmpeg_location: String,
	/// Arguments placed between the input and output files of the transcoder
	pub ffmpeg_command: String,
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
}
