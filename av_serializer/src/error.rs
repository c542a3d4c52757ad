//! Errors of the metadata XML and configuration handling

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while reading or writing metadata XMLs
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
	/// Reading or writing failed
	#[error(transparent)]
	Io(#[from] io::Error),
	/// The XML is malformed
	#[error("malformed metadata XML: {0}")]
	Xml(#[from] quick_xml::Error),
	/// The XML contains an invalid escape sequence
	#[error("malformed metadata XML: {0}")]
	Escape(#[from] quick_xml::escape::EscapeError),
	/// An error tied to a specific file
	#[error("{}: {source}", .path.display())]
	InFile {
		/// The file being read or written
		path: PathBuf,
		/// The underlying error
		#[source]
		source: Box<MetadataError>,
	},
}

impl MetadataError {
	pub(crate) fn in_file(self, path: &Path) -> Self {
		match self {
			Self::InFile { .. } => self,
			source => Self::InFile {
				path: path.to_path_buf(),
				source: Box::new(source),
			},
		}
	}
}

/// Errors that can occur while loading a [`Config`](crate::config::Config)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The file could not be read
	#[error("failed to read config file {}", .path.display())]
	Read {
		/// The path of the config file
		path: PathBuf,
		/// The underlying error
		#[source]
		source: io::Error,
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
	/// `last_ingest` is not a valid date
	#[error("invalid last_ingest {0:?}, expected [year, month, day, hour, minute, second]")]
	LastIngest(Vec<u32>),
}
