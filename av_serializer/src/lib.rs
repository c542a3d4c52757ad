//! Serializes Audiovault title metadata into XMLs for the media ingest system.
//!
//! The records of every title modified since the previous run are read from a [`RecordSource`].
//! Titles whose media file exists in the local media copy are written, at most
//! [`TITLES_PER_FILE`] to a file, to metadata XMLs in the staging directory. Titles that were
//! already ingested keep their item code, new ones get a random UUID.
//!
//! ```rust,no_run
//! use av_serializer::config::{Config, DEFAULT_CONFIG_PATH};
//! use av_serializer::prompt::LinePrompt;
//! use av_serializer::serializer::Serializer;
//! use av_serializer::source::ExportSource;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load(DEFAULT_CONFIG_PATH.as_ref())?;
//! let mut source = ExportSource::open(&config.access_db)?;
//! let today = chrono::Local::now().date_naive();
//!
//! let report = Serializer::from_config(config)?.run(&mut source, &mut LinePrompt::stdio(), today)?;
//! println!("{} titles serialized", report.serialized);
//! # Ok(()) }
//! ```
//!
//! [`RecordSource`]: crate::source::RecordSource
//! [`TITLES_PER_FILE`]: crate::xml::TITLES_PER_FILE

pub mod batch;
pub mod config;
pub mod error;
pub mod itemcodes;
pub mod logs;
pub mod media;
pub mod prompt;
pub mod record;
pub mod serializer;
pub mod source;
pub mod xml;
