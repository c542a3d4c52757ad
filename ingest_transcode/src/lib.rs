//! Prepares the batch transcode of media files whose ingest failed.
//!
//! For every file in the configured failure directory, the WAV format information is read and
//! logged to a dated, tab-delimited file in the staging directory, and a set of batch commands is
//! generated to transcode the file, delete the original, and move the result to the media ingest
//! directory.
//!
//! ```rust,no_run
//! use ingest_transcode::config::{Config, DEFAULT_CONFIG_PATH};
//! use ingest_transcode::planner::Planner;
//! use wavefmt::config::ParseOptions;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load(DEFAULT_CONFIG_PATH.as_ref())?;
//! let today = chrono::Local::now().date_naive();
//!
//! let summary = Planner::new(config, ParseOptions::new()).run(today)?;
//! println!("{} files ready to transcode", summary.processed);
//! # Ok(()) }
//! ```

pub mod batch;
pub mod config;
pub mod inspect;
pub mod planner;
pub mod report;
