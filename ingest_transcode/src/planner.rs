//! Scans the failure directory and writes the format log and batch script

use crate::batch::{BatchScript, TranscodeJob};
use crate::config::Config;
use crate::report::{FormatLog, log_file_path};

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use wavefmt::config::ParseOptions;

/// The outcome of a [`Planner::run`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
	/// Files with a log row and transcode commands
	pub processed: usize,
	/// Files whose header could not be read
	pub skipped: usize,
}

/// Prepares the transcode of every file in [`Config::failure_directory`]
pub struct Planner {
	config: Config,
	parse_options: ParseOptions,
}

impl Planner {
	/// Create a `Planner`
	pub fn new(config: Config, parse_options: ParseOptions) -> Self {
		Self {
			config,
			parse_options,
		}
	}

	/// The configuration in use
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Write the format log (named after `date`) and the batch script
	///
	/// Both files are truncated first. A file whose format information can't be read is skipped
	/// entirely, so no commands are generated that would delete it.
	///
	/// # Errors
	///
	/// * The failure directory can't be listed
	/// * The log or batch file can't be created or written
	pub fn run(&self, date: NaiveDate) -> Result<Summary> {
		let log_path = log_file_path(&self.config.staging, date);

		log::info!("Writing transcode batch file {}", self.config.transcode_bat.display());
		let batch_file = File::create(&self.config.transcode_bat).with_context(|| {
			format!(
				"failed to create batch file {}",
				self.config.transcode_bat.display()
			)
		})?;
		let mut script = BatchScript::from_config(BufWriter::new(batch_file), &self.config);

		log::info!("Writing format log {}", log_path.display());
		let log_file = File::create(&log_path)
			.with_context(|| format!("failed to create log file {}", log_path.display()))?;
		let mut format_log = FormatLog::new(BufWriter::new(log_file))
			.with_context(|| format!("failed to write log file {}", log_path.display()))?;

		let mut summary = Summary::default();
		for file_name in failed_ingests(&self.config.failure_directory)? {
			let job = TranscodeJob::new(&self.config, &file_name);
			let item_code = item_code(&file_name);

			let info = match wavefmt::read_from_path(&job.source, self.parse_options) {
				Ok(info) => info,
				Err(e) => {
					log::warn!("Skipping {}: {e}", job.source.display());
					summary.skipped += 1;
					continue;
				},
			};

			log::debug!("{item_code}: {info:?}");

			format_log
				.write_row(&item_code, &info)
				.with_context(|| format!("failed to write log file {}", log_path.display()))?;
			script.push(&job).with_context(|| {
				format!(
					"failed to write batch file {}",
					self.config.transcode_bat.display()
				)
			})?;

			summary.processed += 1;
		}

		format_log
			.finish()
			.with_context(|| format!("failed to write log file {}", log_path.display()))?;
		script.finish().with_context(|| {
			format!(
				"failed to write batch file {}",
				self.config.transcode_bat.display()
			)
		})?;

		Ok(summary)
	}
}

/// The names of the regular files in `dir`, sorted
///
/// Symbolic links are resolved, so a link to a regular file is included. Directories and dangling
/// links are skipped with a warning.
///
/// # Errors
///
/// * `dir` can't be read
pub fn failed_ingests(dir: &Path) -> Result<Vec<PathBuf>> {
	let mut names = Vec::new();

	let entries =
		fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
	for entry in entries {
		let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
		let path = entry.path();

		// Symlinks are followed, a link to a file is queued like the file itself
		match fs::metadata(&path) {
			Ok(metadata) if metadata.is_file() => {},
			Ok(_) => {
				log::warn!("Ignoring non-file entry {}", path.display());
				continue;
			},
			Err(e) => {
				log::warn!("Ignoring unreadable entry {}: {e}", path.display());
				continue;
			},
		}

		names.push(PathBuf::from(entry.file_name()));
	}

	names.sort();
	Ok(names)
}

/// The item code of a failed ingest: its file name without the extension
///
/// # Examples
///
/// ```rust
/// use ingest_transcode::planner::item_code;
/// use std::path::Path;
///
/// assert_eq!(item_code(Path::new("KX0001.wav")), "KX0001");
/// assert_eq!(item_code(Path::new("failed/KX0002.WAV")), "KX0002");
/// ```
pub fn item_code(file_name: &Path) -> String {
	file_name
		.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_default()
}
