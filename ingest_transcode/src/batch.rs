//! Generation of the transcode batch script

use crate::config::Config;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The paths involved in transcoding a single failed ingest
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscodeJob {
	/// The failed file, deleted once transcoded
	pub source: PathBuf,
	/// Where the transcoder writes its output
	pub staging: PathBuf,
	/// Where the output is moved for re-ingest
	pub destination: PathBuf,
}

impl TranscodeJob {
	/// Create the job for `file_name`, a file inside [`Config::failure_directory`]
	pub fn new(config: &Config, file_name: &Path) -> Self {
		Self {
			source: config.failure_directory.join(file_name),
			staging: config.staging.join(file_name),
			destination: config.media_ingest.join(file_name),
		}
	}
}

/// Writes the commands of each [`TranscodeJob`]
///
/// Every job produces three commands: run the transcoder from the source to the staging path,
/// delete the source, then move the staged output to its destination.
pub struct BatchScript<W> {
	writer: W,
	transcoder: String,
	arguments: String,
	jobs: usize,
}

impl<W> BatchScript<W>
where
	W: Write,
{
	/// Create a `BatchScript` invoking `transcoder` with `arguments`
	pub fn new(writer: W, transcoder: impl Into<String>, arguments: impl Into<String>) -> Self {
		Self {
			writer,
			transcoder: transcoder.into(),
			arguments: arguments.into(),
			jobs: 0,
		}
	}

	/// Create a `BatchScript` using the transcoder settings of `config`
	pub fn from_config(writer: W, config: &Config) -> Self {
		Self::new(
			writer,
			config.ffmpeg_location.as_str(),
			config.ffmpeg_command.as_str(),
		)
	}

	/// Append the commands of `job`
	///
	/// # Errors
	///
	/// * Writing to the underlying writer fails
	pub fn push(&mut self, job: &TranscodeJob) -> io::Result<()> {
		let TranscodeJob {
			source,
			staging,
			destination,
		} = job;

		writeln!(
			self.writer,
			"{} -i \"{}\" {} \"{}\"",
			self.transcoder,
			source.display(),
			self.arguments,
			staging.display()
		)?;
		writeln!(self.writer, "del /f \"{}\"", source.display())?;
		writeln!(
			self.writer,
			"move \"{}\" \"{}\"",
			staging.display(),
			destination.display()
		)?;

		self.jobs += 1;
		Ok(())
	}

	/// The number of jobs written
	pub fn jobs(&self) -> usize {
		self.jobs
	}

	/// Flush and return the underlying writer
	///
	/// # Errors
	///
	/// * Flushing fails
	pub fn finish(mut self) -> io::Result<W> {
		self.writer.flush()?;
		Ok(self.writer)
	}
}
