//! Serializes the Audiovault titles modified since the previous run

use crate::batch::write_copy_batch;
use crate::config::Config;
use crate::itemcodes::ItemcodeMap;
use crate::logs::{FailedLog, SuccessLog, failed_log_name, success_log_name};
use crate::media::{self, copy_media, media_location, normcase};
use crate::prompt::Prompt;
use crate::record::{AvRecord, Field};
use crate::source::RecordSource;
use crate::xml::{TITLES_PER_FILE, Title, metadata_file_name, write_titles};

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use uuid::Uuid;

/// The records that have media, with their item codes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
	/// The titles to serialize, in record order
	pub titles: Vec<Title>,
	/// The media files to copy for ingest, keyed by their (case-normalized) path
	pub to_copy: BTreeMap<PathBuf, String>,
}

/// The outcome of [`Serializer::run`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
	/// Records returned by the source
	pub records: usize,
	/// Titles written to the XMLs
	pub serialized: usize,
	/// The XMLs written to the staging directory
	pub xml_files: Vec<PathBuf>,
	/// Media files without a serialized title
	pub unmatched: usize,
	/// Whether the XMLs were copied into the metadata ingest directory
	pub xmls_delivered: bool,
	/// Media files copied into the media ingest directory
	pub media_copied: usize,
	/// The local date of the most recent media modification
	pub last_modified: Option<NaiveDate>,
}

/// Turns Audiovault records into metadata XMLs for the ingest system
pub struct Serializer {
	config: Config,
	itemcodes: ItemcodeMap,
}

impl Serializer {
	/// Create a `Serializer` that reuses the item codes of `itemcodes`
	pub fn new(config: Config, itemcodes: ItemcodeMap) -> Self {
		Self { config, itemcodes }
	}

	/// Create a `Serializer`, collecting the item codes of [`Config::meta_ingest`]
	///
	/// # Errors
	///
	/// * See [`ItemcodeMap::from_ingest_dir`]
	pub fn from_config(config: Config) -> Result<Self> {
		let itemcodes = ItemcodeMap::from_ingest_dir(&config.meta_ingest).with_context(|| {
			format!(
				"failed to read previous ingests in {}",
				config.meta_ingest.display()
			)
		})?;

		Ok(Self::new(config, itemcodes))
	}

	/// The configuration in use
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// The item code of the title at `path`, reusing the one it was previously ingested with
	pub fn item_code(&self, path: &str) -> String {
		self.itemcodes
			.get(path)
			.map_or_else(|| Uuid::new_v4().to_string(), str::to_owned)
	}

	/// Select the records whose media exists in [`Config::media_files`]
	///
	/// Records without media are skipped, they would create titles that can never be played.
	pub fn select(&self, records: Vec<AvRecord>) -> Selection {
		let mut selection = Selection::default();

		for record in records {
			let media_location = media_location(&record);
			let media_path = self.config.media_files.join(&media_location);
			if !media_path.is_file() {
				log::debug!("No media for {}, skipping", media_location.display());
				continue;
			}

			let item_code = self.item_code(&record.get(Field::Path).to_string());
			selection
				.to_copy
				.insert(normcase(&media_path), item_code.clone());
			selection.titles.push(Title {
				item_code,
				media_location,
				record,
			});
		}

		selection
	}

	/// Write `titles` into XMLs of at most [`TITLES_PER_FILE`] titles each, logging every title to
	/// `success_log`
	///
	/// # Errors
	///
	/// * An XML can't be created or written
	/// * Writing to `success_log` fails
	pub fn write_xmls<W>(
		&self,
		titles: &[Title],
		since: NaiveDate,
		success_log: &mut SuccessLog<W>,
	) -> Result<Vec<PathBuf>>
	where
		W: std::io::Write,
	{
		let mut xml_files = Vec::new();

		for (index, chunk) in titles.chunks(TITLES_PER_FILE).enumerate() {
			let path = self.config.staging.join(metadata_file_name(since, index));

			let file = File::create(&path)
				.with_context(|| format!("failed to create {}", path.display()))?;
			write_titles(BufWriter::new(file), chunk).map_err(|e| e.in_file(&path))?;

			for title in chunk {
				success_log
					.write_title(title)
					.context("failed to write the success log")?;
			}

			log::info!("{} titles written to {}", chunk.len(), path.display());
			xml_files.push(path);
		}

		Ok(xml_files)
	}

	/// Serialize every title `source` reports as modified since [`Config::last_ingest`]
	///
	/// This writes the XMLs, the success and failed logs (named after `today`), and the copy
	/// batch file. The XMLs, then the media files, are only copied into the ingest directories
	/// once confirmed through `prompt`.
	///
	/// # Errors
	///
	/// * `last_ingest` is invalid
	/// * `source` fails
	/// * Any file can't be written or copied
	pub fn run<S, P>(&self, source: &mut S, prompt: &mut P, today: NaiveDate) -> Result<Report>
	where
		S: RecordSource,
		P: Prompt,
	{
		let config = &self.config;
		let since = config.last_ingest()?.date();

		let media_staging = config.staging.join("media");
		fs::create_dir_all(&media_staging)
			.with_context(|| format!("failed to create {}", media_staging.display()))?;

		let success_path = config.staging.join(success_log_name(today));
		let failed_path = config.staging.join(failed_log_name(today));
		let mut success_log = SuccessLog::new(BufWriter::new(create(&success_path)?));
		let mut failed_log = FailedLog::new(BufWriter::new(create(&failed_path)?));
		log::info!("Success log at {}", success_path.display());
		log::info!("Failed log at {}", failed_path.display());

		let records = source
			.modified_since(since)
			.context("failed to read the Audiovault records")?;
		let record_count = records.len();
		log::info!("{record_count} records modified since {since}");

		let selection = self.select(records);
		let xml_files = self.write_xmls(&selection.titles, since, &mut success_log)?;
		success_log
			.finish()
			.context("failed to write the success log")?;

		let scan = media::scan(&config.media_files, &selection.to_copy).with_context(|| {
			format!("failed to scan {}", config.media_files.display())
		})?;
		for path in &scan.unmatched {
			failed_log
				.write_path(path)
				.context("failed to write the failed log")?;
		}
		failed_log.finish().context("failed to write the failed log")?;

		let mut report = Report {
			records: record_count,
			serialized: selection.titles.len(),
			xml_files,
			unmatched: scan.unmatched.len(),
			last_modified: scan.most_recent,
			..Report::default()
		};

		if prompt.confirm("Move XMLs to ingest directory?")? {
			for xml in &report.xml_files {
				copy_into(xml, &config.meta_ingest)?;
			}
			report.xmls_delivered = true;

			if let Some(media_ingest) = config.media_ingest() {
				if prompt.confirm("Move media files to media ingest directory?")? {
					report.media_copied = copy_media(&selection.to_copy, media_ingest)
						.with_context(|| format!("failed to copy media to {}", media_ingest.display()))?;
				}
			}
		}

		if let Some(last_modified) = report.last_modified {
			let script = create(&config.copy_bat)?;
			write_copy_batch(
				BufWriter::new(script),
				&config.av_media,
				&config.media_files,
				&config.av_location,
				last_modified,
			)
			.with_context(|| format!("failed to write {}", config.copy_bat.display()))?;
		} else {
			log::warn!(
				"No media in {}, not writing {}",
				config.media_files.display(),
				config.copy_bat.display()
			);
		}

		Ok(report)
	}
}

fn create(path: &Path) -> Result<File> {
	File::create(path).with_context(|| format!("failed to create {}", path.display()))
}

fn copy_into(file: &Path, dir: &Path) -> Result<()> {
	let Some(name) = file.file_name() else {
		return Ok(());
	};

	let target = dir.join(name);
	log::info!("Copying {} to {}", file.display(), target.display());
	fs::copy(file, &target)
		.with_context(|| format!("failed to copy {} to {}", file.display(), dir.display()))?;

	Ok(())
}
