//! Command line entry point of `av-serializer`

use av_serializer::config::{Config, DEFAULT_CONFIG_PATH};
use av_serializer::prompt::LinePrompt;
use av_serializer::serializer::Serializer;
use av_serializer::source::ExportSource;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

/// Serialize the Audiovault titles modified since the last ingest
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path of the configuration file
	#[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
	config: PathBuf,

	/// Increase logging verbosity (-v, -vv, -vvv)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> ExitCode {
	let args = Args::parse();

	let level = match args.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.init();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("[!] {e:#}");
			ExitCode::FAILURE
		},
	}
}

fn run(args: &Args) -> Result<()> {
	let config = Config::load(&args.config)?;
	let mut source = ExportSource::open(&config.access_db)
		.with_context(|| format!("failed to open {}", config.access_db.display()))?;

	let serializer = Serializer::from_config(config)?;
	let today = chrono::Local::now().date_naive();
	let report = serializer.run(&mut source, &mut LinePrompt::stdio(), today)?;

	println!(
		"{} of {} modified titles serialized into {} XMLs",
		report.serialized,
		report.records,
		report.xml_files.len()
	);
	println!("{} media files without a title", report.unmatched);
	if report.media_copied > 0 {
		println!("{} media files copied for ingest", report.media_copied);
	}

	Ok(())
}
