//! Command line entry point of `ingest-transcode`

use ingest_transcode::config::{Config, DEFAULT_CONFIG_PATH};
use ingest_transcode::planner::Planner;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use wavefmt::config::{ParseOptions, ParsingMode};

/// Prepare the batch transcode of failed media ingests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	#[command(subcommand)]
	command: Option<Command>,

	/// Path of the configuration file
	#[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH, global = true)]
	config: PathBuf,

	/// Reject files that aren't well-formed RIFF/WAVE files
	#[arg(long, default_value_t = false, global = true)]
	strict: bool,

	/// Increase logging verbosity (-v, -vv, -vvv)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Write the format log and transcode batch file (default)
	Plan,

	/// Print the format information of individual files
	Inspect {
		/// Files to read
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},
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
		Ok(code) => code,
		Err(e) => {
			eprintln!("[!] {e:#}");
			ExitCode::FAILURE
		},
	}
}

fn run(args: &Args) -> Result<ExitCode> {
	let parse_options = if args.strict {
		ParseOptions::new().parsing_mode(ParsingMode::Strict)
	} else {
		ParseOptions::new()
	};

	match &args.command {
		None | Some(Command::Plan) => plan(args, parse_options),
		Some(Command::Inspect { files }) => inspect(files, parse_options),
	}
}

fn plan(args: &Args, parse_options: ParseOptions) -> Result<ExitCode> {
	let config = Config::load(&args.config)?;
	let planner = Planner::new(config, parse_options);

	let today = chrono::Local::now().date_naive();
	let summary = planner.run(today)?;

	println!(
		"{} files ready to transcode, {} skipped",
		summary.processed, summary.skipped
	);
	println!(
		"Batch file written to {}",
		planner.config().transcode_bat.display()
	);

	Ok(ExitCode::SUCCESS)
}

fn inspect(files: &[PathBuf], parse_options: ParseOptions) -> Result<ExitCode> {
	let stdout = std::io::stdout().lock();
	let inspection = ingest_transcode::inspect::inspect(files, parse_options, stdout)
		.context("failed to write to stdout")?;

	for (path, e) in &inspection.failures {
		eprintln!("[!] {}: {e}", path.display());
	}

	Ok(if inspection.is_success() {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}
