//! Boat simulation log grader.
//!
//! Replays a `Testing Boats...` log and reports whether everyone made it to
//! Molokai without breaking a rule. The first line of output is always the
//! verdict: success, failure, or an unusable log file.

use std::path::PathBuf;

use anyhow::Result;
use boattest::core::grader::Verdict;
use boattest::exit_codes;
use boattest::grade::grade_file;
use boattest::io::config::{BoatConfig, load_config};
use boattest::logging;
use boattest::report::{Format, render};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "boattest",
    version,
    about = "Check a boat simulation log against the crossing rules"
)]
struct Cli {
    /// Log file produced by a boat simulation run.
    logfile: PathBuf,

    /// TOML file overriding the successor rules or report settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BoatConfig::default(),
    };
    let report = grade_file(&cli.logfile, &config)?;
    print!(
        "{}",
        render(&report, cli.format, config.report.list_ignored)?
    );
    Ok(exit_code(&report.verdict))
}

fn exit_code(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Success { .. } => exit_codes::OK,
        Verdict::Failed(_) => exit_codes::FAILURE,
        Verdict::Unusable { .. } => exit_codes::UNUSABLE,
    }
}
