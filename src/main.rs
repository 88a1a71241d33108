//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_survey` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_survey::initialization::init_logger_with;
use site_survey::{run_survey, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = cli.log_level.clone();
    let log_format = cli.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let config = cli.into_config().context("Invalid configuration")?;

    match run_survey(config).await {
        Ok(report) => {
            println!(
                "Surveyed {} target{} ({} succeeded, {} failed) in {:.1}s",
                report.total_targets,
                if report.total_targets == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            println!("Results saved to {}", report.output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("site_survey error: {:#}", e);
            process::exit(1);
        }
    }
}
