//! site_survey library: concurrent page survey pipeline.
//!
//! Fetches a fixed set of web pages in parallel, extracts metadata (title,
//! meta description, paragraph count, outbound `https://` links), funnels one
//! record per target through a bounded result channel, and writes a CSV.
//!
//! # Example
//!
//! ```no_run
//! use site_survey::{run_survey, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     targets: vec!["https://www.example.com".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_survey(config).await?;
//! println!(
//!     "Surveyed {} targets: {} succeeded, {} failed",
//!     report.total_targets, report.successful, report.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

mod app;
mod channel;
pub mod config;
mod error_handling;
pub mod export;
mod fetch;
mod html;
pub mod initialization;
mod models;

// Re-export public API
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use models::{PageSummary, SiteOutcome, SiteRecord};
pub use run::{run_survey, SurveyReport};

// Internal run module (dispatcher + collector)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{anyhow, Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};

    use crate::app::{log_error_statistics, log_run_summary};
    use crate::channel::result_channel;
    use crate::config::{Config, DEFAULT_CHANNEL_CAPACITY};
    use crate::error_handling::{ErrorType, ProcessingStats};
    use crate::export::write_csv;
    use crate::fetch::survey_site;
    use crate::initialization::init_client;

    /// Results of a completed survey run.
    #[derive(Debug, Clone)]
    pub struct SurveyReport {
        /// Number of targets dispatched
        pub total_targets: usize,
        /// Number of targets with a success record
        pub successful: usize,
        /// Number of targets with a failure record
        pub failed: usize,
        /// Records lost before collection (channel-put timeouts or panicked
        /// workers); always 0 with a default-sized channel
        pub lost_records: usize,
        /// Path of the written CSV
        pub output: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a survey with the provided configuration.
    ///
    /// Spawns one worker per target, waits for all of them, drains the result
    /// channel, and writes the CSV. Per-target failures become failure rows;
    /// only initialization and output-write problems (or a lost record when
    /// `fail_on_lost_record` is set) fail the run itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, if the output
    /// file cannot be written, or if a record was lost and
    /// `config.fail_on_lost_record` is set.
    pub async fn run_survey(config: Config) -> Result<SurveyReport> {
        let start_time = Instant::now();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let stats = Arc::new(ProcessingStats::new());

        // Sized to hold every record by default: the collector only starts
        // draining after join-all, so a smaller capacity makes workers block
        // in their bounded puts.
        let capacity = config
            .channel_capacity
            .unwrap_or_else(|| config.targets.len().max(DEFAULT_CHANNEL_CAPACITY));
        let (sender, receiver) = result_channel(capacity, config.put_timeout);

        info!("Dispatching {} target(s)", config.targets.len());
        let mut tasks = FuturesUnordered::new();
        for target in &config.targets {
            let url: Arc<str> = Arc::from(target.as_str());
            let client = Arc::clone(&client);
            let sender = sender.clone();
            let stats = Arc::clone(&stats);
            tasks.push(tokio::spawn(survey_site(url, client, sender, stats)));
        }
        // The drain below ends when the last sender is gone; the dispatcher
        // must not hold one past this point.
        drop(sender);

        let mut lost_records = 0usize;
        while let Some(task_result) = tasks.next().await {
            match task_result {
                Ok(delivered) => {
                    if !delivered {
                        lost_records += 1;
                    }
                }
                Err(join_error) => {
                    // survey_site has its own catch-all, so this only fires
                    // for aborts or panics outside that boundary.
                    lost_records += 1;
                    warn!("Worker task failed to complete: {join_error:?}");
                }
            }
        }

        // Join-all happens before the drain: every delivered record is
        // already buffered, so this collects all of them in arrival order.
        let records = receiver.drain().await;
        let successful = records.iter().filter(|r| r.is_success()).count();
        let failed = records.len() - successful;

        if let Err(e) = write_csv(&records, &config.output) {
            stats.increment_error(ErrorType::CsvWriteError);
            log::error!("Error saving results to {}: {e}", config.output.display());
            log_error_statistics(&stats);
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to save results to {}", config.output.display())));
        }

        log_error_statistics(&stats);
        log_run_summary(start_time, records.len(), lost_records);

        if lost_records > 0 && config.fail_on_lost_record {
            return Err(anyhow!(
                "{lost_records} of {} record(s) lost before collection",
                config.targets.len()
            ));
        }

        Ok(SurveyReport {
            total_targets: config.targets.len(),
            successful,
            failed,
            lost_records,
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
