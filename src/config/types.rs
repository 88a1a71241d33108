//! Configuration types and CLI options.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CHANNEL_PUT_TIMEOUT, DEFAULT_OUTPUT_FILE, DEFAULT_TARGETS, DEFAULT_USER_AGENT, FETCH_TIMEOUT,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Constructed programmatically, or from [`Cli::into_config`] in the binary.
///
/// # Examples
///
/// ```no_run
/// use site_survey::Config;
///
/// let config = Config {
///     targets: vec!["https://www.example.com".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URLs to survey. One concurrent worker is spawned per target.
    pub targets: Vec<String>,

    /// Output CSV path.
    pub output: PathBuf,

    /// Per-request fetch timeout.
    pub fetch_timeout: Duration,

    /// Upper bound on a worker's blocking put into the result channel.
    pub put_timeout: Duration,

    /// Result channel capacity. `None` sizes the channel to hold every
    /// target's record so the drain can happen after join-all.
    pub channel_capacity: Option<usize>,

    /// HTTP User-Agent header value.
    pub user_agent: String,

    /// When true, a record lost to a channel-put timeout fails the whole run
    /// (after the CSV for the delivered records has been written).
    pub fail_on_lost_record: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fetch_timeout: FETCH_TIMEOUT,
            put_timeout: CHANNEL_PUT_TIMEOUT,
            channel_capacity: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fail_on_lost_record: false,
        }
    }
}

/// Command-line options for the `site_survey` binary.
#[derive(Debug, Parser)]
#[command(
    name = "site_survey",
    version,
    about = "Fetches a set of web pages concurrently and writes page metadata to a CSV file."
)]
pub struct Cli {
    /// File with one target URL per line (defaults to the built-in target list)
    #[arg(value_name = "TARGETS_FILE")]
    pub file: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Per-request fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT.as_secs())]
    pub fetch_timeout_seconds: u64,

    /// Upper bound in seconds on a worker's blocking channel put
    #[arg(long, default_value_t = CHANNEL_PUT_TIMEOUT.as_secs())]
    pub put_timeout_seconds: u64,

    /// Result channel capacity (defaults to the number of targets)
    #[arg(long)]
    pub channel_capacity: Option<usize>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Treat a record lost to a channel-put timeout as a run failure
    #[arg(long)]
    pub fail_on_lost_record: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Resolves CLI options into a library [`Config`], reading the targets
    /// file if one was given. Blank lines and `#` comments are skipped.
    pub fn into_config(self) -> anyhow::Result<Config> {
        let targets = match &self.file {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read targets file {}", path.display()))?;
                let targets: Vec<String> = contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(str::to_string)
                    .collect();
                if targets.is_empty() {
                    anyhow::bail!("No targets found in {}", path.display());
                }
                targets
            }
            None => DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Config {
            targets,
            output: self.output,
            fetch_timeout: Duration::from_secs(self.fetch_timeout_seconds),
            put_timeout: Duration::from_secs(self.put_timeout_seconds),
            channel_capacity: self.channel_capacity,
            user_agent: self.user_agent,
            fail_on_lost_record: self.fail_on_lost_record,
        })
    }
}
