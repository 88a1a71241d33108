//! Configuration: CLI options, library config, and operational constants.

mod constants;
mod types;

pub use constants::{
    CHANNEL_PUT_TIMEOUT, CSV_HEADER, DEFAULT_CHANNEL_CAPACITY, DEFAULT_OUTPUT_FILE,
    DEFAULT_TARGETS, DEFAULT_USER_AGENT, FETCH_TIMEOUT,
};
pub use types::{Cli, Config, LogFormat, LogLevel};
