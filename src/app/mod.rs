//! Run-level observability helpers.

mod logging;
mod statistics;

pub use logging::log_run_summary;
pub use statistics::log_error_statistics;
