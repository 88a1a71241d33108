//! Error taxonomy and processing statistics.
//!
//! Errors in the pipeline fall into five families: request errors (fetch),
//! extraction errors (per-field, recovered to defaults), unexpected worker
//! errors, channel-put timeouts, and output-write errors.

mod categorization;
mod stats;
mod types;

pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, OutputError};
