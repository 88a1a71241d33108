//! End-of-run error statistics reporting.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs one line per error type that fired during the run.
pub fn log_error_statistics(stats: &ProcessingStats) {
    let total = stats.total_errors();
    if total == 0 {
        info!("No errors recorded");
        return;
    }
    info!("Recorded {total} error(s):");
    for error_type in ErrorType::iter() {
        let count = stats.get_error_count(error_type);
        if count > 0 {
            info!("  {error_type}: {count}");
        }
    }
}
