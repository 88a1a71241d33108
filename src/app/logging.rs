//! Progress logging utilities.

use log::{info, warn};

/// Logs throughput for the completed run.
pub fn log_run_summary(start_time: std::time::Instant, collected: usize, lost: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        collected as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Collected {} record(s) in {:.2} seconds (~{:.2} records/sec)",
        collected, elapsed_secs, rate
    );
    if lost > 0 {
        warn!("{lost} record(s) lost to channel-put timeouts");
    }
}
