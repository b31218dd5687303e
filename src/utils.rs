//! Utility functions
//!
//! Helpers for the progress messages written to stderr.

use std::time::Duration;

/// Format elapsed time as e.g. `2 min 5 sec` or `0.5 sec`
pub fn format_elapsed(dur: Duration) -> String {
    let secs = dur.as_secs();
    if secs >= 60 {
        format!("{} min {} sec", secs / 60, secs % 60)
    } else {
        format!("{:.1} sec", dur.as_secs_f64())
    }
}

/// Percentage of `part` in `total`, 0 for an empty run
#[inline]
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
