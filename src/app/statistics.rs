//! Failure statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{LookupFailure, ProcessingStats};

/// Logs one line per lookup failure category that occurred.
pub fn log_failure_statistics(stats: &ProcessingStats) {
    if stats.total() == 0 {
        info!("All lookups succeeded");
        return;
    }
    for failure in LookupFailure::iter() {
        let count = stats.get_count(failure);
        if count > 0 {
            info!("{}: {}", failure.label(), count);
        }
    }
}
