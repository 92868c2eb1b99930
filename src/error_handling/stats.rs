//! Processing statistics tracking.
//!
//! Counts per-host lookup failures so a run can report how many placemarks
//! were written with degraded fields.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::LookupFailure;

/// Lookup failure counters, one per `LookupFailure` variant.
///
/// All counters are initialized to zero on creation. Counters are atomic so
/// they can be bumped through `&self` while `HostEnricher` stays `Sync`. Each
/// counter is independent, so every access is `Relaxed`.
pub struct ProcessingStats {
    failures: HashMap<LookupFailure, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in LookupFailure::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }

        ProcessingStats { failures }
    }

    /// Increment a failure counter.
    pub fn increment(&self, failure: LookupFailure) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                failure
            );
        }
    }

    /// Get the count for a failure type.
    pub fn get_count(&self, failure: LookupFailure) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Total failures across all categories.
    pub fn total(&self) -> usize {
        self.failures.values().map(|c| c.load(Ordering::Relaxed)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
