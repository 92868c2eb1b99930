//! Error handling and processing statistics.
//!
//! This module provides:
//! - Fatal error types (logger/client initialization, GeoIP database, input
//!   and output files)
//! - Per-host lookup failure categories and their counters
//!
//! Fatal errors stop the run before the output file is created. Lookup
//! failures are only counted: the host still gets a placemark.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ExportError, GeoIpError, InitializationError, LookupFailure};
