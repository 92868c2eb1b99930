//! User-facing terminal output.
//!
//! Everything here prints to stdout with `println!`; diagnostics go through
//! the `log` facade instead.

pub mod banner;
pub mod progress;
pub mod statistics;

// Re-export public API
pub use banner::{print_banner, print_missing_geoip};
pub use progress::{print_done, print_getting, print_settings, print_writing};
pub use statistics::log_failure_statistics;
