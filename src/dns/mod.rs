//! DNS resolution.
//!
//! Forward lookups (hostname → IPv4) using `hickory-resolver` with the system
//! resolver configuration.

mod resolution;

// Re-export public API
pub use resolution::{resolve_host_to_ip, HostResolver};
