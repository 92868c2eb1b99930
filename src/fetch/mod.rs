//! Best-effort HTTP probing of resolved hosts.

mod headers;

// Re-export public API
pub use headers::{fetch_response_headers, format_headers, HeaderProbe};
