//! GeoIP lookup using a local MaxMind City database.
//!
//! The database is read into memory once at startup and owned by the run;
//! each lookup returns an explicit `Option<GeoRecord>`.

mod loader;
mod lookup;
mod types;

// Re-export public API
pub use lookup::{lookup_ip, GeoIpDatabase, GeoLookup};
pub use types::{GeoIpMetadata, GeoRecord};
