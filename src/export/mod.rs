//! Export of enriched hosts.
//!
//! KML 2.2 is the only output format: one placemark per input host.

mod kml;

pub use kml::{escape_xml, format_coordinates, KmlWriter};
