//! GeoIP data structures.

use std::time::SystemTime;

/// Metadata about the loaded GeoIP database
#[derive(Debug, Clone)]
pub struct GeoIpMetadata {
    /// Path the database was loaded from
    pub source: String,
    /// Database type as reported by the file (e.g. `GeoLite2-City`)
    pub database_type: String,
    /// Database build date/version (extracted from database)
    pub version: String,
    /// When the database was loaded
    pub loaded_at: SystemTime,
}

/// Result of a GeoIP lookup for one address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoRecord {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
}

impl GeoRecord {
    /// Human-readable locality, most specific part first (`"Mountain View, California, US"`).
    ///
    /// Returns `None` when the record carries no locality fields at all.
    pub fn locality(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.region, &self.country_code]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locality_joins_available_parts() {
        let record = GeoRecord {
            city: Some("Mountain View".to_string()),
            region: Some("California".to_string()),
            country_code: Some("US".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.locality().as_deref(),
            Some("Mountain View, California, US")
        );
    }

    #[test]
    fn test_locality_skips_missing_parts() {
        let record = GeoRecord {
            country_code: Some("DE".to_string()),
            ..Default::default()
        };
        assert_eq!(record.locality().as_deref(), Some("DE"));
    }

    #[test]
    fn test_locality_empty_record() {
        assert!(GeoRecord::default().locality().is_none());
    }
}
