//! IP address lookup.

use maxminddb::Reader;
use std::net::IpAddr;
use std::path::Path;

use super::loader::load_from_file;
use super::types::{GeoIpMetadata, GeoRecord};
use crate::error_handling::GeoIpError;

/// Maps an IP address to a geographic record.
///
/// A missing record and an unparseable address both yield `None`.
pub trait GeoLookup {
    fn locate(&self, ip: &str) -> Option<GeoRecord>;
}

/// An opened GeoIP City database.
pub struct GeoIpDatabase {
    reader: Reader<Vec<u8>>,
    metadata: GeoIpMetadata,
}

impl GeoIpDatabase {
    /// Opens the database at `path`.
    ///
    /// Called once at startup, so a missing or corrupt file is reported before
    /// any host is processed.
    pub async fn open(path: &Path) -> Result<Self, GeoIpError> {
        let (reader, metadata) = load_from_file(path).await?;
        log::info!(
            "GeoIP database loaded: {} ({})",
            metadata.database_type,
            metadata.version
        );
        Ok(Self { reader, metadata })
    }

    pub fn metadata(&self) -> &GeoIpMetadata {
        &self.metadata
    }
}

impl GeoLookup for GeoIpDatabase {
    fn locate(&self, ip: &str) -> Option<GeoRecord> {
        lookup_ip(&self.reader, ip)
    }
}

/// Looks up an IP address in a City database.
///
/// Returns `None` if the address does not parse or the database has no record.
pub fn lookup_ip<T: AsRef<[u8]>>(reader: &Reader<T>, ip: &str) -> Option<GeoRecord> {
    let ip_addr: IpAddr = ip.parse().ok()?;

    let city_lookup = match reader.lookup(ip_addr) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("GeoIP lookup failed for {ip}: {e}");
            return None;
        }
    };

    if !city_lookup.has_data() {
        return None;
    }

    let city_result: maxminddb::geoip2::City = match city_lookup.decode() {
        Ok(Some(city)) => city,
        Ok(None) => return None,
        Err(e) => {
            log::debug!("Failed to decode GeoIP record for {ip}: {e}");
            return None;
        }
    };

    Some(GeoRecord {
        longitude: city_result.location.longitude,
        latitude: city_result.location.latitude,
        city: city_result.city.names.english.map(|s| s.to_string()),
        region: city_result
            .subdivisions
            .first()
            .and_then(|subdivision| subdivision.names.english)
            .map(|s| s.to_string()),
        country_code: city_result.country.iso_code.map(|s| s.to_string()),
        country_name: city_result.country.names.english.map(|s| s.to_string()),
    })
}
