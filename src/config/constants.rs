//! Configuration constants.
//!
//! Defaults for every CLI option plus the fixed strings of the KML document.

/// Default output path for the generated KML document.
pub const DEFAULT_OUTPUT_FILE: &str = "data.kml";

/// Default path of the GeoIP City database.
pub const DEFAULT_GEOIP_FILE: &str = "GeoLiteCity.dat";

/// Where to obtain a City database when the configured one is missing.
pub const GEOIP_DOWNLOAD_HINT: &str =
    "https://dev.maxmind.com/geoip/geolite2-free-geolocation-data";

/// Tokens starting with this prefix are resolved through DNS; everything else
/// is treated as a literal IP address.
pub const HOSTNAME_PREFIX: &str = "www.";

/// HTTP probe timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent sent with HTTP probes.
pub const DEFAULT_USER_AGENT: &str = concat!("ip2kml/", env!("CARGO_PKG_VERSION"));

/// Exit code for bad arguments, a missing input file or an unusable database.
pub const EXIT_USAGE: i32 = 2;

/// Exit code when the GeoIP database file does not exist.
///
/// Kept at 0 for compatibility with the historical tool even though a missing
/// database arguably deserves a failure code.
pub const EXIT_MISSING_GEOIP: i32 = 0;

// KML document framing
pub const KML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                              <kml xmlns=\"http://www.opengis.net/kml/2.2\">\n\
                              <Document>\n";
pub const KML_FOOTER: &str = "</Document>\n</kml>";
