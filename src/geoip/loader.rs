//! GeoIP database loading.

use maxminddb::Reader;
use std::path::Path;
use std::time::SystemTime;

use super::types::GeoIpMetadata;
use crate::error_handling::GeoIpError;

/// Reads and parses a MaxMind DB file.
///
/// The whole file is read into memory once; lookups afterwards never touch
/// the filesystem.
///
/// # Errors
///
/// - `GeoIpError::NotFound` if the file does not exist
/// - `GeoIpError::Read` if it cannot be read
/// - `GeoIpError::Invalid` if it is not a valid MaxMind DB
pub(crate) async fn load_from_file(
    path: &Path,
) -> Result<(Reader<Vec<u8>>, GeoIpMetadata), GeoIpError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(GeoIpError::NotFound(path.to_path_buf()));
    }

    log::info!("Loading GeoIP database from: {}", path.display());

    let db_bytes = tokio::fs::read(path).await.map_err(|source| GeoIpError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = Reader::from_source(db_bytes).map_err(|source| GeoIpError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata = extract_metadata(&reader, path);
    Ok((reader, metadata))
}

/// Builds metadata from the database's own header.
pub(crate) fn extract_metadata<T: AsRef<[u8]>>(reader: &Reader<T>, path: &Path) -> GeoIpMetadata {
    GeoIpMetadata {
        source: path.display().to_string(),
        database_type: reader.metadata.database_type.clone(),
        version: format!("build_{}", reader.metadata.build_epoch),
        loaded_at: SystemTime::now(),
    }
}
