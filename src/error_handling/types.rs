//! Error type definitions.
//!
//! Fatal errors are `thiserror` enums; per-host failures are only counted,
//! never propagated.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors opening the GeoIP database.
///
/// All of these are detected once, before any input is processed.
#[derive(Error, Debug)]
pub enum GeoIpError {
    /// The database file does not exist.
    #[error("GeoIP database not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("Failed to read GeoIP database from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid MaxMind DB.
    #[error("Failed to parse GeoIP database from {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: maxminddb::MaxMindDbError,
    },
}

/// Errors that stop an export run.
///
/// Every variant is raised before the first placemark is written, except
/// `Input` and `Output`, which cover I/O failures mid-run.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The GeoIP database is missing or unusable.
    #[error(transparent)]
    GeoIp(#[from] GeoIpError),

    /// The input file is missing or cannot be opened.
    #[error("\"{}\" does not exist!", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the input file failed after it was opened.
    #[error("Failed to read input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating or writing the KML document failed.
    #[error("Failed to write output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A shared resource could not be initialized.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

/// Per-host lookup failures.
///
/// None of these abort a run; each one degrades a field of the host's
/// placemark to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupFailure {
    /// DNS returned no IPv4 address for a hostname token
    UnresolvedHost,
    /// The database had no record (or the address did not parse)
    GeoRecordMissing,
    /// The HTTP probe failed (connect, timeout, malformed response)
    ProbeFailed,
}

impl LookupFailure {
    /// Human-readable label used in the final summary.
    pub fn label(&self) -> &'static str {
        match self {
            LookupFailure::UnresolvedHost => "unresolved hostnames",
            LookupFailure::GeoRecordMissing => "addresses without GeoIP record",
            LookupFailure::ProbeFailed => "failed HTTP probes",
        }
    }
}
