//! Configuration types and CLI options.
//!
//! `Opt` is the command-line surface; it is converted once into a `Config`,
//! which is what the library consumes.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_GEOIP_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, HTTP_TIMEOUT_SECS,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "ip2kml",
    version,
    about = "Creates KML files from IP/hostname lists using a GeoIP database."
)]
pub struct Opt {
    /// File with one host or IP address per line
    #[arg(value_name = "ip_file")]
    pub file: PathBuf,

    /// Check HTTP response (capture response headers for each host)
    #[arg(short = 'c', long = "check_response", alias = "check-response")]
    pub check_response: bool,

    /// Output file path
    #[arg(
        short = 'o',
        long = "output_file",
        alias = "output-file",
        value_name = "file_path",
        default_value = DEFAULT_OUTPUT_FILE
    )]
    pub output_file: PathBuf,

    /// GeoIP database path
    #[arg(
        short = 'g',
        long = "geoip_file",
        alias = "geoip-file",
        value_name = "file_path",
        default_value = DEFAULT_GEOIP_FILE
    )]
    pub geoip_file: PathBuf,

    /// Verbose mode: print progress for every host
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP probe timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value for probes
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Library configuration, built once from parsed arguments.
///
/// # Examples
///
/// ```no_run
/// use ip2kml::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input_file: PathBuf::from("hosts.txt"),
///     check_response: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read hosts from
    pub input_file: PathBuf,

    /// KML document to write
    pub output_file: PathBuf,

    /// GeoIP City database
    pub geoip_file: PathBuf,

    /// Probe each host over HTTP and keep the response headers
    pub check_response: bool,

    /// Print per-host progress lines
    pub verbose: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-probe timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("hosts.txt"),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            geoip_file: PathBuf::from(DEFAULT_GEOIP_FILE),
            check_response: false,
            verbose: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input_file: opt.file,
            output_file: opt.output_file,
            geoip_file: opt.geoip_file,
            check_response: opt.check_response,
            verbose: opt.verbose,
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
        }
    }
}
