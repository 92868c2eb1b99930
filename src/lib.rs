//! ip2kml library: host list to KML export
//!
//! Reads a list of hosts/IP addresses, locates each one with a local MaxMind
//! City database, optionally captures HTTP response headers, and writes a KML
//! document with one placemark per input line.
//!
//! # Example
//!
//! ```no_run
//! use ip2kml::{Config, run_export};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input_file: std::path::PathBuf::from("hosts.txt"),
//!     geoip_file: std::path::PathBuf::from("GeoLite2-City.mmdb"),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Wrote {} placemarks", report.total_hosts);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Hosts are processed strictly one
//! after another, so a current-thread runtime is sufficient.

pub mod app;
pub mod config;
pub mod dns;
pub mod enrich;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod geoip;
pub mod initialization;
pub mod input;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use enrich::{is_hostname, HostEnricher, HostInfo};
pub use error_handling::{ExportError, GeoIpError};
pub use run::{export_hosts, run_export, ExportReport};

// Internal run module (contains the export loop)
mod run {
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::PathBuf;
    use std::time::Instant;

    use log::info;
    use tokio::io::AsyncRead;

    use crate::app;
    use crate::config::Config;
    use crate::dns::HostResolver;
    use crate::enrich::{is_hostname, HostEnricher};
    use crate::error_handling::{ExportError, GeoIpError, InitializationError, LookupFailure};
    use crate::export::KmlWriter;
    use crate::fetch::HeaderProbe;
    use crate::geoip::{GeoIpDatabase, GeoLookup};
    use crate::initialization::{init_client, init_resolver};
    use crate::input::HostTokenReader;

    /// Results of an export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Number of placemarks written (equals the number of input lines)
        pub total_hosts: usize,
        /// Hostnames DNS could not resolve
        pub unresolved: usize,
        /// Addresses with no GeoIP record
        pub geo_misses: usize,
        /// HTTP probes that failed (always 0 when probing is disabled)
        pub probe_failures: usize,
        /// Path of the written KML document
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an export with the provided configuration.
    ///
    /// Preconditions are checked in order before the output file is created:
    /// the GeoIP database must exist, the input file must open, and the
    /// database must parse. Once the output exists, every input line produces
    /// exactly one placemark.
    ///
    /// # Errors
    ///
    /// - `ExportError::GeoIp` if the database is missing or invalid
    /// - `ExportError::InputNotFound` if the input file cannot be opened
    /// - `ExportError::Output` / `ExportError::Input` on I/O failures
    pub async fn run_export(config: Config) -> Result<ExportReport, ExportError> {
        let start_time = Instant::now();

        if !tokio::fs::try_exists(&config.geoip_file).await.unwrap_or(false) {
            return Err(GeoIpError::NotFound(config.geoip_file.clone()).into());
        }

        let mut tokens = HostTokenReader::open(&config.input_file)
            .await
            .map_err(|source| ExportError::InputNotFound {
                path: config.input_file.clone(),
                source,
            })?;

        let geoip = GeoIpDatabase::open(&config.geoip_file).await?;
        log::debug!(
            "GeoIP database {} loaded at {:?}",
            geoip.metadata().source,
            geoip.metadata().loaded_at
        );

        let client = init_client(&config).map_err(InitializationError::from)?;
        let resolver = init_resolver();
        let enricher = HostEnricher::new(resolver, geoip, client);

        let output_error = |source: std::io::Error| ExportError::Output {
            path: config.output_file.clone(),
            source,
        };
        let file = File::create(&config.output_file).map_err(output_error)?;
        info!("Writing KML to {}", config.output_file.display());

        app::print_settings(&config);

        let mut kml = KmlWriter::new(BufWriter::new(file)).map_err(output_error)?;
        let total_hosts = export_hosts(&mut tokens, &enricher, &mut kml, &config).await?;
        kml.finish().map_err(output_error)?;

        app::print_done();

        let stats = enricher.stats();
        app::log_failure_statistics(stats);

        Ok(ExportReport {
            total_hosts,
            unresolved: stats.get_count(LookupFailure::UnresolvedHost),
            geo_misses: stats.get_count(LookupFailure::GeoRecordMissing),
            probe_failures: stats.get_count(LookupFailure::ProbeFailed),
            output_path: config.output_file.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Enriches every token from `tokens` and appends its placemark to `kml`.
    ///
    /// Hosts are handled one at a time, in input order. Returns the number of
    /// placemarks written.
    ///
    /// # Errors
    ///
    /// Only I/O errors on the input (`ExportError::Input`) or output
    /// (`ExportError::Output`) stop the loop; lookup failures never do.
    pub async fn export_hosts<In, R, G, P, W>(
        tokens: &mut HostTokenReader<In>,
        enricher: &HostEnricher<R, G, P>,
        kml: &mut KmlWriter<W>,
        config: &Config,
    ) -> Result<usize, ExportError>
    where
        In: AsyncRead + Unpin,
        R: HostResolver,
        G: GeoLookup,
        P: HeaderProbe,
        W: Write,
    {
        let mut written = 0usize;

        loop {
            let token = match tokens.next_token().await {
                Ok(Some(token)) => token,
                Ok(None) => break,
                Err(source) => {
                    return Err(ExportError::Input {
                        path: config.input_file.clone(),
                        source,
                    })
                }
            };

            if config.verbose {
                app::print_getting(&token);
            }

            let info = enricher
                .enrich(&token, is_hostname(&token), config.check_response)
                .await;
            if let Some(locality) = &info.locality {
                log::debug!("{token} located in {locality}");
            }

            if config.verbose {
                app::print_writing(&token);
            }

            kml.write_placemark(&info)
                .map_err(|source| ExportError::Output {
                    path: config.output_file.clone(),
                    source,
                })?;
            written += 1;
        }

        info!("Wrote {written} placemarks");
        Ok(written)
    }
}
