//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip2kml` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping fatal errors to exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::error::Error as _;
use std::process;

use ip2kml::app::{print_banner, print_missing_geoip};
use ip2kml::config::{EXIT_MISSING_GEOIP, EXIT_USAGE};
use ip2kml::initialization::init_logger_with;
use ip2kml::{run_export, Config, ExportError, GeoIpError, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) => {
            print_banner();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    process::exit(0);
                }
                _ => {
                    let _ = e.print();
                    println!("{}", Opt::command().render_help());
                    process::exit(EXIT_USAGE);
                }
            }
        }
    };

    print_banner();

    let config = Config::from(opt);
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(config).await {
        Ok(report) => {
            println!(
                "[+] Wrote {} placemark{} to {} ({} unresolved, {} without location, {} failed probes) in {:.1}s",
                report.total_hosts,
                if report.total_hosts == 1 { "" } else { "s" },
                report.output_path.display(),
                report.unresolved,
                report.geo_misses,
                report.probe_failures,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(ExportError::GeoIp(GeoIpError::NotFound(path))) => {
            print_missing_geoip(&path);
            process::exit(EXIT_MISSING_GEOIP);
        }
        Err(e @ ExportError::GeoIp(_)) => {
            println!("[-] {e}\n");
            process::exit(EXIT_USAGE);
        }
        Err(e @ ExportError::InputNotFound { .. }) => {
            if let Some(source) = e.source() {
                log::debug!("Failed to open input file: {source}");
            }
            println!("[-] {e}\n");
            process::exit(EXIT_USAGE);
        }
        Err(e) => {
            eprintln!("ip2kml error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}
