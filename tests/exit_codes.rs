//! Tests for exit codes and precondition handling of the CLI binary.
//!
//! Runs use the bundled test database and literal IP addresses only, so no
//! network access is needed.

mod helpers;

use std::path::Path;
use std::process::{Command, Output};

use helpers::{assert_well_formed, geoip_fixture, placemark_names, write_hosts_file};
use tempfile::TempDir;

fn run_ip2kml(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ip2kml"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ip2kml binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_exits_zero() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_ip2kml(&["--help"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("--check_response"));
    assert!(text.contains("--geoip_file"));
}

#[test]
fn test_unknown_option_exits_two() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_ip2kml(&["hosts.txt", "--bogus"], dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn test_missing_positional_exits_two() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_ip2kml(&[], dir.path());

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_geoip_file_creates_no_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let hosts = write_hosts_file(&["8.8.8.8"]);
    let kml = dir.path().join("out.kml");

    let output = run_ip2kml(
        &[
            hosts.path().to_str().expect("utf8 path"),
            "-g",
            "does-not-exist.mmdb",
            "-o",
            kml.to_str().expect("utf8 path"),
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Missing GeoIP file"));
    assert!(!kml.exists(), "no output may be created without a database");
}

#[test]
fn test_missing_input_file_exits_two_without_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    // Existence is checked before the database is parsed
    let geoip = write_hosts_file(&["placeholder"]);
    let kml = dir.path().join("out.kml");

    let output = run_ip2kml(
        &[
            "no-such-hosts.txt",
            "-g",
            geoip.path().to_str().expect("utf8 path"),
            "-o",
            kml.to_str().expect("utf8 path"),
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("\"no-such-hosts.txt\" does not exist!"));
    assert!(!kml.exists());
}

#[test]
fn test_corrupt_geoip_file_exits_two_without_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let hosts = write_hosts_file(&["8.8.8.8"]);
    let geoip = write_hosts_file(&["this is not a maxmind database"]);
    let kml = dir.path().join("out.kml");

    let output = run_ip2kml(
        &[
            hosts.path().to_str().expect("utf8 path"),
            "--geoip_file",
            geoip.path().to_str().expect("utf8 path"),
            "--output_file",
            kml.to_str().expect("utf8 path"),
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(!kml.exists());
}

#[test]
fn test_default_output_not_created_on_missing_geoip() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let hosts = write_hosts_file(&["8.8.8.8"]);

    // Default database path (GeoLiteCity.dat) does not exist in the temp dir
    let output = run_ip2kml(&[hosts.path().to_str().expect("utf8 path")], dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(!dir.path().join("data.kml").exists());
}

#[test]
fn test_directory_input_exits_two_without_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input_dir = dir.path().join("hosts");
    std::fs::create_dir(&input_dir).expect("Failed to create input directory");
    let geoip = geoip_fixture();
    let kml = dir.path().join("out.kml");

    let output = run_ip2kml(
        &[
            input_dir.to_str().expect("utf8 path"),
            "-g",
            geoip.to_str().expect("utf8 path"),
            "-o",
            kml.to_str().expect("utf8 path"),
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("does not exist!"));
    assert!(!kml.exists(), "an unreadable input must not create output");
}

#[test]
fn test_successful_export_writes_one_placemark_per_line() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let hosts = write_hosts_file(&["8.8.8.8", "10.0.0.1", "", "81.2.69.160", "2.125.160.216"]);
    let geoip = geoip_fixture();
    let kml = dir.path().join("out.kml");

    let output = run_ip2kml(
        &[
            hosts.path().to_str().expect("utf8 path"),
            "-g",
            geoip.to_str().expect("utf8 path"),
            "-o",
            kml.to_str().expect("utf8 path"),
            "-v",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("[+] Getting information for 81.2.69.160"));
    assert!(text.contains("[+] Done."));

    let written = std::fs::read_to_string(&kml).expect("output file should exist");
    assert_well_formed(&written);
    assert_eq!(
        placemark_names(&written),
        vec!["8.8.8.8", "10.0.0.1", "", "81.2.69.160", "2.125.160.216"]
    );
    assert!(written.contains("<coordinates>-97.822, 37.751</coordinates>"));
    assert!(written.contains("<coordinates>-0.0931, 51.5142</coordinates>"));
    // Miss, blank line and a record without location
    assert_eq!(written.matches("<coordinates></coordinates>").count(), 3);
}
