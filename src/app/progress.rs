//! Progress lines printed while exporting.

use crate::config::Config;

/// Prints the effective settings before the first host is processed.
pub fn print_settings(config: &Config) {
    println!("[+] GeoIP file: {}", config.geoip_file.display());
    println!("[+] Input file: {}", config.input_file.display());
    println!("[+] Output file: {}", config.output_file.display());
    println!("[+] Check HTTP response: {}\n", config.check_response);
}

pub fn print_getting(host: &str) {
    println!("[+] Getting information for {host}");
}

pub fn print_writing(host: &str) {
    println!("[+] Writing placemark for {host}");
}

pub fn print_done() {
    println!("\n[+] Done.\n");
}
