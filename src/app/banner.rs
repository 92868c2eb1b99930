//! Startup banner and precondition messages.

use std::path::Path;

use crate::config::GEOIP_DOWNLOAD_HINT;

const BANNER: &str = r"
	 ___ ____  ____  _  ____  __ _
	|_ _|  _ \|___ \| |/ /  \/  | |
	 | || |_) | __) | ' /| |\/| | |
	 | ||  __/ / __/| . \| |  | | |___
	|___|_|   |_____|_|\_\_|  |_|_____|
";

/// Prints the ASCII-art banner with the crate version.
pub fn print_banner() {
    println!("{BANNER}");
    println!("\t           Version: {}\n", env!("CARGO_PKG_VERSION"));
}

/// Tells the user the GeoIP database is missing and where to get one.
pub fn print_missing_geoip(path: &Path) {
    println!("[-] Missing GeoIP file: {}", path.display());
    println!("[-] Download it from: {GEOIP_DOWNLOAD_HINT}\n");
}
