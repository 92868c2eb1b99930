// Shared test helpers: fake lookups and KML inspection.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Each test file uses a different subset

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use ip2kml::dns::HostResolver;
use ip2kml::fetch::HeaderProbe;
use ip2kml::geoip::{GeoLookup, GeoRecord};
use tempfile::NamedTempFile;

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Resolver answering from a fixed table and recording every query.
#[derive(Default)]
pub struct TableResolver {
    pub answers: HashMap<String, String>,
    pub queries: RefCell<Vec<String>>,
}

impl TableResolver {
    pub fn with(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(h, ip)| (h.to_string(), ip.to_string()))
                .collect(),
            ..Default::default()
        }
    }
}

impl HostResolver for TableResolver {
    async fn resolve(&self, host: &str) -> Option<String> {
        self.queries.borrow_mut().push(host.to_string());
        self.answers.get(host).cloned()
    }
}

/// GeoIP lookup answering from a fixed table.
#[derive(Default)]
pub struct TableGeo {
    pub records: HashMap<String, GeoRecord>,
}

impl TableGeo {
    pub fn with(points: &[(&str, f64, f64)]) -> Self {
        Self {
            records: points
                .iter()
                .map(|(ip, lon, lat)| {
                    (
                        ip.to_string(),
                        GeoRecord {
                            longitude: Some(*lon),
                            latitude: Some(*lat),
                            ..Default::default()
                        },
                    )
                })
                .collect(),
        }
    }
}

impl GeoLookup for TableGeo {
    fn locate(&self, ip: &str) -> Option<GeoRecord> {
        self.records.get(ip).cloned()
    }
}

/// Probe that counts calls and never answers.
#[derive(Default)]
pub struct CountingProbe {
    pub calls: RefCell<usize>,
}

impl HeaderProbe for CountingProbe {
    async fn probe(&self, _address: &str) -> Option<String> {
        *self.calls.borrow_mut() += 1;
        None
    }
}

/// Writes lines to a temporary file.
pub fn write_hosts_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write host");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Path of the bundled MaxMind DB test database.
///
/// It holds three networks: 8.8.8.0/24 (coordinates only), 81.2.69.0/24
/// (London, full record) and 2.125.160.0/24 (country, no location).
pub fn geoip_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ip2kml-city-test.mmdb")
}

/// Extracts the text of every `<name>` element, in document order.
pub fn placemark_names(kml: &str) -> Vec<String> {
    let doc = parse_kml(kml);
    doc.descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "name")
        .map(|node| node.text().unwrap_or_default().to_string())
        .collect()
}

/// Checks that `kml` parses as XML with a KML 2.2 `<kml>` root holding one
/// `<Document>`.
pub fn assert_well_formed(kml: &str) {
    let doc = parse_kml(kml);
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "kml");
    assert_eq!(root.tag_name().namespace(), Some(KML_NAMESPACE));

    let documents: Vec<_> = root.children().filter(|node| node.is_element()).collect();
    assert_eq!(documents.len(), 1, "kml root must hold exactly one element");
    assert_eq!(documents[0].tag_name().name(), "Document");
}

fn parse_kml(kml: &str) -> roxmltree::Document<'_> {
    roxmltree::Document::parse(kml).unwrap_or_else(|e| panic!("invalid XML ({e}):\n{kml}"))
}
