//! KML export.
//!
//! Streams one `<Placemark>` per host between a fixed header and footer.
//! Nothing is buffered beyond the underlying writer, and the stream is never
//! rewound.

use std::io::{self, Write};

use crate::config::{KML_FOOTER, KML_HEADER};
use crate::enrich::HostInfo;

/// Forward-only KML document writer.
///
/// `new` writes the header, `write_placemark` appends, `finish` writes the
/// footer. Dropping the writer without `finish` leaves a truncated document.
pub struct KmlWriter<W: Write> {
    inner: W,
    placemarks: usize,
}

impl<W: Write> KmlWriter<W> {
    /// Writes the XML declaration and the opening `<kml>`/`<Document>` tags.
    pub fn new(mut inner: W) -> io::Result<Self> {
        inner.write_all(KML_HEADER.as_bytes())?;
        Ok(Self {
            inner,
            placemarks: 0,
        })
    }

    /// Appends the placemark for one host. Absent fields are written empty.
    pub fn write_placemark(&mut self, info: &HostInfo) -> io::Result<()> {
        let name = escape_xml(info.host_address.as_deref().unwrap_or_default());
        let description = escape_xml(info.header_text.as_deref().unwrap_or_default());
        let coordinates = format_coordinates(info.longitude, info.latitude);

        write!(
            self.inner,
            "\t<Placemark>\n\
             \t\t<name>{name}</name>\n\
             \t\t<description>\n{description}\t\t</description>\n\
             \t\t<Point>\n\
             \t\t\t<coordinates>{coordinates}</coordinates>\n\
             \t\t</Point>\n\
             \t</Placemark>\n"
        )?;
        self.placemarks += 1;
        Ok(())
    }

    /// Number of placemarks written so far.
    pub fn placemarks(&self) -> usize {
        self.placemarks
    }

    /// Writes the closing tags, flushes, and hands back the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.write_all(KML_FOOTER.as_bytes())?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Formats `"<longitude>, <latitude>"`; a missing value renders empty, and a
/// record with neither yields an empty string.
pub fn format_coordinates(longitude: Option<f64>, latitude: Option<f64>) -> String {
    if longitude.is_none() && latitude.is_none() {
        return String::new();
    }
    let lon = longitude.map(|v| v.to_string()).unwrap_or_default();
    let lat = latitude.map(|v| v.to_string()).unwrap_or_default();
    format!("{lon}, {lat}")
}

/// Escapes XML markup characters and drops characters XML 1.0 forbids.
///
/// Header text comes straight off the network, so it may contain `<`, `&`
/// or stray control bytes.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}
