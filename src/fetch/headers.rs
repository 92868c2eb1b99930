//! HTTP response header probing.

use anyhow::{Error, Result};
use reqwest::header::HeaderMap;

/// Captures the response headers of `http://<address>/`.
///
/// Implementations must not fail: any error is reported as `None`.
#[allow(async_fn_in_trait)]
pub trait HeaderProbe {
    async fn probe(&self, address: &str) -> Option<String>;
}

/// Issues a single GET to `http://<address>/` and returns its header block.
///
/// Redirects follow the client's policy. The body is never read.
///
/// # Errors
///
/// Returns an error on connection failure, timeout, a malformed response, or
/// an HTTP error status (4xx/5xx).
pub async fn fetch_response_headers(client: &reqwest::Client, address: &str) -> Result<String> {
    let url = format!("http://{address}/");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(Error::new)?
        .error_for_status()
        .map_err(Error::new)?;
    Ok(format_headers(response.headers()))
}

/// Serializes headers as `Name: value` lines, each terminated by a newline.
pub fn format_headers(headers: &HeaderMap) -> String {
    let mut text = String::new();
    for (name, value) in headers {
        text.push_str(name.as_str());
        text.push_str(": ");
        text.push_str(&String::from_utf8_lossy(value.as_bytes()));
        text.push('\n');
    }
    text
}

impl HeaderProbe for reqwest::Client {
    async fn probe(&self, address: &str) -> Option<String> {
        match fetch_response_headers(self, address).await {
            Ok(headers) => Some(headers),
            Err(e) => {
                log::debug!("HTTP probe of {address} failed: {e:#}");
                None
            }
        }
    }
}
