//! Hostname to IP address resolution.

use anyhow::{Error, Result};
use hickory_resolver::TokioAsyncResolver;

/// Resolves hostnames to an IP address.
///
/// Implementations must not fail: any resolution error is reported as `None`.
#[allow(async_fn_in_trait)]
pub trait HostResolver {
    /// Returns the first IPv4 address of `host`, or `None` if it cannot be resolved.
    async fn resolve(&self, host: &str) -> Option<String>;
}

/// Resolves a hostname to an IPv4 address using DNS.
///
/// # Errors
///
/// Returns an error if DNS resolution fails or no IPv4 addresses are found.
pub async fn resolve_host_to_ip(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<String, Error> {
    let response = resolver.lookup_ip(host).await.map_err(Error::new)?;
    let ip = response
        .iter()
        .find(|ip| ip.is_ipv4())
        .ok_or_else(|| Error::msg("No IPv4 addresses found"))?
        .to_string();
    Ok(ip)
}

impl HostResolver for TokioAsyncResolver {
    async fn resolve(&self, host: &str) -> Option<String> {
        match resolve_host_to_ip(host, self).await {
            Ok(ip) => {
                log::debug!("Resolved {host} to {ip}");
                Some(ip)
            }
            Err(e) => {
                log::debug!("Failed to resolve {host}: {e}");
                None
            }
        }
    }
}
