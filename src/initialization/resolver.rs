//! DNS resolver initialization.

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on Unix) with its
/// timeouts and attempt counts left as configured. Falls back to hickory's
/// default upstreams when the system configuration cannot be read.
///
/// Only A records are queried.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, mut opts) = match read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    opts.ip_strategy = LookupIpStrategy::Ipv4Only;

    TokioAsyncResolver::tokio(config, opts)
}
