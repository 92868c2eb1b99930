//! Host enrichment: resolution, GeoIP lookup and optional HTTP probing.
//!
//! Every token yields exactly one `HostInfo`. Failures at any stage leave the
//! corresponding fields empty; nothing here returns an error.

use crate::config::HOSTNAME_PREFIX;
use crate::dns::HostResolver;
use crate::error_handling::{LookupFailure, ProcessingStats};
use crate::fetch::HeaderProbe;
use crate::geoip::GeoLookup;

/// Everything known about one input host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostInfo {
    /// Literal IP from the input, or the resolved address of a hostname
    pub host_address: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Raw response headers when probing is enabled and succeeded
    pub header_text: Option<String>,
    /// City/region/country summary from the GeoIP record
    pub locality: Option<String>,
}

/// Decides whether a token is resolved through DNS.
///
/// A plain prefix test: tokens starting with `www.` are hostnames, everything
/// else is used verbatim as an IP address. Hostnames without the prefix are
/// therefore never resolved.
pub fn is_hostname(token: &str) -> bool {
    token.starts_with(HOSTNAME_PREFIX)
}

/// Composes resolver, GeoIP lookup and header probe into `HostInfo` records.
pub struct HostEnricher<R, G, P> {
    resolver: R,
    geoip: G,
    prober: P,
    stats: ProcessingStats,
}

impl<R, G, P> HostEnricher<R, G, P>
where
    R: HostResolver,
    G: GeoLookup,
    P: HeaderProbe,
{
    pub fn new(resolver: R, geoip: G, prober: P) -> Self {
        Self {
            resolver,
            geoip,
            prober,
            stats: ProcessingStats::new(),
        }
    }

    /// Builds the record for one token.
    ///
    /// `hostname` selects DNS resolution; otherwise the token itself is the
    /// address. The probe runs only when `check_response` is set and an
    /// address is known.
    pub async fn enrich(&self, token: &str, hostname: bool, check_response: bool) -> HostInfo {
        let host_address = if hostname {
            let resolved = self.resolver.resolve(token).await;
            if resolved.is_none() {
                self.stats.increment(LookupFailure::UnresolvedHost);
                log::warn!("Could not resolve {token}");
            }
            resolved
        } else {
            Some(token.to_string())
        };

        let mut info = HostInfo {
            host_address,
            ..Default::default()
        };

        let Some(address) = info.host_address.as_deref() else {
            return info;
        };

        match self.geoip.locate(address) {
            Some(record) => {
                info.longitude = record.longitude;
                info.latitude = record.latitude;
                info.locality = record.locality();
            }
            None => {
                self.stats.increment(LookupFailure::GeoRecordMissing);
                log::debug!("No GeoIP record for {address}");
            }
        }

        if check_response {
            info.header_text = self.prober.probe(address).await;
            if info.header_text.is_none() {
                self.stats.increment(LookupFailure::ProbeFailed);
            }
        }

        info
    }

    /// Failure counters accumulated over all `enrich` calls.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }
}
