use crate::ping_error::{PingError, PingResult};
use std::net::{IpAddr, Ipv4Addr};

/// Resolves `hostname` (or a literal address) to its first IPv4 address.
pub fn lookup_host_v4(hostname: &str) -> PingResult<Ipv4Addr> {
    let not_found = || {
        PingError::fatal_config(format!(
            "Ping request could not find host {hostname}. Please check the name and try again."
        ))
    };
    if let Ok(ip) = hostname.parse::<Ipv4Addr>() {
        return Ok(ip);
    }
    let ips: Vec<IpAddr> = dns_lookup::lookup_host(hostname).map_err(|e| {
        tracing::debug!("resolving {hostname} failed: {e}");
        not_found()
    })?;
    ips.into_iter()
        .find_map(|ip| match ip {
            IpAddr::V4(ipv4) => Some(ipv4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(not_found)
}
