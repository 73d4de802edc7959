use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Remote addresses that never represent external activity: loopback,
/// multicast and the limited broadcast address.
pub fn ignored(host: &str) -> bool {
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }

    match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => v4(&ip),
        Ok(IpAddr::V6(ip)) => v6(&ip),
        Err(_)             => false,
    }
}

fn v4(ip: &Ipv4Addr) -> bool {
    ip.is_loopback() || ip.is_multicast() || ip.is_broadcast()
}

fn v6(ip: &Ipv6Addr) -> bool {
    if ip.is_loopback() || ip.is_multicast() {
        return true;
    }
    ip.to_ipv4_mapped().map(|ip| v4(&ip)).unwrap_or(false)
}
