use std::net::{IpAddr, Ipv6Addr};


fn has_prefix(ip: &Ipv6Addr, prefix: &[u8], bits: usize) -> bool {
    let octets = ip.octets();
    let full = bits / 8;
    if octets[..full] != prefix[..full] {
        return false;
    }
    let rem = bits % 8;
    if rem == 0 {
        return true;
    }
    let mask = 0xffu8 << (8 - rem);
    (octets[full] & mask) == (prefix[full] & mask)
}

/// fc00::/7
pub fn is_ula(ip: &Ipv6Addr) -> bool {
    (ip.octets()[0] & 0xfe) == 0xfc
}

/// ::ffff:0:0/96
pub fn is_v4_mapped(ip: &Ipv6Addr) -> bool {
    has_prefix(
        ip,
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff],
        96,
    )
}

/// 2002::/16
pub fn is_6to4(ip: &Ipv6Addr) -> bool {
    has_prefix(ip, &[0x20, 0x02], 16)
}

/// 2001::/32
pub fn is_teredo(ip: &Ipv6Addr) -> bool {
    has_prefix(ip, &[0x20, 0x01, 0x00, 0x00], 32)
}

/// ::/96, the deprecated IPv4-compatible block.
pub fn is_v4_compatibility(ip: &Ipv6Addr) -> bool {
    has_prefix(ip, &[0; 12], 96)
}

/// fec0::/10
pub fn is_site_local(ip: &Ipv6Addr) -> bool {
    let octets = ip.octets();
    octets[0] == 0xfe && (octets[1] & 0xc0) == 0xc0
}

/// 3ffe::/16
pub fn is_6bone(ip: &Ipv6Addr) -> bool {
    has_prefix(ip, &[0x3f, 0xfe], 16)
}

/// Returns the RFC 3484-bis precedence of an address. Native IPv4 is
/// preferred over 6to4 and Teredo tunnels. An absent address has precedence 0.
pub fn ip_address_precedence(ip: Option<&IpAddr>) -> u32 {
    match ip {
        Some(IpAddr::V4(_)) => 30,
        Some(IpAddr::V6(ip)) => {
            if ip.is_loopback() {
                60
            } else if is_ula(ip) {
                50
            } else if is_v4_mapped(ip) {
                30
            } else if is_6to4(ip) {
                20
            } else if is_teredo(ip) {
                10
            } else if is_v4_compatibility(ip) || is_site_local(ip) || is_6bone(ip) {
                1
            } else {
                40
            }
        }
        None => 0,
    }
}

/// Formats an address with its host part elided, keeping enough structure
/// to tell networks apart in logs.
pub fn ip_to_sensitive_string(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ip) => {
            let o = ip.octets();
            format!("{}.{}.{}.x", o[0], o[1], o[2])
        }
        IpAddr::V6(ip) => {
            let s = ip.segments();
            format!("{:x}:{:x}:{:x}:x:x:x:x:x", s[0], s[1], s[2])
        }
    }
}

/// Returns true for 0.0.0.0 and ::.
pub fn is_any(ip: &IpAddr) -> bool {
    ip.is_unspecified()
}
