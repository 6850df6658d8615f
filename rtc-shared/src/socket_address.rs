use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use crate::ip::{ip_to_sensitive_string, is_any};


/// Address family of a `SocketAddress`. Hostname-only addresses have no family.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressFamily {
    #[default]
    Unspecified,
    Inet,
    Inet6,
}

/// A host-or-IP plus port.
///
/// The host may be an IP literal, an unresolved hostname (for instance an mDNS
/// `.local` name), or a hostname that was later resolved to an IP.
#[derive(Default, Debug, Clone)]
pub struct SocketAddress {
    hostname: String,
    ip: Option<IpAddr>,
    port: u16,
    literal: bool,
}

impl SocketAddress {
    /// Creates an address from a host string. IP literals are parsed, anything
    /// else is kept as an unresolved hostname.
    pub fn new(host: &str, port: u16) -> Self {
        let mut addr = SocketAddress {
            port,
            ..Default::default()
        };
        addr.set_ip(host);
        addr
    }

    pub fn from_ip(ip: IpAddr, port: u16) -> Self {
        SocketAddress {
            hostname: String::new(),
            ip: Some(ip),
            port,
            literal: false,
        }
    }

    /// Returns the any-address of `family` with port 0, or the nil address
    /// when the family is unspecified.
    pub fn empty_with_family(family: AddressFamily) -> Self {
        match family {
            AddressFamily::Inet => Self::from_ip(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            AddressFamily::Inet6 => Self::from_ip(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
            AddressFamily::Unspecified => Self::default(),
        }
    }

    /// Replaces the host part from a string, clearing any previously resolved IP.
    pub fn set_ip(&mut self, host: &str) {
        self.hostname = host.to_owned();
        match host.parse::<IpAddr>() {
            Ok(ip) => {
                self.ip = Some(ip);
                self.literal = true;
            }
            Err(_) => {
                self.ip = None;
                self.literal = false;
            }
        }
    }

    /// Sets the IP a hostname resolved to, keeping the hostname.
    pub fn set_resolved_ip(&mut self, ip: IpAddr) {
        self.ip = Some(ip);
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn ipaddr(&self) -> Option<&IpAddr> {
        self.ip.as_ref()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// True when the hostname was itself an IP literal.
    pub fn is_literal(&self) -> bool {
        self.literal
    }

    pub fn family(&self) -> AddressFamily {
        match self.ip {
            Some(IpAddr::V4(_)) => AddressFamily::Inet,
            Some(IpAddr::V6(_)) => AddressFamily::Inet6,
            None => AddressFamily::Unspecified,
        }
    }

    /// True when nothing at all has been set.
    pub fn is_nil(&self) -> bool {
        self.hostname.is_empty() && self.ip.is_none() && self.port == 0
    }

    /// Returns the resolved socket address, if the host has an IP.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.ip.map(|ip| SocketAddr::new(ip, self.port))
    }

    /// The IP as a string, or an empty string when unresolved.
    pub fn ip_string(&self) -> String {
        self.ip.map(|ip| ip.to_string()).unwrap_or_default()
    }

    pub fn host_as_uri_string(&self) -> String {
        if !self.literal && !self.hostname.is_empty() {
            return self.hostname.clone();
        }
        match self.ip {
            Some(IpAddr::V6(ip)) => format!("[{ip}]"),
            Some(IpAddr::V4(ip)) => ip.to_string(),
            None => String::new(),
        }
    }

    pub fn host_as_sensitive_uri_string(&self) -> String {
        if !self.literal && !self.hostname.is_empty() {
            return self.hostname.clone();
        }
        match &self.ip {
            Some(ip @ IpAddr::V6(_)) => format!("[{}]", ip_to_sensitive_string(ip)),
            Some(ip) => ip_to_sensitive_string(ip),
            None => String::new(),
        }
    }

    /// Like `Display`, but with the host part of the IP redacted.
    pub fn to_sensitive_string(&self) -> String {
        format!("{}:{}", self.host_as_sensitive_uri_string(), self.port)
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host_as_uri_string(), self.port)
    }
}

// IPs decide equality; the hostname only counts when there is no usable IP.
impl PartialEq for SocketAddress {
    fn eq(&self, other: &Self) -> bool {
        let ip_matters = matches!(&self.ip, Some(ip) if !is_any(ip));
        self.ip == other.ip
            && (ip_matters || self.hostname == other.hostname)
            && self.port == other.port
    }
}

impl Eq for SocketAddress {}

impl From<SocketAddr> for SocketAddress {
    fn from(addr: SocketAddr) -> Self {
        SocketAddress::from_ip(addr.ip(), addr.port())
    }
}
