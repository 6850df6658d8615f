use std::fmt;

pub const UDP_PROTOCOL_NAME: &str = "udp";
pub const TCP_PROTOCOL_NAME: &str = "tcp";
pub const SSLTCP_PROTOCOL_NAME: &str = "ssltcp";
pub const TLS_PROTOCOL_NAME: &str = "tls";

/// Transport protocol a candidate is reachable over.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProtocolType {
    Udp,
    Tcp,
    SslTcp,
    Tls,
}

impl ProtocolType {
    /// Case-insensitive lookup of a transport token.
    pub fn from_proto_name(name: &str) -> Option<Self> {
        [Self::Udp, Self::Tcp, Self::SslTcp, Self::Tls]
            .into_iter()
            .find(|proto| proto.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => UDP_PROTOCOL_NAME,
            Self::Tcp => TCP_PROTOCOL_NAME,
            Self::SslTcp => SSLTCP_PROTOCOL_NAME,
            Self::Tls => TLS_PROTOCOL_NAME,
        }
    }

    pub fn is_tcp_family(&self) -> bool {
        matches!(self, Self::Tcp | Self::SslTcp)
    }
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
