use serde::{Deserialize, Serialize};
use std::fmt;

pub const TCPTYPE_ACTIVE_STR: &str = "active";
pub const TCPTYPE_PASSIVE_STR: &str = "passive";
pub const TCPTYPE_SIMOPEN_STR: &str = "so";

/// TCP candidate type, RFC 6544 section 4.5.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TcpType {
    /// No tcptype was given.
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    /// Will initiate an outgoing TCP connection.
    #[serde(rename = "active")]
    Active,
    /// Will accept an incoming TCP connection.
    #[serde(rename = "passive")]
    Passive,
    /// Will attempt to open a connection simultaneously with its peer.
    #[serde(rename = "so")]
    SimultaneousOpen,
}

impl TcpType {
    /// Maps a wire token to a tcptype. Only the three RFC 6544 tokens are accepted.
    pub fn from_tcp_type_name(name: &str) -> Option<Self> {
        match name {
            TCPTYPE_ACTIVE_STR => Some(Self::Active),
            TCPTYPE_PASSIVE_STR => Some(Self::Passive),
            TCPTYPE_SIMOPEN_STR => Some(Self::SimultaneousOpen),
            _ => None,
        }
    }

    /// Wire token, empty for `Unspecified`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => TCPTYPE_ACTIVE_STR,
            Self::Passive => TCPTYPE_PASSIVE_STR,
            Self::SimultaneousOpen => TCPTYPE_SIMOPEN_STR,
            Self::Unspecified => "",
        }
    }

    pub fn is_unspecified(&self) -> bool {
        *self == Self::Unspecified
    }
}

impl fmt::Display for TcpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Self::Unspecified => "unspecified",
            other => other.as_str(),
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tcp_type_names() {
        assert_eq!(TcpType::from_tcp_type_name("active"), Some(TcpType::Active));
        assert_eq!(TcpType::from_tcp_type_name("passive"), Some(TcpType::Passive));
        assert_eq!(
            TcpType::from_tcp_type_name("so"),
            Some(TcpType::SimultaneousOpen)
        );
        assert_eq!(TcpType::from_tcp_type_name("Active"), None);
        assert_eq!(TcpType::from_tcp_type_name(""), None);

        assert_eq!(TcpType::Unspecified.as_str(), "");
        assert_eq!(TcpType::Unspecified.to_string(), "unspecified");
        assert_eq!(TcpType::SimultaneousOpen.to_string(), "so");
    }

    #[test]
    fn test_tcp_type_serde() {
        let json = serde_json::to_string(&TcpType::SimultaneousOpen).unwrap();
        assert_eq!(json, "\"so\"");
        let t: TcpType = serde_json::from_str("\"passive\"").unwrap();
        assert_eq!(t, TcpType::Passive);
    }
}
