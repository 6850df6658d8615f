#[cfg(test)]
mod candidate_test;

pub mod candidate_attribute;
pub mod candidate_foundation;
pub mod candidate_priority;

pub use candidate_attribute::unmarshal_candidate;

use serde::{Deserialize, Serialize};
use shared::{AddressFamily, SocketAddress};
use std::fmt;

use crate::adapter_type::{AdapterType, NETWORK_COST_MAX, NetworkCostConfig, compute_network_cost};
use crate::rand::{IdGenerator, RandomIdGenerator};
use crate::tcp_type::TcpType;

/// Indicates that the candidate is used for RTP.
pub const COMPONENT_RTP: u16 = 1;
/// Indicates that the candidate is used for RTCP.
pub const COMPONENT_RTCP: u16 = 2;
pub const COMPONENT_DEFAULT: u16 = COMPONENT_RTP;

/// Host used by `to_sanitized_copy` when an IP must be hidden and no hostname is known.
pub const REDACTED_IP_HOSTNAME: &str = "redacted-ip.invalid";
/// Host used by `to_sanitized_copy` when the hostname is itself an IP literal.
pub const REDACTED_LITERAL_HOSTNAME: &str = "redacted-literal.invalid";

/// Represents the type of candidate `CandidateType` enum.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateType {
    #[default]
    #[serde(rename = "host")]
    Host,
    #[serde(rename = "srflx")]
    ServerReflexive,
    #[serde(rename = "prflx")]
    PeerReflexive,
    #[serde(rename = "relay")]
    Relay,
}

impl CandidateType {
    /// The wire name of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::ServerReflexive => "srflx",
            Self::PeerReflexive => "prflx",
            Self::Relay => "relay",
        }
    }

    /// Maps a wire name back to a type. Anything but the four RFC 5245 names is rejected.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "host" => Some(Self::Host),
            "srflx" => Some(Self::ServerReflexive),
            "prflx" => Some(Self::PeerReflexive),
            "relay" => Some(Self::Relay),
            _ => None,
        }
    }

    /// Returns the preference weight of a `CandidateType`.
    ///
    /// 4.1.2.2.  Guidelines for Choosing Type and Local Preferences
    /// The RECOMMENDED values are 126 for host candidates, 100
    /// for server reflexive candidates, 110 for peer reflexive candidates,
    /// and 0 for relayed candidates.
    #[must_use]
    pub const fn preference(self) -> u32 {
        match self {
            Self::Host => 126,
            Self::PeerReflexive => 110,
            Self::ServerReflexive => 100,
            Self::Relay => 0,
        }
    }
}

// String makes CandidateType printable
impl fmt::Display for CandidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Collects the arguments of `Candidate` construction into a single structure.
#[derive(Debug, Clone)]
pub struct CandidateConfig {
    pub component: u16,
    pub protocol: String,
    pub address: SocketAddress,
    pub priority: u32,
    pub username: String,
    pub password: String,
    pub candidate_type: CandidateType,
    pub generation: u32,
    pub foundation: String,
    pub network_id: u16,
    pub network_cost: u16,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            component: COMPONENT_DEFAULT,
            protocol: String::new(),
            address: SocketAddress::default(),
            priority: 0,
            username: String::new(),
            password: String::new(),
            candidate_type: CandidateType::default(),
            generation: 0,
            foundation: String::new(),
            network_id: 0,
            network_cost: 0,
        }
    }
}

impl CandidateConfig {
    /// Creates a new candidate with a random id.
    pub fn new_candidate(self) -> Candidate {
        self.new_candidate_with(&mut RandomIdGenerator)
    }

    /// Creates a new candidate taking its id from `id_generator`.
    pub fn new_candidate_with(self, id_generator: &mut dyn IdGenerator) -> Candidate {
        Candidate {
            id: id_generator.generate_id(),
            component: self.component,
            protocol: self.protocol,
            relay_protocol: String::new(),
            address: self.address,
            priority: self.priority,
            username: self.username,
            password: self.password,
            candidate_type: self.candidate_type,
            network_name: String::new(),
            network_type: AdapterType::Unknown,
            underlying_type_for_vpn: AdapterType::Unknown,
            generation: self.generation,
            foundation: self.foundation,
            related_address: SocketAddress::default(),
            tcp_type: TcpType::Unspecified,
            network_id: self.network_id,
            network_cost: self.network_cost,
        }
    }
}

/// One transport address an ICE agent may use, plus its descriptive metadata.
///
/// Candidates are plain values. `priority` and `foundation` are either
/// computed locally (see `get_priority` and `compute_foundation`) or taken
/// verbatim from a parsed `candidate-attribute`.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub(crate) id: String,
    pub(crate) component: u16,
    pub(crate) protocol: String,
    pub(crate) relay_protocol: String,
    pub(crate) address: SocketAddress,
    pub(crate) priority: u32,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) candidate_type: CandidateType,

    // Debug and adaptation metadata, never put on the wire.
    pub(crate) network_name: String,
    pub(crate) network_type: AdapterType,
    pub(crate) underlying_type_for_vpn: AdapterType,

    pub(crate) generation: u32,
    pub(crate) foundation: String,
    pub(crate) related_address: SocketAddress,
    pub(crate) tcp_type: TcpType,
    pub(crate) network_id: u16,
    pub(crate) network_cost: u16,
}

impl Default for Candidate {
    fn default() -> Self {
        CandidateConfig::default().new_candidate()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_internal(true))
    }
}

// Full structural equality. Candidates built independently differ in `id`.
impl PartialEq for Candidate {
    fn eq(&self, o: &Self) -> bool {
        self.id == o.id
            && self.component == o.component
            && self.protocol == o.protocol
            && self.relay_protocol == o.relay_protocol
            && self.address == o.address
            && self.priority == o.priority
            && self.username == o.username
            && self.password == o.password
            && self.candidate_type == o.candidate_type
            && self.network_name == o.network_name
            && self.network_type == o.network_type
            && self.generation == o.generation
            && self.foundation == o.foundation
            && self.related_address == o.related_address
            && self.tcp_type == o.tcp_type
            && self.network_id == o.network_id
    }
}

impl Eq for Candidate {}

impl Candidate {
    /// Returns Candidate ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Replaces the id with a fresh random one.
    pub fn generate_id(&mut self) {
        self.generate_id_with(&mut RandomIdGenerator);
    }

    pub fn generate_id_with(&mut self, id_generator: &mut dyn IdGenerator) {
        self.id = id_generator.generate_id();
    }

    /// Returns candidate component.
    pub fn component(&self) -> u16 {
        self.component
    }

    /// Sets candidate component.
    pub fn set_component(&mut self, component: u16) {
        self.component = component;
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn set_protocol(&mut self, protocol: impl Into<String>) {
        self.protocol = protocol.into();
    }

    /// The protocol used to talk to the relay server, empty for non-relay candidates.
    pub fn relay_protocol(&self) -> &str {
        &self.relay_protocol
    }

    pub fn set_relay_protocol(&mut self, protocol: impl Into<String>) {
        self.relay_protocol = protocol.into();
    }

    pub fn address(&self) -> &SocketAddress {
        &self.address
    }

    pub fn set_address(&mut self, address: SocketAddress) {
        self.address = address;
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: u32) {
        self.priority = priority;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Returns candidate type.
    pub fn candidate_type(&self) -> CandidateType {
        self.candidate_type
    }

    pub fn set_candidate_type(&mut self, candidate_type: CandidateType) {
        self.candidate_type = candidate_type;
    }

    pub fn type_name(&self) -> &'static str {
        self.candidate_type.as_str()
    }

    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    pub fn set_network_name(&mut self, network_name: impl Into<String>) {
        self.network_name = network_name.into();
    }

    pub fn network_type(&self) -> AdapterType {
        self.network_type
    }

    pub fn set_network_type(&mut self, network_type: AdapterType) {
        self.network_type = network_type;
    }

    pub fn underlying_type_for_vpn(&self) -> AdapterType {
        self.underlying_type_for_vpn
    }

    pub fn set_underlying_type_for_vpn(&mut self, network_type: AdapterType) {
        self.underlying_type_for_vpn = network_type;
    }

    /// ICE restart generation this candidate belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn set_generation(&mut self, generation: u32) {
        self.generation = generation;
    }

    pub fn foundation(&self) -> &str {
        &self.foundation
    }

    pub fn set_foundation(&mut self, foundation: impl Into<String>) {
        self.foundation = foundation.into();
    }

    /// Base (srflx, prflx) or mapped (relay) address. Nil for host candidates.
    pub fn related_address(&self) -> &SocketAddress {
        &self.related_address
    }

    pub fn set_related_address(&mut self, related_address: SocketAddress) {
        self.related_address = related_address;
    }

    pub fn tcp_type(&self) -> TcpType {
        self.tcp_type
    }

    pub fn set_tcp_type(&mut self, tcp_type: TcpType) {
        self.tcp_type = tcp_type;
    }

    pub fn network_id(&self) -> u16 {
        self.network_id
    }

    pub fn set_network_id(&mut self, network_id: u16) {
        self.network_id = network_id;
    }

    pub fn network_cost(&self) -> u16 {
        self.network_cost
    }

    /// Callers must pass a cost no larger than `NETWORK_COST_MAX`.
    pub fn set_network_cost(&mut self, network_cost: u16) {
        debug_assert!(network_cost <= NETWORK_COST_MAX);
        self.network_cost = network_cost;
    }

    /// Derives the network cost from `network_type` and stores it, clamped to
    /// `NETWORK_COST_MAX`.
    pub fn update_network_cost(&mut self, config: &NetworkCostConfig) {
        self.network_cost =
            compute_network_cost(self.network_type, self.underlying_type_for_vpn, config);
    }

    pub fn is_local(&self) -> bool {
        self.candidate_type == CandidateType::Host
    }

    pub fn is_stun(&self) -> bool {
        self.candidate_type == CandidateType::ServerReflexive
    }

    pub fn is_prflx(&self) -> bool {
        self.candidate_type == CandidateType::PeerReflexive
    }

    pub fn is_relay(&self) -> bool {
        self.candidate_type == CandidateType::Relay
    }

    /// Determines whether this represents the same logical candidate as
    /// `other`. Network name, priority, network cost, id, tcptype and adapter
    /// metadata are ignored.
    pub fn is_equivalent(&self, other: &Candidate) -> bool {
        self.component == other.component
            && self.protocol == other.protocol
            && self.address == other.address
            && self.username == other.username
            && self.password == other.password
            && self.candidate_type == other.candidate_type
            && self.generation == other.generation
            && self.foundation == other.foundation
            && self.related_address == other.related_address
            && self.network_id == other.network_id
    }

    /// Loose match used when a remote side asks to remove a candidate.
    pub fn matches_for_removal(&self, other: &Candidate) -> bool {
        self.component == other.component
            && self.protocol == other.protocol
            && self.address == other.address
    }

    /// Colon delimited debug form. With `sensitive` set the IPs are redacted.
    pub fn to_string_internal(&self, sensitive: bool) -> String {
        let (address, related_address) = if sensitive {
            (
                self.address.to_sensitive_string(),
                self.related_address.to_sensitive_string(),
            )
        } else {
            (self.address.to_string(), self.related_address.to_string())
        };

        format!(
            "Cand[:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}]",
            self.foundation,
            self.component,
            self.protocol,
            self.priority,
            address,
            self.type_name(),
            related_address,
            self.username,
            self.password,
            self.network_id,
            self.network_cost,
            self.generation,
        )
    }

    pub fn to_sensitive_string(&self) -> String {
        self.to_string_internal(true)
    }

    /// Returns a copy with private details removed, for logging or for
    /// signaling to a peer that should not learn local addresses.
    ///
    /// With `use_hostname_address` the IP is dropped: an address without a
    /// hostname becomes `redacted-ip.invalid`, an IP literal hostname becomes
    /// `redacted-literal.invalid`, any other hostname is kept on its own.
    pub fn to_sanitized_copy(
        &self,
        use_hostname_address: bool,
        filter_related_address: bool,
        filter_ufrag: bool,
    ) -> Candidate {
        let mut copy = self.clone();
        if use_hostname_address {
            let port = self.address.port();
            let hostname = self.address.hostname();
            let host = if hostname.is_empty() {
                REDACTED_IP_HOSTNAME
            } else if hostname.parse::<std::net::IpAddr>().is_ok() {
                REDACTED_LITERAL_HOSTNAME
            } else {
                hostname
            };
            copy.set_address(SocketAddress::new(host, port));
        }
        if filter_related_address {
            let family: AddressFamily = copy.address.family();
            copy.set_related_address(SocketAddress::empty_with_family(family));
        }
        if filter_ufrag {
            copy.set_username("");
        }
        copy
    }
}
