use shared::SocketAddress;
use shared::error::{Error, Result};
use std::str::FromStr;

use super::*;
use crate::protocol::{ProtocolType, TCP_PROTOCOL_NAME};

const ATTRIBUTE_CANDIDATE: &str = "candidate";
const ATTRIBUTE_CANDIDATE_TYP: &str = "typ";
const ATTRIBUTE_CANDIDATE_RADDR: &str = "raddr";
const ATTRIBUTE_CANDIDATE_RPORT: &str = "rport";
const ATTRIBUTE_CANDIDATE_TCPTYPE: &str = "tcptype";
const ATTRIBUTE_CANDIDATE_GENERATION: &str = "generation";
const ATTRIBUTE_CANDIDATE_UFRAG: &str = "ufrag";
const ATTRIBUTE_CANDIDATE_PWD: &str = "pwd";
const ATTRIBUTE_CANDIDATE_NETWORK_ID: &str = "network-id";
const ATTRIBUTE_CANDIDATE_NETWORK_COST: &str = "network-cost";

const LINE_PREFIX_ATTRIBUTE: &str = "a=";

/// foundation, component, transport, priority, address, port, "typ", type
const EXPECTED_MIN_FIELDS: usize = 8;

impl Candidate {
    /// Returns the `candidate-attribute` of RFC 5245 section 15.1, including
    /// the `candidate:` prefix but not the SDP `a=` line prefix.
    ///
    /// The ufrag extension is only written when `include_ufrag` is set and
    /// the username is not empty.
    pub fn marshal(&self, include_ufrag: bool) -> String {
        let address = match self.address.ipaddr() {
            Some(ip) => ip.to_string(),
            None => self.address.hostname().to_owned(),
        };

        let mut val = format!(
            "{}:{} {} {} {} {} {} {} {} ",
            ATTRIBUTE_CANDIDATE,
            self.foundation,
            self.component,
            self.protocol,
            self.priority,
            address,
            self.address.port(),
            ATTRIBUTE_CANDIDATE_TYP,
            self.type_name(),
        );

        if !self.related_address.is_nil() {
            val += format!(
                "{} {} {} {} ",
                ATTRIBUTE_CANDIDATE_RADDR,
                self.related_address.ip_string(),
                ATTRIBUTE_CANDIDATE_RPORT,
                self.related_address.port(),
            )
            .as_str();
        }

        // A TCP candidate without tcptype is read back as passive.
        if self.protocol == TCP_PROTOCOL_NAME && !self.tcp_type.is_unspecified() {
            val += format!("{} {} ", ATTRIBUTE_CANDIDATE_TCPTYPE, self.tcp_type.as_str()).as_str();
        }

        val += format!("{} {}", ATTRIBUTE_CANDIDATE_GENERATION, self.generation).as_str();
        if include_ufrag && !self.username.is_empty() {
            val += format!(" {} {}", ATTRIBUTE_CANDIDATE_UFRAG, self.username).as_str();
        }
        if self.network_id > 0 {
            val += format!(" {} {}", ATTRIBUTE_CANDIDATE_NETWORK_ID, self.network_id).as_str();
        }
        if self.network_cost > 0 {
            val += format!(" {} {}", ATTRIBUTE_CANDIDATE_NETWORK_COST, self.network_cost).as_str();
        }

        val
    }
}

impl FromStr for Candidate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        unmarshal_candidate(s)
    }
}

fn parse_port(field: &str) -> Result<u16> {
    field
        .parse::<u16>()
        .map_err(|_| Error::syntax_error("Invalid port"))
}

fn parse_field<T: FromStr>(field: &str, name: &str) -> Result<T> {
    field
        .parse::<T>()
        .map_err(|_| Error::syntax_error(format!("Invalid {name}")))
}

/// Parses a single `candidate-attribute`, either bare (`candidate:...`, as
/// trickled) or as an SDP attribute line (`a=candidate:...`). One trailing
/// newline and carriage return are tolerated.
///
/// Priority and foundation are taken as given, nothing is recomputed.
pub fn unmarshal_candidate(message: &str) -> Result<Candidate> {
    let first_line = match message.find('\n') {
        None => message,
        Some(line_end) if line_end + 1 == message.len() => &message[..line_end],
        Some(_) => return Err(Error::invalid_parameter("Expect one line only")),
    };

    let first_line = first_line
        .strip_prefix(LINE_PREFIX_ATTRIBUTE)
        .unwrap_or(first_line);
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);

    // Repeated ':' delimiters collapse into one.
    let candidate_value = match first_line.split_once(':') {
        Some((ATTRIBUTE_CANDIDATE, value)) => value.trim_start_matches(':'),
        Some((attribute, _)) => {
            return Err(Error::invalid_parameter(format!(
                "Expected {ATTRIBUTE_CANDIDATE} got {attribute}"
            )));
        }
        None => {
            return Err(Error::invalid_parameter(format!(
                "Expected {ATTRIBUTE_CANDIDATE} got "
            )));
        }
    };

    // a=candidate:<foundation> <component-id> <transport> <priority>
    // <connection-address> <port> typ <candidate-types>
    // [raddr <connection-address>] [rport <port>]
    // *(SP extension-att-name SP extension-att-value)
    let fields: Vec<&str> = candidate_value.split(' ').collect();
    if fields.len() < EXPECTED_MIN_FIELDS || fields[6] != ATTRIBUTE_CANDIDATE_TYP {
        return Err(Error::invalid_parameter(format!(
            "Expect at least {EXPECTED_MIN_FIELDS} fields."
        )));
    }

    let foundation = fields[0];
    let component: u16 = fields[1]
        .parse()
        .map_err(|_| Error::syntax_error("Invalid component id"))?;
    let transport = fields[2];
    let priority: u32 = parse_field(fields[3], "priority")?;
    let port = parse_port(fields[5])?;
    let address = SocketAddress::new(fields[4], port);

    let protocol = match ProtocolType::from_proto_name(transport) {
        Some(protocol @ (ProtocolType::Udp | ProtocolType::Tcp | ProtocolType::SslTcp)) => protocol,
        Some(_) => return Err(Error::invalid_parameter("Unsupported protocol")),
        None => return Err(Error::invalid_parameter("Unsupported transport type")),
    };
    let tcp_protocol = protocol.is_tcp_family();

    let candidate_type = CandidateType::from_type_name(fields[7])
        .ok_or_else(|| Error::invalid_parameter("Unsupported candidate type"))?;

    let mut current_position = EXPECTED_MIN_FIELDS;

    // raddr and rport are only recognized as a pair, in this order.
    let mut related_address = SocketAddress::default();
    if fields.len() >= current_position + 4
        && fields[current_position] == ATTRIBUTE_CANDIDATE_RADDR
        && fields[current_position + 2] == ATTRIBUTE_CANDIDATE_RPORT
    {
        let related_port = parse_port(fields[current_position + 3])?;
        related_address = SocketAddress::new(fields[current_position + 1], related_port);
        current_position += 4;
    }

    // RFC 6544 tcptype, expected right after the related address.
    let mut tcp_type = TcpType::Unspecified;
    if fields.len() >= current_position + 2
        && fields[current_position] == ATTRIBUTE_CANDIDATE_TCPTYPE
    {
        tcp_type = TcpType::from_tcp_type_name(fields[current_position + 1])
            .ok_or_else(|| Error::syntax_error("Invalid TCP candidate type"))?;
        if !tcp_protocol {
            return Err(Error::syntax_error("Invalid non-TCP candidate"));
        }
        current_position += 2;
    } else if tcp_protocol {
        log::trace!("candidate {foundation} has no tcptype, treating it as passive");
        tcp_type = TcpType::Passive;
    }

    // Non-standard extensions. ufrag and pwd travel with the candidate so
    // that trickled candidates of different generations are not confused.
    let mut username = "";
    let mut password = "";
    let mut generation: u32 = 0;
    let mut network_id: u16 = 0;
    let mut network_cost: u16 = 0;
    let mut i = current_position;
    while i + 1 < fields.len() {
        let (name, value) = (fields[i], fields[i + 1]);
        match name {
            ATTRIBUTE_CANDIDATE_GENERATION => {
                generation = parse_field(value, ATTRIBUTE_CANDIDATE_GENERATION)?;
            }
            ATTRIBUTE_CANDIDATE_UFRAG => username = value,
            ATTRIBUTE_CANDIDATE_PWD => password = value,
            ATTRIBUTE_CANDIDATE_NETWORK_ID => {
                network_id = parse_field(value, ATTRIBUTE_CANDIDATE_NETWORK_ID)?;
            }
            ATTRIBUTE_CANDIDATE_NETWORK_COST => {
                let cost: u16 = parse_field(value, ATTRIBUTE_CANDIDATE_NETWORK_COST)?;
                if cost > NETWORK_COST_MAX {
                    log::debug!("network-cost {cost} clamped to {NETWORK_COST_MAX}");
                }
                network_cost = cost.min(NETWORK_COST_MAX);
            }
            _ => log::trace!("skipping unknown candidate extension {name}"),
        }
        i += 2;
    }

    let mut candidate = CandidateConfig {
        component,
        protocol: protocol.as_str().to_owned(),
        address,
        priority,
        username: username.to_owned(),
        password: password.to_owned(),
        candidate_type,
        generation,
        foundation: foundation.to_owned(),
        network_id,
        network_cost,
    }
    .new_candidate();
    candidate.set_related_address(related_address);
    candidate.set_tcp_type(tcp_type);

    Ok(candidate)
}
