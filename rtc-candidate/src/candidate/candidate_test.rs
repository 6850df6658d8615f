use super::*;
use crate::adapter_type::NetworkCostConfig;
use crate::rand::IdGenerator;

/// Hands out "id0", "id1", ... so candidate ids are predictable.
#[derive(Default)]
pub(crate) struct SequenceIdGenerator {
    next: usize,
}

impl IdGenerator for SequenceIdGenerator {
    fn generate_id(&mut self) -> String {
        let id = format!("id{}", self.next);
        self.next += 1;
        id
    }
}

pub(crate) fn host_candidate(address: &str, port: u16) -> Candidate {
    CandidateConfig {
        component: COMPONENT_RTP,
        protocol: "udp".to_owned(),
        address: SocketAddress::new(address, port),
        priority: 2130706432,
        candidate_type: CandidateType::Host,
        generation: 2,
        foundation: "a0+B/1".to_owned(),
        ..Default::default()
    }
    .new_candidate()
}

#[test]
fn test_candidate_id() {
    let mut c = Candidate::default();
    assert_eq!(c.id().len(), 8);
    let current_id = c.id().to_owned();

    c.generate_id();
    assert_eq!(c.id().len(), 8);
    assert_ne!(current_id, c.id());
}

#[test]
fn test_candidate_injected_id() {
    let mut ids = SequenceIdGenerator::default();
    let mut c = CandidateConfig::default().new_candidate_with(&mut ids);
    assert_eq!(c.id(), "id0");

    c.generate_id_with(&mut ids);
    assert_eq!(c.id(), "id1");
}

#[test]
fn test_candidate_component() {
    let mut c = Candidate::default();
    assert_eq!(c.component(), COMPONENT_DEFAULT);
    c.set_component(COMPONENT_RTCP);
    assert_eq!(c.component(), COMPONENT_RTCP);
}

#[test]
fn test_candidate_type_name() {
    let mut c = Candidate::default();
    assert_eq!(c.type_name(), "host");
    assert_eq!(c.candidate_type(), CandidateType::Host);
    assert!(c.is_local());

    c.set_candidate_type(CandidateType::ServerReflexive);
    assert_eq!(c.type_name(), "srflx");
    assert!(c.is_stun());

    c.set_candidate_type(CandidateType::PeerReflexive);
    assert_eq!(c.type_name(), "prflx");
    assert!(c.is_prflx());

    c.set_candidate_type(CandidateType::Relay);
    assert_eq!(c.type_name(), "relay");
    assert!(c.is_relay());
    assert!(!c.is_local() && !c.is_stun() && !c.is_prflx());
}

#[test]
fn test_candidate_type_from_name() {
    let tests = vec![
        ("host", Some(CandidateType::Host)),
        ("srflx", Some(CandidateType::ServerReflexive)),
        ("prflx", Some(CandidateType::PeerReflexive)),
        ("relay", Some(CandidateType::Relay)),
        ("blah", None),
        ("", None),
        ("HOST", None),
    ];

    for (name, expected) in tests {
        assert_eq!(CandidateType::from_type_name(name), expected, "{name}");
        if let Some(t) = expected {
            assert_eq!(t.to_string(), name);
        }
    }
}

#[test]
fn test_candidate_type_serde() {
    let json = serde_json::to_string(&CandidateType::ServerReflexive).unwrap();
    assert_eq!(json, "\"srflx\"");
    let t: CandidateType = serde_json::from_str("\"relay\"").unwrap();
    assert_eq!(t, CandidateType::Relay);
    assert!(serde_json::from_str::<CandidateType>("\"unspecified\"").is_err());
}

#[test]
fn test_candidate_equivalent_but_not_equal() {
    let c1 = host_candidate("192.168.1.5", 1234);
    let mut c2 = c1.clone();
    assert_eq!(c1, c2);

    c2.generate_id();
    assert!(c1.is_equivalent(&c2));
    assert_ne!(c1, c2);
}

#[test]
fn test_candidate_equivalence_ignores_metadata() {
    let c1 = host_candidate("192.168.1.5", 1234);
    let mut c2 = c1.clone();
    c2.set_network_name("eth0");
    c2.set_priority(1);
    c2.set_network_cost(10);
    c2.set_tcp_type(TcpType::Active);
    c2.set_network_type(AdapterType::Wifi);
    assert!(c1.is_equivalent(&c2));
    assert_ne!(c1, c2);

    let mut c3 = c1.clone();
    c3.set_username("ufrag");
    assert!(!c1.is_equivalent(&c3));

    let mut c4 = c1.clone();
    c4.set_generation(3);
    assert!(!c1.is_equivalent(&c4));

    let mut c5 = c1.clone();
    c5.set_related_address(SocketAddress::new("10.0.0.1", 1));
    assert!(!c1.is_equivalent(&c5));
}

#[test]
fn test_candidate_network_cost_not_part_of_equality() {
    let c1 = host_candidate("192.168.1.5", 1234);
    let mut c2 = c1.clone();
    c2.set_network_cost(50);
    assert_eq!(c1, c2);
}

#[test]
fn test_candidate_matches_for_removal() {
    let c1 = host_candidate("192.168.1.5", 1234);
    let mut c2 = host_candidate("192.168.1.5", 1234);
    c2.set_username("other");
    c2.set_foundation("other");
    c2.set_candidate_type(CandidateType::Relay);
    assert!(c1.matches_for_removal(&c2));
    assert!(!c1.is_equivalent(&c2));

    let c3 = host_candidate("192.168.1.5", 1235);
    assert!(!c1.matches_for_removal(&c3));

    let mut c4 = c1.clone();
    c4.set_protocol("tcp");
    assert!(!c1.matches_for_removal(&c4));
}

#[test]
fn test_candidate_to_string_internal() {
    let mut c = host_candidate("192.168.1.5", 1234);
    c.set_username("ufrag");
    c.set_password("pwd");
    c.set_network_id(3);

    assert_eq!(
        c.to_string_internal(false),
        "Cand[:a0+B/1:1:udp:2130706432:192.168.1.5:1234:host::0:ufrag:pwd:3:0:2]"
    );
    assert_eq!(
        c.to_string_internal(true),
        "Cand[:a0+B/1:1:udp:2130706432:192.168.1.x:1234:host::0:ufrag:pwd:3:0:2]"
    );
    assert_eq!(c.to_string(), c.to_sensitive_string());
}

#[test]
fn test_sanitized_copy_without_hostname() {
    let mut c = host_candidate("192.168.1.5", 1234);
    c.set_related_address(SocketAddress::new("10.0.0.1", 2000));
    c.set_username("ufrag");

    // Constructing from an IP string keeps that string as the hostname.
    let copy = c.to_sanitized_copy(true, false, false);
    assert_eq!(copy.address().hostname(), REDACTED_LITERAL_HOSTNAME);
    assert_eq!(copy.address().port(), 1234);
    assert_eq!(copy.address().ipaddr(), None);

    let mut c = c.clone();
    c.set_address(SocketAddress::from_ip("192.168.1.5".parse().unwrap(), 1234));
    let copy = c.to_sanitized_copy(true, false, false);
    assert_eq!(copy.address().hostname(), REDACTED_IP_HOSTNAME);
    assert_eq!(copy.related_address(), c.related_address());
    assert_eq!(copy.username(), "ufrag");

    // The receiver is untouched.
    assert_eq!(c.address().ip_string(), "192.168.1.5");
}

#[test]
fn test_sanitized_copy_keeps_hostname() {
    let mut c = host_candidate("abc.local", 1234);
    c.address.set_resolved_ip("192.168.1.5".parse().unwrap());

    let copy = c.to_sanitized_copy(true, true, false);
    assert_eq!(copy.address().hostname(), "abc.local");
    assert_eq!(copy.address().ipaddr(), None);
    // Hostname-only addresses have no family, so the related address is nil.
    assert!(copy.related_address().is_nil());
}

#[test]
fn test_sanitized_copy_filters_related_address_and_ufrag() {
    let mut c = host_candidate("192.168.1.5", 1234);
    c.set_candidate_type(CandidateType::ServerReflexive);
    c.set_related_address(SocketAddress::new("10.0.0.1", 2000));
    c.set_username("ufrag");

    let copy = c.to_sanitized_copy(false, true, true);
    assert_eq!(copy.address(), c.address());
    assert_eq!(copy.related_address().to_string(), "0.0.0.0:0");
    assert_eq!(copy.username(), "");
    assert_eq!(c.username(), "ufrag");
}

#[test]
fn test_sanitized_copy_is_idempotent() {
    let mut c = host_candidate("192.168.1.5", 1234);
    c.set_related_address(SocketAddress::new("10.0.0.1", 2000));
    c.set_username("ufrag");

    for (a, b, u) in [
        (true, true, true),
        (true, false, false),
        (false, true, false),
        (false, false, true),
    ] {
        let once = c.to_sanitized_copy(a, b, u);
        let twice = once.to_sanitized_copy(a, b, u);
        assert_eq!(once, twice, "flags ({a}, {b}, {u})");
    }
}

#[test]
fn test_update_network_cost() {
    let mut c = Candidate::default();
    c.set_network_type(AdapterType::Vpn);
    c.set_underlying_type_for_vpn(AdapterType::Any);
    c.update_network_cost(&NetworkCostConfig {
        add_network_cost_to_vpn: true,
        ..Default::default()
    });
    assert_eq!(c.network_cost(), NETWORK_COST_MAX);

    c.set_network_type(AdapterType::Wifi);
    c.update_network_cost(&NetworkCostConfig::default());
    assert_eq!(c.network_cost(), 10);
}
