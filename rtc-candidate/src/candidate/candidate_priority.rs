use shared::ip::ip_address_precedence;

use super::*;

/// Upper bound on configured TURN servers. Also the amount added to the local
/// preference of relay candidates whose relay protocol is unknown.
pub const MAX_TURN_SERVERS: u32 = 32;

/// The best network adapter preference handed out by the network manager.
pub const HIGHEST_NETWORK_PREFERENCE: u32 = 127;

impl Candidate {
    /// Computes the RFC 5245 section 4.1.2.1 priority of this candidate.
    ///
    /// priority = (2^24)*(type preference) +
    ///            (2^8)*(local preference) +
    ///            (2^0)*(256 - component ID)
    ///
    /// The 16 bit local preference is split into the network adapter
    /// preference (high byte) and the RFC 3484 address precedence (low byte):
    ///
    ///   0                 1
    ///   0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5
    ///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    ///  |  NIC Pref     |    Addr Pref  |
    ///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    ///
    /// `relay_preference` is added on top; it ranks TURN servers so that the
    /// first configured server wins.
    pub fn get_priority(
        &self,
        type_preference: u32,
        network_adapter_preference: u32,
        relay_preference: u32,
        adjust_local_preference: bool,
    ) -> u32 {
        let addr_pref = ip_address_precedence(self.address.ipaddr());
        let mut local_preference = ((network_adapter_preference << 8) | addr_pref) + relay_preference;

        // The STUN PRIORITY attribute is
        // (peer-reflexive type preference) << 24 | (priority & 0x00FFFFFF),
        // RFC 5245 section 7.1.2.1. Adding MAX_TURN_SERVERS keeps a relay
        // candidate's STUN priority below that of a server reflexive one, and
        // cannot spill into the type preference byte while the adapter
        // preference stays within HIGHEST_NETWORK_PREFERENCE.
        debug_assert!(
            local_preference + MAX_TURN_SERVERS < 0x10000,
            "local preference {local_preference} overflows"
        );
        if adjust_local_preference && self.relay_protocol.is_empty() {
            local_preference += MAX_TURN_SERVERS;
        }

        (type_preference << 24)
            | (local_preference << 8)
            | 256u32.saturating_sub(u32::from(self.component))
    }
}
