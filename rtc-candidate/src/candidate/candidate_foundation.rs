use crc::{CRC_32_ISO_HDLC, Crc};
use shared::SocketAddress;

use super::*;

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// CRC-32 (the zlib polynomial) of `data`.
pub fn compute_crc32(data: &[u8]) -> u32 {
    CRC32.checksum(data)
}

impl Candidate {
    /// Sets the foundation from the candidate type, the base IP, the
    /// transport and relay protocols and the agent's `tie_breaker`.
    ///
    /// RFC 5245 section 4.1.1.3: two candidates MUST share a foundation when
    /// they have the same type, their bases have the same IP, the STUN or
    /// TURN servers used to obtain them have the same IP, and they use the
    /// same transport protocol. The tie breaker is scoped to one agent, so
    /// candidates from different agents never collide.
    pub fn compute_foundation(&mut self, base_address: &SocketAddress, tie_breaker: u64) {
        let mut buf = vec![];
        buf.extend_from_slice(self.type_name().as_bytes());
        buf.extend_from_slice(base_address.ip_string().as_bytes());
        buf.extend_from_slice(self.protocol.as_bytes());
        buf.extend_from_slice(self.relay_protocol.as_bytes());
        buf.extend_from_slice(tie_breaker.to_string().as_bytes());

        let checksum = compute_crc32(&buf);

        self.foundation = format!("{checksum}");
    }

    /// Sets the foundation of a peer reflexive candidate from its own id.
    /// Only valid for prflx candidates with an id.
    pub fn compute_prflx_foundation(&mut self) {
        debug_assert!(self.is_prflx());
        debug_assert!(!self.id.is_empty());

        let checksum = compute_crc32(self.id.as_bytes());

        self.foundation = format!("{checksum}");
    }
}
