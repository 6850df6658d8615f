use shared::util::generate_crypto_random_string;

#[cfg(test)]
mod rand_test;

const RUNES_ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const RUNES_CANDIDATE_ID_FOUNDATION: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789/+";

pub const LEN_CANDIDATE_ID: usize = 8;
const LEN_UFRAG: usize = 16;
const LEN_PWD: usize = 32;

/// Source of candidate ids. Tests inject a deterministic one.
pub trait IdGenerator {
    fn generate_id(&mut self) -> String;
}

/// Draws ids from the thread-local RNG.
#[derive(Default, Debug, Copy, Clone)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate_id(&mut self) -> String {
        generate_cand_id()
    }
}

/// Candidate ids use the ice-char alphabet of RFC 5245 section 15.1:
/// ice-char = ALPHA / DIGIT / "+" / "/"
pub fn generate_cand_id() -> String {
    generate_crypto_random_string(LEN_CANDIDATE_ID, RUNES_CANDIDATE_ID_FOUNDATION)
}

/// Generates ICE pwd.
/// This internally uses `generate_crypto_random_string`.
pub fn generate_pwd() -> String {
    generate_crypto_random_string(LEN_PWD, RUNES_ALPHA)
}

/// ICE user fragment.
/// This internally uses `generate_crypto_random_string`.
pub fn generate_ufrag() -> String {
    generate_crypto_random_string(LEN_UFRAG, RUNES_ALPHA)
}
