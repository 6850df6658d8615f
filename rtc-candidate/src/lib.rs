#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod adapter_type;
pub mod candidate;
pub mod ice_candidate;
pub mod protocol;
pub mod rand;
pub mod tcp_type;

pub use candidate::{Candidate, CandidateConfig, CandidateType, unmarshal_candidate};
pub use ice_candidate::{IceCandidate, IceCandidateCollection, parse_candidate_lines};
