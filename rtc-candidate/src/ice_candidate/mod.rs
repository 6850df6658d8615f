
use shared::error::Result;
use std::fmt;

use crate::candidate::{Candidate, unmarshal_candidate};

/// A candidate as exchanged over signaling, tagged with the media section it
/// belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct IceCandidate {
    sdp_mid: String,
    sdp_mline_index: Option<u16>,
    candidate: Candidate,
}

// The m-line index is an unsigned short; anything outside of it is "unset"
// so comparisons stay predictable.
fn ensure_valid_mline_index(sdp_mline_index: i32) -> Option<u16> {
    u16::try_from(sdp_mline_index).ok()
}

impl IceCandidate {
    pub fn new(sdp_mid: &str, sdp_mline_index: i32, candidate: Candidate) -> Self {
        IceCandidate {
            sdp_mid: sdp_mid.to_owned(),
            sdp_mline_index: ensure_valid_mline_index(sdp_mline_index),
            candidate,
        }
    }

    /// Parses a trickled `candidate:` string (or `a=candidate:` line).
    pub fn parse(sdp_mid: &str, sdp_mline_index: i32, sdp: &str) -> Result<Self> {
        let candidate = unmarshal_candidate(sdp)?;
        Ok(Self::new(sdp_mid, sdp_mline_index, candidate))
    }

    pub fn sdp_mid(&self) -> &str {
        &self.sdp_mid
    }

    pub fn sdp_mline_index(&self) -> Option<u16> {
        self.sdp_mline_index
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }
}

impl fmt::Display for IceCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.candidate.marshal(true))
    }
}

/// Candidates gathered for, or received on, one media section.
#[derive(Debug, Default, Clone)]
pub struct IceCandidateCollection {
    candidates: Vec<IceCandidate>,
}

impl IceCandidateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, candidate: IceCandidate) {
        self.candidates.push(candidate);
    }

    pub fn at(&self, index: usize) -> Option<&IceCandidate> {
        self.candidates.get(index)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IceCandidate> {
        self.candidates.iter()
    }

    /// Whether an equivalent candidate is already present for the same media
    /// section. The mid wins when set; otherwise the m-line index is compared.
    pub fn has_candidate(&self, candidate: &IceCandidate) -> bool {
        self.candidates.iter().any(|entry| {
            if !entry.candidate.is_equivalent(&candidate.candidate) {
                return false;
            }
            if !candidate.sdp_mid.is_empty() {
                return candidate.sdp_mid == entry.sdp_mid;
            }
            candidate.sdp_mline_index == entry.sdp_mline_index
        })
    }

    /// Removes the first entry that matches `candidate` by component,
    /// protocol and address. Returns the number of entries removed.
    pub fn remove_candidate(&mut self, candidate: &Candidate) -> usize {
        match self
            .candidates
            .iter()
            .position(|entry| candidate.matches_for_removal(&entry.candidate))
        {
            Some(index) => {
                let removed = self.candidates.remove(index);
                log::trace!("removed candidate {}", removed.candidate);
                1
            }
            None => 0,
        }
    }
}

/// Parses one candidate per non-empty line. Each line stands alone: a
/// malformed one yields an error in its slot and the rest are still parsed.
pub fn parse_candidate_lines(lines: &str) -> Vec<Result<Candidate>> {
    lines
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let result = unmarshal_candidate(line);
            if let Err(err) = &result {
                log::warn!("dropping candidate line {line:?}: {err}");
            }
            result
        })
        .collect()
}
