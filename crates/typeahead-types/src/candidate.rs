// ABOUTME: Candidate data type produced by match sources
// ABOUTME: Opaque outside of its display name; list order is the source's rank order

use serde::{Deserialize, Serialize};

/// One suggested completion returned by the match source.
///
/// Candidates are created by the fetch collaborator and held immutably in the
/// controller's state. The position inside the returned list is the source's
/// rank order and is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
