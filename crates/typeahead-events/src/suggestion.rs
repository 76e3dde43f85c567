// ABOUTME: Suggestion request lifecycle types shared between core and observers
// ABOUTME: Request tagging, discard accounting, and the match source error taxonomy

use thiserror::Error;

/// Unique identifier for issued match requests.
///
/// Ids increase monotonically per controller; only the outcome carrying the
/// latest issued id may be applied to state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id the next issued request will carry.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Why a fetch outcome was dropped without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// A later request was issued before this outcome arrived.
    Superseded,
    /// The source reported a failure; state is left as-is.
    SourceFailed,
}

/// Failure reported by a match source.
///
/// The controller never surfaces these to the end user; a failed fetch simply
/// never updates state and the menu stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("match source unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_monotonic() {
        let first = RequestId::default().next();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.as_u64(), first.as_u64() + 1);
    }

    #[test]
    fn test_source_error_messages() {
        let err = SourceError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "transport failed: connection refused");
        assert_eq!(
            SourceError::Unavailable.to_string(),
            "match source unavailable"
        );
    }
}
