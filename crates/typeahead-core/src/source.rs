// ABOUTME: Match source abstraction the controller fetches candidates through
// ABOUTME: Transport and wire format are entirely the implementor's concern

use async_trait::async_trait;
use typeahead_events::SourceError;
use typeahead_types::Candidate;

/// Asynchronous supplier of ranked candidates for a query string.
///
/// The controller holds the source behind `Arc<dyn MatchSource>` and fetches
/// from spawned tasks, so implementations must be `Send + Sync`. A failed or
/// never-resolving fetch has no visible effect on controller state.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Fetch the ordered candidate list for `query`. List order is the rank
    /// order the UI will display.
    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SourceError>;
}
