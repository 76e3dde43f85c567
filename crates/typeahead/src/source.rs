// ABOUTME: Demo match source backed by a built-in word list
// ABOUTME: Case-insensitive prefix filter with a small simulated lookup latency

use std::time::Duration;

use async_trait::async_trait;
use typeahead_core::MatchSource;
use typeahead_events::SourceError;
use typeahead_types::Candidate;

const WORDS: &[&str] = &[
    "alabaster", "albatross", "amber", "anchor", "apple", "apricot", "arbor",
    "badger", "balsam", "bandit", "basil", "beacon", "bramble", "brocade",
    "cadence", "canyon", "caravan", "cedar", "cinder", "citadel", "clover",
    "damson", "dapple", "delta", "drift", "dulcimer", "dune",
    "ember", "emerald", "estuary", "evergreen",
    "falcon", "fathom", "fennel", "fjord", "flint", "foxglove",
    "garnet", "gingham", "glacier", "granite", "grove",
    "harbor", "hazel", "heather", "hollow", "horizon",
    "indigo", "ironwood", "isthmus",
    "juniper", "kestrel", "kindling",
    "lagoon", "lantern", "larkspur", "lattice", "lichen", "lumen",
    "magnolia", "marigold", "meadow", "meridian", "mistral", "moss",
    "nectar", "nimbus", "northerly",
    "obsidian", "ochre", "orchard", "osprey",
    "pebble", "pennant", "petrel", "pinewood", "plover", "prairie",
    "quarry", "quince",
    "ramble", "raven", "reedbed", "rosewood", "rushlight",
    "saffron", "sandbar", "sapling", "shale", "sorrel", "sparrow", "summit",
    "tamarind", "thicket", "thistle", "timber", "tundra",
    "umber", "valley", "verdant", "vesper",
    "walnut", "waterline", "willow", "wintergreen", "wren",
    "yarrow", "zephyr",
];

/// Prefix matcher over the built-in word list. A short sleep stands in for
/// the network round-trip a real source would pay, so debounce and
/// stale-response handling are observable in the demo.
pub struct WordListSource {
    latency: Duration,
}

impl WordListSource {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(80),
        }
    }
}

impl Default for WordListSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchSource for WordListSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SourceError> {
        tokio::time::sleep(self.latency).await;
        let needle = query.to_lowercase();
        Ok(WORDS
            .iter()
            .filter(|word| word.starts_with(&needle))
            .map(|word| Candidate::new(*word))
            .collect())
    }
}
