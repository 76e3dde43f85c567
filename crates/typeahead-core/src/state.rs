// ABOUTME: Suggestion session state and its transition functions
// ABOUTME: All mutation goes through these methods so the index invariants hold everywhere

use typeahead_types::Candidate;

/// The controller's interaction state.
///
/// Owned exclusively by the controller task and mutated only through the
/// transition methods below. Two invariants hold at every return point:
/// a non-`None` index is a valid index into `matches`, and an invisible
/// menu carries no matches and no indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestState {
    /// Raw field text at the last observed value change.
    pub query: String,
    /// Field value recorded at the start of the current edit session; what
    /// Escape restores.
    pub previous_value: Option<String>,
    /// Whether the candidate list and overlay should be shown.
    pub visible: bool,
    /// Current candidate list, in the source's rank order.
    pub matches: Vec<Candidate>,
    /// Keyboard/pointer-highlighted row, if any.
    pub selected: Option<usize>,
    /// Ghost completion target; the top-ranked candidate right after a fetch,
    /// cleared as soon as the user navigates manually.
    pub best_match: Option<usize>,
}

impl SuggestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the empty form. Every terminal interaction (accept, cancel,
    /// commit) and every empty-text value change comes through here.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a value change: the new text becomes the query and the value
    /// Escape will restore. The ghost clears right away; it only comes back
    /// once a fresh fetch response lands.
    pub fn begin_edit(&mut self, value: &str) {
        self.query = value.to_string();
        self.previous_value = Some(value.to_string());
        self.best_match = None;
    }

    /// Hide the ghost completion without touching anything else.
    pub fn clear_ghost(&mut self) {
        self.best_match = None;
    }

    /// Apply a fetch response. The response fully replaces `matches`, the
    /// highlight resets, and the top-ranked candidate becomes the ghost
    /// target (no ghost for an empty response).
    pub fn apply_matches(&mut self, matches: Vec<Candidate>) {
        self.visible = true;
        self.matches = matches;
        self.selected = None;
        self.best_match = if self.matches.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    /// Move the highlight down one row, wrapping at the bottom; from no
    /// highlight, land on the first row. A no-op on an empty list. Manual
    /// navigation supersedes the ghost either way.
    pub fn select_next(&mut self) {
        self.best_match = None;
        if self.matches.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(index) if index + 1 >= self.matches.len() => 0,
            Some(index) => index + 1,
        });
    }

    /// Move the highlight up one row, wrapping at the top; from no highlight,
    /// land on the last row. A no-op on an empty list.
    pub fn select_prev(&mut self) {
        self.best_match = None;
        if self.matches.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None | Some(0) => self.matches.len() - 1,
            Some(index) => index - 1,
        });
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.selected.and_then(|index| self.matches.get(index))
    }

    pub fn best_candidate(&self) -> Option<&Candidate> {
        self.best_match.and_then(|index| self.matches.get(index))
    }
}
