// ABOUTME: Render projection derivation - the pure view of controller state
// ABOUTME: Computes the frame the UI paints: items, highlight, and ghost overlay text

use typeahead_types::{Candidate, RenderFrame};

use crate::state::SuggestState;

/// Derive the render projection from state plus the current field text.
///
/// Pure: no side effects, no presentation. An invisible state yields the
/// hidden frame regardless of what else the state holds.
pub fn project(state: &SuggestState, field_value: &str) -> RenderFrame {
    if !state.visible {
        return RenderFrame::hidden();
    }

    let overlay = state
        .best_candidate()
        .map(|candidate| overlay_text(field_value, candidate))
        .unwrap_or_default();

    RenderFrame {
        visible: true,
        items: state
            .matches
            .iter()
            .map(|candidate| candidate.name.clone())
            .collect(),
        highlighted: state.selected,
        overlay,
    }
}

/// Ghost text: the typed value plus the candidate's tail beyond the typed
/// length, exposed as one string so the consumer can paint the remainder as
/// a dimmed suffix aligned under the input.
fn overlay_text(value: &str, candidate: &Candidate) -> String {
    let typed = value.chars().count();
    let tail: String = candidate.name.chars().skip(typed).collect();
    let mut text = String::with_capacity(value.len() + tail.len());
    text.push_str(value);
    text.push_str(&tail);
    text
}
