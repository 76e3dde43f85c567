// ABOUTME: Keyboard command set recognized by the typeahead controller
// ABOUTME: Tagged-variant dispatch keeps key handling total and exhaustive

use serde::{Deserialize, Serialize};

/// The finite keyboard command set.
///
/// Every key-press the UI collaborator forwards maps to exactly one variant;
/// anything outside the command set collapses to `Other`, which the
/// controller ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Accept the ghost completion (when present), then close the menu.
    Tab,
    /// Close the menu, keeping whatever value the field shows.
    Enter,
    /// Move the highlight up, wrapping at the top.
    ArrowUp,
    /// Move the highlight down, wrapping at the bottom.
    ArrowDown,
    /// Revert the field to the pre-edit value and close the menu.
    Escape,
    /// Any key outside the command set.
    Other,
}

impl Key {
    /// Map a DOM-style key name onto the command set.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Tab" => Key::Tab,
            "Enter" => Key::Enter,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Whether this key moves the highlight rather than terminating the session.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown)
    }
}
