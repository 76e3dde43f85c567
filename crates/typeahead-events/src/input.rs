// ABOUTME: Input event streams supplied by the UI collaborator
// ABOUTME: Text changes, key presses, and pointer presses feeding the controller

use crate::key::Key;

/// The three event streams the UI collaborator feeds into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The field text changed; carries the current field value.
    TextChanged(String),
    /// A key was pressed while the field had focus.
    Key(Key),
    /// A pointer press, carrying the pressed candidate row if the press
    /// landed on one.
    Pointer { row: Option<usize> },
}

impl InputEvent {
    pub fn text(value: impl Into<String>) -> Self {
        InputEvent::TextChanged(value.into())
    }

    pub fn key(key: Key) -> Self {
        InputEvent::Key(key)
    }

    pub fn pointer(row: Option<usize>) -> Self {
        InputEvent::Pointer { row }
    }
}
