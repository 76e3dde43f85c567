// ABOUTME: Read-only render projection consumed by the presentation layer
// ABOUTME: The controller never touches presentation; it only emits these values

use serde::{Deserialize, Serialize};

/// Snapshot of everything the UI layer needs to paint the suggestion menu.
///
/// Derived purely from controller state. When `visible` is false the frame is
/// empty: no items, no highlight, empty overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Whether the candidate list and overlay should be shown at all.
    pub visible: bool,
    /// Candidate display names, in the source's rank order.
    pub items: Vec<String>,
    /// Index of the keyboard/pointer-highlighted row, if any.
    pub highlighted: Option<usize>,
    /// Ghost completion text laid over the input; empty when there is none.
    pub overlay: String,
}

impl RenderFrame {
    /// The frame painted after a reset: menu closed, overlay cleared.
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// One unit of output from the controller to the UI collaborator.
///
/// Carries the new frame plus the side effects a transition mandates: an
/// optional direct overwrite of the field's value (live preview during
/// navigation, commit on accept, revert on cancel) and whether the UI must
/// suppress the native action of the triggering event (Tab focus-advance,
/// arrow-key cursor movement, pointer focus steal).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderUpdate {
    pub frame: RenderFrame,
    pub field_override: Option<String>,
    pub suppress_default: bool,
}

impl RenderUpdate {
    pub fn new(frame: RenderFrame) -> Self {
        Self {
            frame,
            field_override: None,
            suppress_default: false,
        }
    }

    pub fn with_field_override(mut self, value: impl Into<String>) -> Self {
        self.field_override = Some(value.into());
        self
    }

    pub fn suppressing_default(mut self) -> Self {
        self.suppress_default = true;
        self
    }
}
