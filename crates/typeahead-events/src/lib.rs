// ABOUTME: Cross-crate event definitions for the typeahead controller
// ABOUTME: Input streams from the UI collaborator and suggestion request lifecycle types

pub mod input;
pub mod key;
pub mod suggestion;

pub use input::InputEvent;
pub use key::Key;
pub use suggestion::{DiscardReason, RequestId, SourceError};
