// ABOUTME: The typeahead controller core: state machine, debounce, fetch orchestration
// ABOUTME: Layer 3 - owns all interaction logic, no presentation concerns

pub mod controller;
pub mod debounce;
pub mod projection;
pub mod source;
pub mod state;

#[cfg(test)]
mod controller_tests;

pub use controller::{Controller, ControllerConfig, ControllerHandle};
pub use debounce::{DebounceConfig, Debouncer};
pub use projection::project;
pub use source::MatchSource;
pub use state::SuggestState;
