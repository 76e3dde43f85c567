// ABOUTME: Core type definitions shared across the typeahead workspace
// ABOUTME: Layer 1 - plain data only, no cross-crate dependencies

pub mod candidate;
pub mod render;

pub use candidate::Candidate;
pub use render::{RenderFrame, RenderUpdate};
