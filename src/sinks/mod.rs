//! Sink implementations

pub mod json;
mod output;

pub use json::JsonSink;

// Re-export traits for convenience
pub use crate::core::{BuildSink, Sink};
