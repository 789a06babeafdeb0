//! Event Sink Implementations
//!
//! Provides concrete implementations of ViewEventSink:
//! - JsonEventSink: NDJSON output for scripting

mod json;

pub use json::JsonEventSink;
