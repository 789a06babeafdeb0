//! View Event Port
//!
//! Observable interface for list view rebuilds and operation outcomes.

use crate::domain::value_objects::{Kind, Outcome};

/// Event emitted by the view controller and library operations
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The flat list was rebuilt
    Rebuilt {
        group: Option<String>,
        node_count: usize,
        visible_count: usize,
    },

    /// A category was expanded or collapsed
    CategoryToggled { kind: Kind, is_expanded: bool },

    /// The view lost its backing document and was reset
    Detached,

    /// An operation finished with a one-line outcome
    Finished { operation: String, outcome: Outcome },
}

/// Trait for receiving view events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait ViewEventSink {
    fn on_event(&self, event: ViewEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ViewEventSink for NoopEventSink {
    fn on_event(&self, _event: ViewEvent) {}
}
