//! JSON Event Sink
//!
//! Outputs view events as NDJSON for scripting.

use crate::domain::ports::{ViewEvent, ViewEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ViewEventSink for JsonEventSink {
    fn on_event(&self, event: ViewEvent) {
        let json = match event {
            ViewEvent::Rebuilt {
                group,
                node_count,
                visible_count,
            } => {
                serde_json::json!({
                    "event": "rebuilt",
                    "group": group,
                    "node_count": node_count,
                    "visible_count": visible_count,
                })
            }

            ViewEvent::CategoryToggled { kind, is_expanded } => {
                serde_json::json!({
                    "event": "category_toggled",
                    "kind": kind.label(),
                    "is_expanded": is_expanded,
                })
            }

            ViewEvent::Detached => {
                serde_json::json!({
                    "event": "detached",
                })
            }

            ViewEvent::Finished { operation, outcome } => {
                serde_json::json!({
                    "event": "finished",
                    "operation": operation,
                    "severity": outcome.severity,
                    "code": outcome.code,
                    "message": outcome.message,
                    "count": outcome.count,
                })
            }
        };

        self.write_event(json);
    }
}
