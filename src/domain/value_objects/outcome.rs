//! Outcome value object - the one-line report of a view operation
//!
//! Store and launcher failures are converted into outcomes at the
//! operation boundary; they never reach the renderer as errors.

use serde::Serialize;

/// Severity of an outcome, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Machine-readable outcome code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCode {
    /// Operation succeeded
    Ok,
    /// Some items succeeded, some failed
    Partial,
    /// Nothing to do
    Noop,
    /// A named group, record or category no longer exists
    NotFound,
    /// A backing file is missing
    FileMissing,
    /// The host or launcher failed
    Failed,
    /// No scene object uses the record
    NoUsers,
}

/// Result of one view operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub severity: Severity,
    pub code: OutcomeCode,
    pub message: String,
    /// Items affected (deleted libraries, selected objects)
    pub count: usize,
}

impl Outcome {
    pub fn new(severity: Severity, code: OutcomeCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            count: 0,
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, OutcomeCode::Ok, message)
    }

    pub fn noop(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, OutcomeCode::Noop, message)
    }

    pub fn warning(code: OutcomeCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    pub fn error(code: OutcomeCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Success or partial success; the caller rebuilds the view
    pub fn changed_data(&self) -> bool {
        matches!(self.code, OutcomeCode::Ok | OutcomeCode::Partial)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
