//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod kind;
mod library_path;
mod outcome;

pub use kind::Kind;
pub use library_path::{LibraryPath, BLEND_RELATIVE_PREFIX};
pub use outcome::{Outcome, OutcomeCode, Severity};
