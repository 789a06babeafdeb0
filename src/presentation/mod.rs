//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the view and library operations with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Dependency wiring
//! - `output` - Text and NDJSON rendering of command results

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands, DEFAULT_MANIFEST};
pub use factory::{create_library_ops, create_view, ConcreteLibraryOps};
pub use output::{OutputFormat, Printer};
