//! Common test utilities for linkview integration and scenario tests.
//!
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - Fixtures: reusable manifest content

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
