//! Launcher port - opening a library file in an external process

use std::path::Path;

use thiserror::Error;

/// Launch failures
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("no launcher program configured")]
    NotConfigured,

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Starts an external process for a file and returns without waiting
pub trait Launcher {
    fn launch(&self, file: &Path) -> Result<(), LaunchError>;
}
