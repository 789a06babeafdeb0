//! Error types for linkview
//!
//! Uses `thiserror` for library errors. Host and launcher failures have
//! their own port errors and are turned into outcomes before they get here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for linkview operations
pub type LinkviewResult<T> = Result<T, LinkviewError>;

/// Main error type for manifest and config handling
#[derive(Error, Debug)]
pub enum LinkviewError {
    /// Manifest file does not exist
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest could not be parsed
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Manifest could not be serialized
    #[error("could not serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Store has no file to save to
    #[error("manifest has no backing file")]
    NoBackingFile,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
