//! Configuration module for linkview
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LINKVIEW_*)
//! 3. Project config (.linkview/config.toml next to the manifest)
//! 4. User config (<config dir>/linkview/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_overrides_from, ConfigWarning, PROJECT_CONFIG};
pub use types::{ColorMode, Config, LauncherConfig, OutputConfig, Verbosity, ViewConfig};
