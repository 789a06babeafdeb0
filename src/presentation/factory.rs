//! Wiring
//!
//! Creates the view and library operations with infrastructure dependencies.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{LibraryOps, ViewController};
use crate::config::Config;
use crate::infrastructure::{JsonEventSink, LocalProbe, ProcessLauncher};

/// Library operations over the local disk and a spawned program
pub type ConcreteLibraryOps = LibraryOps<LocalProbe, ProcessLauncher>;

/// Create library operations for a project rooted at `project_root`
pub fn create_library_ops(config: &Config, project_root: &Path) -> ConcreteLibraryOps {
    let probe = LocalProbe::new(project_root);
    let launcher = ProcessLauncher::new(
        config.launcher.program.clone(),
        config.launcher.args.clone(),
    );
    LibraryOps::new(probe, launcher)
}

/// Create a view controller; JSON mode streams view events to stdout
pub fn create_view(config: &Config, json: bool) -> ViewController {
    let view = ViewController::new().with_search(config.view.search.clone());
    if json {
        view.with_sink(Box::new(JsonEventSink::stdout()))
    } else {
        view
    }
}
