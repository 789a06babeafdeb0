//! linkview - browse linked library files and the data they contribute
//!
//! A scene links data blocks (collections, objects, meshes, materials) from
//! external library files. linkview projects one library's linked data into a
//! two-level list: one collapsible header per kind, the data blocks beneath.
//! The list can be searched, libraries can be reloaded, opened or deleted,
//! and the scene objects using a data block can be selected.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{LibraryOps, ViewController, ViewState};
pub use config::Config;
pub use domain::entities::{Record, SceneObject, SourceGroup, ViewNode};
pub use domain::value_objects::{Kind, LibraryPath, Outcome, OutcomeCode, Severity};
pub use error::{LinkviewError, LinkviewResult};
pub use infrastructure::ManifestStore;
