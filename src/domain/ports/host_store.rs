//! HostStore port - the host's data store, seen from the list view
//!
//! The engine reads a fresh snapshot through this trait on every rebuild and
//! never keeps records across rebuilds.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::{Record, SceneObject, SourceGroup};
use crate::domain::value_objects::Kind;

/// Result type for host store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Host store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Named group, record or object no longer exists
    #[error("not found: {name}")]
    NotFound { name: String },

    /// Backing file missing or unreadable
    #[error("file not found at: {}", path.display())]
    FileMissing { path: PathBuf },

    /// Host refused or failed the operation
    #[error("{0}")]
    Runtime(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract host data store
///
/// Implementations:
/// - `ManifestStore` - scene manifest loaded from TOML
pub trait HostStore {
    /// Current source groups, in the host's stable order
    fn list_groups(&self) -> Vec<SourceGroup>;

    /// Records linked from the named group, across all kinds
    fn records_of(&self, group: &str) -> Vec<Record>;

    /// Objects in the active scene
    fn scene_objects(&self) -> Vec<SceneObject>;

    /// Re-read a group's contents from its backing file
    fn reload_group(&mut self, name: &str) -> StoreResult<()>;

    /// Remove a group together with every record it owns
    fn delete_group(&mut self, name: &str) -> StoreResult<()>;

    /// Clear the object selection
    fn deselect_all(&mut self);

    /// Select one object; fails when the host forbids it
    fn select_object(&mut self, name: &str) -> StoreResult<()>;

    /// Make an object the active one
    fn set_active_object(&mut self, name: &str) -> StoreResult<()>;

    /// Look up a group by name
    fn find_group(&self, name: &str) -> Option<SourceGroup> {
        self.list_groups().into_iter().find(|g| g.name == name)
    }

    /// Look up a record by identity, wherever it comes from
    fn find_record(&self, kind: Kind, name: &str) -> Option<Record>;

    /// Number of groups
    fn group_count(&self) -> usize {
        self.list_groups().len()
    }
}
