//! Local File Probe
//!
//! Implements the FileProbe port against the local disk.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileProbe;
use crate::domain::value_objects::LibraryPath;

/// Resolves library paths against a project root and checks the disk
#[derive(Debug, Clone)]
pub struct LocalProbe {
    project_root: PathBuf,
}

impl LocalProbe {
    /// Create a probe for the given project root
    ///
    /// A relative root is made absolute against the current directory.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let root = project_root.into();
        let project_root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&root))
                .unwrap_or(root)
        };
        Self { project_root }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl FileProbe for LocalProbe {
    fn resolve(&self, path: &LibraryPath) -> PathBuf {
        path.resolve(&self.project_root)
    }

    fn exists(&self, path: &LibraryPath) -> bool {
        self.resolve(path).is_file()
    }
}
