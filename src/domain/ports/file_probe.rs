//! FileProbe port - existence checks for library files

use std::path::PathBuf;

use crate::domain::value_objects::LibraryPath;

/// Resolves library paths and probes the filesystem.
///
/// Existence is asked fresh on every call; implementations must not cache.
pub trait FileProbe {
    /// Absolute path a library path points at
    fn resolve(&self, path: &LibraryPath) -> PathBuf;

    /// Whether the backing file exists right now
    fn exists(&self, path: &LibraryPath) -> bool;
}

impl<T: FileProbe + ?Sized> FileProbe for &T {
    fn resolve(&self, path: &LibraryPath) -> PathBuf {
        (**self).resolve(path)
    }

    fn exists(&self, path: &LibraryPath) -> bool {
        (**self).exists(path)
    }
}
