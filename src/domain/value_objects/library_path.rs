//! Library Path Value Object
//!
//! The file path of a linked library exactly as the host document stores it.
//! Paths may be:
//! - blend-relative (`//libs/props.blend`), relative to the project root
//! - plain relative (`libs/props.blend`), also relative to the project root
//! - absolute (`/assets/props.blend`)

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Prefix marking a path as relative to the host document's directory
pub const BLEND_RELATIVE_PREFIX: &str = "//";

/// Raw library file path, resolved on demand
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryPath(String);

impl LibraryPath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The path as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path is stored relative to the project root
    pub fn is_relative(&self) -> bool {
        self.0.starts_with(BLEND_RELATIVE_PREFIX) || !Path::new(&self.0).is_absolute()
    }

    /// Resolve to an absolute, lexically normalised path
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        let joined = match self.0.strip_prefix(BLEND_RELATIVE_PREFIX) {
            Some(rest) => project_root.join(rest),
            None if Path::new(&self.0).is_absolute() => PathBuf::from(&self.0),
            None => project_root.join(&self.0),
        };
        normalize(&joined)
    }
}

impl fmt::Display for LibraryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LibraryPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Remove `.` and `..` components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                let unresolved = out.as_os_str().is_empty()
                    || matches!(out.components().next_back(), Some(Component::ParentDir));
                if unresolved && !out.has_root() {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
