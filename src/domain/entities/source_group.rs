//! Source group entity - a linked library file

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LibraryPath;

/// A linked library file contributing records to the host document.
///
/// Identity is the name. Whether the backing file exists is deliberately
/// not stored here: ask a `FileProbe` every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceGroup {
    pub name: String,
    #[serde(rename = "filepath")]
    pub file_path: LibraryPath,
}

impl SourceGroup {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_path: LibraryPath::new(file_path),
        }
    }
}
