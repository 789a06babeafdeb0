//! Record entity - a named, typed data block linked from a library

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Kind;

/// A linked data record.
///
/// Identity is `(kind, name)`. The owning library is referenced by name
/// only; `None` means the record is local to the host document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub kind: Kind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
}

impl Record {
    /// Create a record linked from `library`
    pub fn linked(kind: Kind, name: impl Into<String>, library: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            library: Some(library.into()),
        }
    }

    /// Create a record local to the host document
    pub fn local(kind: Kind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            library: None,
        }
    }

    /// Whether this record is linked from the named library
    pub fn is_from(&self, library: &str) -> bool {
        self.library.as_deref() == Some(library)
    }
}
