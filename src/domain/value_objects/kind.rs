//! Kind value object - the category a linked record belongs to
//!
//! The declaration order is the display order of categories in the list view.

use serde::{Deserialize, Serialize};

/// Kind of linked data record
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Collection of objects
    Collection,
    /// Scene object
    Object,
    /// Mesh data
    Mesh,
    /// Material
    Material,
}

impl Kind {
    /// Every kind, in category display order
    pub const ALL: [Kind; 4] = [Kind::Collection, Kind::Object, Kind::Mesh, Kind::Material];

    /// Human-readable label used in category headers
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Collection => "Collection",
            Kind::Object => "Object",
            Kind::Mesh => "Mesh",
            Kind::Material => "Material",
        }
    }

    /// Position in the display order
    pub fn position(&self) -> usize {
        match self {
            Kind::Collection => 0,
            Kind::Object => 1,
            Kind::Mesh => 2,
            Kind::Material => 3,
        }
    }

    /// Parse a kind from its label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Kind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
