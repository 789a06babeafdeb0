//! View node entity - one renderable line of the linked data list

use serde::Serialize;

use crate::domain::value_objects::Kind;

/// One line of the flattened list: a category header or a record row.
///
/// Nodes are produced fresh by every projection and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum ViewNode {
    Header {
        kind: Kind,
        label: String,
        record_count: usize,
        is_expanded: bool,
    },
    Row {
        kind: Kind,
        name: String,
        parent_kind: Kind,
    },
}

impl ViewNode {
    /// Build a category header; the label is `"<Kind> (<count>)"`
    pub fn header(kind: Kind, record_count: usize, is_expanded: bool) -> Self {
        ViewNode::Header {
            kind,
            label: format!("{} ({})", kind.label(), record_count),
            record_count,
            is_expanded,
        }
    }

    /// Build a record row under its category
    pub fn row(kind: Kind, name: impl Into<String>) -> Self {
        ViewNode::Row {
            kind,
            name: name.into(),
            parent_kind: kind,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            ViewNode::Header { kind, .. } | ViewNode::Row { kind, .. } => *kind,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, ViewNode::Header { .. })
    }

    /// Text the search term is matched against
    pub fn search_text(&self) -> &str {
        match self {
            ViewNode::Header { label, .. } => label,
            ViewNode::Row { name, .. } => name,
        }
    }
}
