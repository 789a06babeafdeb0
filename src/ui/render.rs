//! Text rendering for the library list, the linked data list and outcomes.
//!
//! Every function returns plain strings; the browse loop and the one-shot
//! commands decide where they go.

use unicode_width::UnicodeWidthStr;

use crate::domain::entities::ViewNode;
use crate::domain::value_objects::Outcome;

use super::theme::{disclosure_icon, icons, icons_ascii, kind_icon, severity_icon};

/// A library as shown in the library list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLine {
    pub name: String,
    pub file_path: String,
    pub exists: bool,
}

fn cursor(is_active: bool) -> &'static str {
    if is_active {
        "> "
    } else {
        "  "
    }
}

/// Render the library list, name column padded to the widest name
pub fn render_groups(groups: &[GroupLine], selected: Option<usize>, unicode: bool) -> String {
    let name_width = groups
        .iter()
        .map(|g| UnicodeWidthStr::width(g.name.as_str()))
        .max()
        .unwrap_or(0);

    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let icon = match (group.exists, unicode) {
                (true, true) => icons::LIBRARY,
                (true, false) => icons_ascii::LIBRARY,
                (false, true) => icons::BROKEN,
                (false, false) => icons_ascii::BROKEN,
            };
            let pad = " ".repeat(name_width - UnicodeWidthStr::width(group.name.as_str()) + 2);
            let missing = if group.exists { "" } else { "  (missing)" };
            format!(
                "{}{} {}{}{}{}",
                cursor(selected == Some(i)),
                icon,
                group.name,
                pad,
                group.file_path,
                missing
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one view node; rows are indented under their header
pub fn render_node(node: &ViewNode, unicode: bool) -> String {
    match node {
        ViewNode::Header {
            label, is_expanded, ..
        } => format!("{} {}", disclosure_icon(*is_expanded, unicode), label),
        ViewNode::Row { kind, name, .. } => {
            format!("  {} {}", kind_icon(*kind, unicode), name)
        }
    }
}

/// Render visible nodes; with `cursor_at`, a cursor column marks that position
pub fn render_nodes<'a>(
    nodes: impl IntoIterator<Item = &'a ViewNode>,
    cursor_at: Option<usize>,
    unicode: bool,
    show_cursor: bool,
) -> String {
    nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| {
            let line = render_node(node, unicode);
            if show_cursor {
                format!("{}{}", cursor(cursor_at == Some(i)), line)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line outcome with its severity icon
pub fn render_outcome(outcome: &Outcome, unicode: bool) -> String {
    format!("{} {}", severity_icon(outcome.severity, unicode), outcome.message)
}

/// Message shown when the linked data list is empty
pub fn empty_list_message(has_groups: bool, search_term: &str) -> String {
    if !has_groups {
        "No linked libraries.".to_string()
    } else if !search_term.is_empty() {
        format!("No linked data matches '{}'.", search_term)
    } else {
        "No linked data from this library.".to_string()
    }
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[/] Search  [Enter] Toggle/Select users  [a] Toggle all  [r] Reload  [o] Open\n\
         [d] Delete  [c] Clean broken  [f] Refresh  [q] Quit\n\
         (Use ↑↓ to move, ←→ to switch library)",
    )
}
