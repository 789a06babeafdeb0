//! Search filter over a projected node list
//!
//! Matching is a case-insensitive substring test against a header's label
//! or a row's name. A matching row always brings its nearest preceding
//! header along, so no row is ever shown without its category. A matching
//! header does not bring its rows along.

use crate::domain::entities::ViewNode;

/// Indices of the nodes visible under `search_term`, ascending and unique
pub fn filter(nodes: &[ViewNode], search_term: &str) -> Vec<usize> {
    if search_term.is_empty() {
        return (0..nodes.len()).collect();
    }

    let term = search_term.to_lowercase();
    let mut visible = vec![false; nodes.len()];
    let mut current_header: Option<usize> = None;

    for (index, node) in nodes.iter().enumerate() {
        if node.is_header() {
            current_header = Some(index);
        }
        if !node.search_text().to_lowercase().contains(&term) {
            continue;
        }
        visible[index] = true;
        if !node.is_header() {
            if let Some(header) = current_header {
                visible[header] = true;
            }
        }
    }

    visible
        .into_iter()
        .enumerate()
        .filter_map(|(index, shown)| shown.then_some(index))
        .collect()
}

/// Index of the header a node sits under, scanning backward from `index`
pub fn parent_header(nodes: &[ViewNode], index: usize) -> Option<usize> {
    nodes
        .get(..=index)?
        .iter()
        .rposition(ViewNode::is_header)
}
