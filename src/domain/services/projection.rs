//! Projection of the selected library onto a flat, render-ready list
//!
//! Output shape: `Header, [Rows if expanded], Header, [Rows], ...` with
//! headers in [`Kind::ALL`] order and rows sorted by name. The result is a
//! function of its inputs only; the category store is the single piece of
//! state it reads, and reading only registers first-seen kinds.

use crate::domain::entities::{Record, SourceGroup, ViewNode};
use crate::domain::value_objects::Kind;

use super::category_state::CategoryStateStore;

/// Project the selected group's records into view nodes.
///
/// Returns an empty list when there are no groups or `selected` is out of
/// range. `records_of` is asked once, for the selected group only; records
/// it returns that belong to another group are ignored.
pub fn project<F>(
    groups: &[SourceGroup],
    selected: usize,
    records_of: F,
    categories: &mut CategoryStateStore,
) -> Vec<ViewNode>
where
    F: FnOnce(&SourceGroup) -> Vec<Record>,
{
    let Some(group) = groups.get(selected) else {
        return Vec::new();
    };

    let partitions = partition_by_kind(
        records_of(group)
            .into_iter()
            .filter(|record| record.is_from(&group.name)),
    );

    let mut nodes = Vec::new();
    for (kind, names) in Kind::ALL.into_iter().zip(partitions) {
        if names.is_empty() {
            continue;
        }
        let is_expanded = categories.get(kind);
        nodes.push(ViewNode::header(kind, names.len(), is_expanded));
        if is_expanded {
            nodes.extend(names.into_iter().map(|name| ViewNode::row(kind, name)));
        }
    }
    nodes
}

/// Split records into per-kind name lists, each sorted byte-wise
pub fn partition_by_kind(records: impl IntoIterator<Item = Record>) -> [Vec<String>; 4] {
    let mut partitions: [Vec<String>; 4] = Default::default();
    for record in records {
        partitions[record.kind.position()].push(record.name);
    }
    for names in &mut partitions {
        names.sort_unstable();
    }
    partitions
}

/// Kinds that have a header in `nodes`, in display order
pub fn present_kinds(nodes: &[ViewNode]) -> Vec<Kind> {
    nodes
        .iter()
        .filter(|node| node.is_header())
        .map(ViewNode::kind)
        .collect()
}
