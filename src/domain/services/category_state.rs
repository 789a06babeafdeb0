//! Category expand/collapse state
//!
//! Lives as long as the view it belongs to, independent of rebuilds. Entries
//! are never forgotten when a category temporarily has no records, so the
//! user's last choice comes back with the data. The kind enumeration is
//! closed, which bounds the store at four entries.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::Kind;

/// Expand flags per category kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStateStore {
    expanded: BTreeMap<Kind, bool>,
}

impl CategoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand flag for `kind`; a kind seen for the first time starts expanded
    pub fn get(&mut self, kind: Kind) -> bool {
        *self.expanded.entry(kind).or_insert(true)
    }

    /// Read-only lookup with the same default as [`get`](Self::get)
    pub fn is_expanded(&self, kind: Kind) -> bool {
        self.expanded.get(&kind).copied().unwrap_or(true)
    }

    /// Flip the flag for `kind`, returning the new value
    pub fn toggle(&mut self, kind: Kind) -> bool {
        let flag = self.expanded.entry(kind).or_insert(true);
        *flag = !*flag;
        *flag
    }

    /// Set every known category to `target`
    pub fn toggle_all(&mut self, target: bool) {
        for flag in self.expanded.values_mut() {
            *flag = target;
        }
    }

    /// Whether every kind in `kinds` is expanded
    pub fn all_expanded(&self, kinds: &[Kind]) -> bool {
        kinds.iter().all(|kind| self.is_expanded(*kind))
    }

    /// Kinds with a stored entry, in display order
    pub fn known(&self) -> impl Iterator<Item = (Kind, bool)> + '_ {
        self.expanded.iter().map(|(kind, flag)| (*kind, *flag))
    }

    /// Forget everything; only used when the view loses its document
    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}
