//! View Controller
//!
//! Owns the view state of the linked data list and wires host events to the
//! domain services. Every trigger runs the same full rebuild:
//!
//! 1. re-read the groups from the store and clamp the group index
//! 2. project the selected group's records
//! 3. filter by the search term
//! 4. clamp the row index against the visible count
//!
//! The renderer only reads snapshots from here; all changes go through the
//! controller's operations.

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{SourceGroup, ViewNode};
use crate::domain::ports::{HostStore, NoopEventSink, ViewEvent, ViewEventSink};
use crate::domain::services::{
    clamp_group_index, clamp_row_index, filter, present_kinds, project, CategoryStateStore,
};
use crate::domain::value_objects::{Kind, Outcome, OutcomeCode};

/// Selection and search state of one list view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Index into the group list; meaningless while there are no groups
    pub selected_group_index: usize,
    /// Position in the visible list; meaningless while nothing is visible
    pub selected_row_index: usize,
    /// Case-insensitive substring filter
    pub search_term: String,
}

/// Change in the host store that invalidates the current projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    GroupAdded { name: String },
    GroupRemoved { name: String },
    GroupReloaded { name: String },
    RecordRenamed { kind: Kind, from: String, to: String },
    RecordsChanged,
}

/// Controller for the two-level library/linked-data list
pub struct ViewController {
    state: ViewState,
    categories: CategoryStateStore,
    groups: Vec<SourceGroup>,
    nodes: Vec<ViewNode>,
    visible: Vec<usize>,
    sink: Box<dyn ViewEventSink>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewController")
            .field("state", &self.state)
            .field("categories", &self.categories)
            .field("nodes", &self.nodes.len())
            .field("visible", &self.visible.len())
            .finish()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            state: ViewState::default(),
            categories: CategoryStateStore::new(),
            groups: Vec::new(),
            nodes: Vec::new(),
            visible: Vec::new(),
            sink: Box::new(NoopEventSink),
        }
    }

    /// Send view events to `sink`
    pub fn with_sink(mut self, sink: Box<dyn ViewEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Start with a search term already applied (takes effect on the next rebuild)
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.state.search_term = term.into();
        self
    }

    /// Recompute groups, projection, visible list and both indices
    pub fn rebuild<S: HostStore + ?Sized>(&mut self, store: &S) {
        self.groups = store.list_groups();
        self.state.selected_group_index =
            clamp_group_index(self.state.selected_group_index, self.groups.len());

        self.nodes = project(
            &self.groups,
            self.state.selected_group_index,
            |group| store.records_of(&group.name),
            &mut self.categories,
        );
        self.visible = filter(&self.nodes, &self.state.search_term);
        self.state.selected_row_index =
            clamp_row_index(self.state.selected_row_index, self.visible.len());

        self.check_invariants();

        let group = self.selected_group().map(|g| g.name.clone());
        debug!(
            group = group.as_deref().unwrap_or("<none>"),
            nodes = self.nodes.len(),
            visible = self.visible.len(),
            "rebuilt linked data list"
        );
        self.sink.on_event(ViewEvent::Rebuilt {
            group,
            node_count: self.nodes.len(),
            visible_count: self.visible.len(),
        });
    }

    /// Select a library by index and rebuild
    pub fn select_group<S: HostStore + ?Sized>(&mut self, index: usize, store: &S) {
        if index != self.state.selected_group_index {
            self.state.selected_group_index = index;
            self.state.selected_row_index = 0;
        }
        self.rebuild(store);
    }

    /// Select a library by name and rebuild; false if no such library
    pub fn select_group_named<S: HostStore + ?Sized>(&mut self, name: &str, store: &S) -> bool {
        let Some(index) = store.list_groups().iter().position(|g| g.name == name) else {
            return false;
        };
        self.select_group(index, store);
        true
    }

    /// Move the group selection by `delta`, stopping at either end
    pub fn move_group<S: HostStore + ?Sized>(&mut self, delta: isize, store: &S) {
        let count = self.groups.len();
        if count == 0 {
            return;
        }
        let target = step(self.state.selected_group_index, delta, count);
        self.select_group(target, store);
    }

    /// Select a visible row by position, clamped like a rebuild would
    pub fn select_row(&mut self, index: usize) -> bool {
        let clamped = clamp_row_index(index, self.visible.len());
        let changed = clamped != self.state.selected_row_index;
        self.state.selected_row_index = clamped;
        changed
    }

    /// Move the row selection by `delta`, stopping at either end
    pub fn move_row(&mut self, delta: isize) -> bool {
        if self.visible.is_empty() {
            return false;
        }
        let target = step(self.state.selected_row_index, delta, self.visible.len());
        self.select_row(target)
    }

    /// Replace the search term and rebuild
    pub fn set_search<S: HostStore + ?Sized>(&mut self, term: impl Into<String>, store: &S) {
        self.state.search_term = term.into();
        self.rebuild(store);
    }

    /// Flip one category present in the current projection
    pub fn toggle_category<S: HostStore + ?Sized>(&mut self, kind: Kind, store: &S) -> Outcome {
        if !present_kinds(&self.nodes).contains(&kind) {
            return self.report(
                "toggle_category",
                Outcome::warning(OutcomeCode::NotFound, format!("Category '{}' not found.", kind)),
            );
        }

        let is_expanded = self.categories.toggle(kind);
        self.sink
            .on_event(ViewEvent::CategoryToggled { kind, is_expanded });
        self.rebuild(store);

        let action = if is_expanded { "Expanded" } else { "Collapsed" };
        self.report(
            "toggle_category",
            Outcome::ok(format!("{} category '{}'.", action, kind)),
        )
    }

    /// Expand every category, or collapse them all if all are expanded
    pub fn toggle_all<S: HostStore + ?Sized>(&mut self, store: &S) -> Outcome {
        let kinds = present_kinds(&self.nodes);
        if kinds.is_empty() {
            return self.report(
                "toggle_all",
                Outcome::noop("No categories available to toggle."),
            );
        }

        let should_expand = !self.categories.all_expanded(&kinds);
        self.categories.toggle_all(should_expand);
        self.rebuild(store);

        let action = if should_expand { "Expanded" } else { "Collapsed" };
        self.report("toggle_all", Outcome::ok(format!("{} all categories.", action)))
    }

    /// React to a change in the host store
    pub fn on_host_event<S: HostStore + ?Sized>(&mut self, event: HostEvent, store: &S) {
        debug!(?event, "host store changed");
        self.rebuild(store);
    }

    /// The view has no backing document any more: forget everything
    pub fn detach(&mut self) {
        self.state = ViewState::default();
        self.categories.reset();
        self.groups.clear();
        self.nodes.clear();
        self.visible.clear();
        self.sink.on_event(ViewEvent::Detached);
    }

    /// Log an operation outcome and forward it to the event sink
    pub fn report(&self, operation: &str, outcome: Outcome) -> Outcome {
        crate::logging::log_outcome(operation, &outcome);
        self.sink.on_event(ViewEvent::Finished {
            operation: operation.to_string(),
            outcome: outcome.clone(),
        });
        outcome
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn categories(&self) -> &CategoryStateStore {
        &self.categories
    }

    /// Groups as of the last rebuild
    pub fn groups(&self) -> &[SourceGroup] {
        &self.groups
    }

    /// The full projection, before filtering
    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    /// Indices into [`nodes`](Self::nodes) that pass the filter
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &ViewNode> + '_ {
        self.visible.iter().map(|&index| &self.nodes[index])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Selected group index, `None` when there are no groups
    pub fn selected_group_index(&self) -> Option<usize> {
        (!self.groups.is_empty()).then_some(self.state.selected_group_index)
    }

    pub fn selected_group(&self) -> Option<&SourceGroup> {
        self.groups.get(self.selected_group_index()?)
    }

    /// Selected row position, `None` when nothing is visible
    pub fn selected_row(&self) -> Option<usize> {
        (!self.visible.is_empty()).then_some(self.state.selected_row_index)
    }

    pub fn selected_node(&self) -> Option<&ViewNode> {
        let index = *self.visible.get(self.selected_row()?)?;
        self.nodes.get(index)
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.groups.is_empty() || self.state.selected_group_index < self.groups.len(),
            "group index {} out of range for {} groups",
            self.state.selected_group_index,
            self.groups.len()
        );
        debug_assert!(
            self.visible.is_empty() || self.state.selected_row_index < self.visible.len(),
            "row index {} out of range for {} visible nodes",
            self.state.selected_row_index,
            self.visible.len()
        );
        debug_assert!(self.visible.iter().all(|&i| i < self.nodes.len()));
    }
}

/// `current + delta` kept inside `0..len`
fn step(current: usize, delta: isize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    current.saturating_add_signed(delta).min(last)
}
