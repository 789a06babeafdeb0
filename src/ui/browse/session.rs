//! Browse session state: the view, the input mode and the last outcome.
//!
//! Kept free of terminal I/O so key handling can be tested directly.

use crate::application::{select_users_of_selected, LibraryOps, ViewController};
use crate::domain::entities::ViewNode;
use crate::domain::ports::{FileProbe, HostStore, Launcher};
use crate::domain::value_objects::{Outcome, OutcomeCode};
use crate::ui::render::{
    empty_list_message, render_groups, render_help_bar, render_nodes, render_outcome, GroupLine,
};

use super::input::{BrowseAction, InputMode};

/// Whether the loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Destructive action waiting for a second key press
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Delete(String),
    Clean,
}

pub struct BrowseSession<'a, S, P, L>
where
    S: HostStore + ?Sized,
    P: FileProbe,
    L: Launcher,
{
    store: &'a mut S,
    ops: &'a LibraryOps<P, L>,
    view: ViewController,
    mode: InputMode,
    status: Option<Outcome>,
    pending: Option<Pending>,
}

impl<'a, S, P, L> BrowseSession<'a, S, P, L>
where
    S: HostStore + ?Sized,
    P: FileProbe,
    L: Launcher,
{
    pub fn new(store: &'a mut S, ops: &'a LibraryOps<P, L>, mut view: ViewController) -> Self {
        view.rebuild(&*store);
        Self {
            store,
            ops,
            view,
            mode: InputMode::Normal,
            status: None,
            pending: None,
        }
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn status(&self) -> Option<&Outcome> {
        self.status.as_ref()
    }

    /// Apply one action
    pub fn handle(&mut self, action: BrowseAction) -> Flow {
        let pending = self.pending.take();

        match action {
            BrowseAction::Quit => return Flow::Quit,
            BrowseAction::Up => {
                self.view.move_row(-1);
            }
            BrowseAction::Down => {
                self.view.move_row(1);
            }
            BrowseAction::PrevGroup => self.view.move_group(-1, &*self.store),
            BrowseAction::NextGroup => self.view.move_group(1, &*self.store),
            BrowseAction::Activate => self.activate(),
            BrowseAction::ToggleAll => {
                self.status = Some(self.view.toggle_all(&*self.store));
            }
            BrowseAction::Refresh => {
                self.status = Some(self.ops.refresh(&*self.store, &mut self.view));
            }
            BrowseAction::Reload => {
                if let Some(name) = self.selected_group_name() {
                    self.status = Some(self.ops.reload(&mut *self.store, &mut self.view, &name));
                }
            }
            BrowseAction::Open => {
                if let Some(name) = self.selected_group_name() {
                    self.status = Some(self.ops.open(&*self.store, &mut self.view, &name));
                }
            }
            BrowseAction::Delete => {
                if let Some(name) = self.selected_group_name() {
                    if pending == Some(Pending::Delete(name.clone())) {
                        self.status =
                            Some(self.ops.delete(&mut *self.store, &mut self.view, &name));
                    } else {
                        self.ask_again(
                            Pending::Delete(name.clone()),
                            format!("Press d again to delete library '{}'.", name),
                        );
                    }
                }
            }
            BrowseAction::Clean => {
                if pending == Some(Pending::Clean) {
                    self.status = Some(self.ops.cleanup_broken(&mut *self.store, &mut self.view));
                } else {
                    self.ask_again(
                        Pending::Clean,
                        "Press c again to delete every library whose file is missing.",
                    );
                }
            }
            BrowseAction::StartSearch => self.mode = InputMode::Search,
            BrowseAction::SearchChar(c) => {
                let mut term = self.view.view_state().search_term.clone();
                term.push(c);
                self.view.set_search(term, &*self.store);
            }
            BrowseAction::SearchBackspace => {
                let mut term = self.view.view_state().search_term.clone();
                term.pop();
                self.view.set_search(term, &*self.store);
            }
            BrowseAction::EndSearch => self.mode = InputMode::Normal,
            BrowseAction::ClearSearch => {
                self.mode = InputMode::Normal;
                self.view.set_search("", &*self.store);
            }
        }
        Flow::Continue
    }

    fn activate(&mut self) {
        let kind = match self.view.selected_node() {
            Some(ViewNode::Header { kind, .. }) => *kind,
            Some(ViewNode::Row { .. }) => {
                self.status = Some(select_users_of_selected(&mut *self.store, &mut self.view));
                return;
            }
            None => return,
        };
        self.status = Some(self.view.toggle_category(kind, &*self.store));
    }

    fn ask_again(&mut self, pending: Pending, message: impl Into<String>) {
        self.pending = Some(pending);
        self.status = Some(Outcome::warning(OutcomeCode::Noop, message));
    }

    fn selected_group_name(&self) -> Option<String> {
        self.view.selected_group().map(|g| g.name.clone())
    }

    /// Compose the full screen, fitting the list into `height` lines
    pub fn render(&self, unicode: bool, height: u16) -> Vec<String> {
        let group_lines: Vec<GroupLine> = self
            .view
            .groups()
            .iter()
            .map(|group| GroupLine {
                name: group.name.clone(),
                file_path: group.file_path.to_string(),
                exists: self.ops.exists(group),
            })
            .collect();

        let mut lines = vec!["Linked Libraries".to_string()];
        if group_lines.is_empty() {
            lines.push(empty_list_message(false, ""));
        } else {
            lines.extend(
                render_groups(&group_lines, self.view.selected_group_index(), unicode)
                    .lines()
                    .map(str::to_string),
            );
        }
        lines.push(String::new());

        let term = &self.view.view_state().search_term;
        let caret = if self.mode == InputMode::Search { "_" } else { "" };
        lines.push(format!("Search: {}{}", term, caret));

        let mut footer = vec![String::new()];
        footer.push(
            self.status
                .as_ref()
                .map(|outcome| render_outcome(outcome, unicode))
                .unwrap_or_default(),
        );
        footer.extend(render_help_bar().lines().map(str::to_string));

        let room = usize::from(height)
            .saturating_sub(lines.len() + footer.len())
            .max(1);
        if self.view.visible_count() == 0 {
            if !group_lines.is_empty() {
                lines.push(empty_list_message(true, term));
            }
        } else {
            let selected = self.view.selected_row().unwrap_or(0);
            let offset = (selected + 1).saturating_sub(room);
            let nodes = self.view.visible_nodes().skip(offset).take(room);
            lines.extend(
                render_nodes(nodes, Some(selected - offset), unicode, true)
                    .lines()
                    .map(str::to_string),
            );
        }

        lines.extend(footer);
        lines
    }
}
