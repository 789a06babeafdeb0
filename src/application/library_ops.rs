//! Library operations
//!
//! Refresh, reload, open, delete and broken-link cleanup for linked
//! libraries. Every operation:
//! - resolves the library by name first (missing → `NotFound`, no crash)
//! - turns host and launcher failures into an [`Outcome`]
//! - rebuilds the view when the host data changed

use tracing::warn;

use crate::domain::entities::SourceGroup;
use crate::domain::ports::{FileProbe, HostStore, Launcher, StoreError};
use crate::domain::value_objects::{Outcome, OutcomeCode};

use super::view_controller::{HostEvent, ViewController};

/// Library operations over a file probe and an external launcher
pub struct LibraryOps<P, L>
where
    P: FileProbe,
    L: Launcher,
{
    probe: P,
    launcher: L,
}

impl<P, L> LibraryOps<P, L>
where
    P: FileProbe,
    L: Launcher,
{
    pub fn new(probe: P, launcher: L) -> Self {
        Self { probe, launcher }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Whether the group's backing file exists right now
    pub fn exists(&self, group: &SourceGroup) -> bool {
        self.probe.exists(&group.file_path)
    }

    /// Groups whose backing file is missing
    pub fn broken_groups<S: HostStore + ?Sized>(&self, store: &S) -> Vec<SourceGroup> {
        store
            .list_groups()
            .into_iter()
            .filter(|group| !self.exists(group))
            .collect()
    }

    /// Re-read the store and rebuild the list
    pub fn refresh<S: HostStore + ?Sized>(&self, store: &S, view: &mut ViewController) -> Outcome {
        view.rebuild(store);
        view.report("refresh", Outcome::ok("Libraries list refreshed"))
    }

    /// Reload one library from its file
    pub fn reload<S: HostStore + ?Sized>(
        &self,
        store: &mut S,
        view: &mut ViewController,
        name: &str,
    ) -> Outcome {
        if store.find_group(name).is_none() {
            return view.report(
                "reload",
                Outcome::error(
                    OutcomeCode::NotFound,
                    format!("Library data block not found: {}", name),
                ),
            );
        }

        match store.reload_group(name) {
            Ok(()) => {
                view.on_host_event(
                    HostEvent::GroupReloaded {
                        name: name.to_string(),
                    },
                    &*store,
                );
                view.report("reload", Outcome::ok(format!("Reloaded: {}", name)))
            }
            Err(err) => view.report(
                "reload",
                Outcome::error(code_for(&err), format!("Reload failed for {}: {}", name, err)),
            ),
        }
    }

    /// Open one library in a new external process
    pub fn open<S: HostStore + ?Sized>(
        &self,
        store: &S,
        view: &mut ViewController,
        name: &str,
    ) -> Outcome {
        let Some(group) = store.find_group(name) else {
            return view.report(
                "open",
                Outcome::error(
                    OutcomeCode::NotFound,
                    format!("Library data block not found: {}", name),
                ),
            );
        };

        let path = self.probe.resolve(&group.file_path);
        if !self.probe.exists(&group.file_path) {
            return view.report(
                "open",
                Outcome::error(
                    OutcomeCode::FileMissing,
                    format!("File not found at: {}", path.display()),
                ),
            );
        }

        match self.launcher.launch(&path) {
            Ok(()) => {
                view.on_host_event(HostEvent::RecordsChanged, store);
                view.report(
                    "open",
                    Outcome::ok(format!("Launched new instance for: {}", name)),
                )
            }
            Err(err) => view.report(
                "open",
                Outcome::error(
                    OutcomeCode::Failed,
                    format!(
                        "Open failed for {}. Check if the file path is correct: {}",
                        name, err
                    ),
                ),
            ),
        }
    }

    /// Delete one library and everything linked from it
    pub fn delete<S: HostStore + ?Sized>(
        &self,
        store: &mut S,
        view: &mut ViewController,
        name: &str,
    ) -> Outcome {
        let Some(group) = store.find_group(name) else {
            return view.report(
                "delete",
                Outcome::warning(
                    OutcomeCode::NotFound,
                    format!(
                        "Library data block not found (Name: {}). Already deleted?",
                        name
                    ),
                ),
            );
        };
        let is_broken = !self.exists(&group);

        match store.delete_group(name) {
            Ok(()) => {
                view.on_host_event(
                    HostEvent::GroupRemoved {
                        name: name.to_string(),
                    },
                    &*store,
                );
                let message = if is_broken {
                    format!("Cleaned up and deleted broken Library: {}", name)
                } else {
                    format!("Force Deleted Library: {}", name)
                };
                view.report("delete", Outcome::ok(message).with_count(1))
            }
            Err(err) => view.report(
                "delete",
                Outcome::error(
                    code_for(&err),
                    format!("Failed to delete library '{}': {}", name, err),
                ),
            ),
        }
    }

    /// Delete every library whose backing file is missing
    pub fn cleanup_broken<S: HostStore + ?Sized>(
        &self,
        store: &mut S,
        view: &mut ViewController,
    ) -> Outcome {
        let broken = self.broken_groups(&*store);
        if broken.is_empty() {
            return view.report(
                "cleanup",
                Outcome::noop("No broken library links found to clean up."),
            );
        }

        let mut deleted = 0;
        let mut failed = Vec::new();
        for group in &broken {
            match store.delete_group(&group.name) {
                Ok(()) => deleted += 1,
                Err(err) => {
                    warn!(library = %group.name, error = %err, "failed to delete broken library");
                    failed.push(group.name.clone());
                }
            }
        }

        if deleted > 0 {
            view.on_host_event(HostEvent::RecordsChanged, &*store);
        }

        let outcome = match (deleted, failed.is_empty()) {
            (_, true) => Outcome::ok(format!(
                "Successfully cleaned up {} broken library link(s).",
                deleted
            )),
            (0, false) => Outcome::error(
                OutcomeCode::Failed,
                format!("Failed to clean up broken libraries: {}", failed.join(", ")),
            ),
            (_, false) => Outcome::warning(
                OutcomeCode::Partial,
                format!(
                    "Cleaned up {} broken library link(s); failed: {}",
                    deleted,
                    failed.join(", ")
                ),
            ),
        };
        view.report("cleanup", outcome.with_count(deleted))
    }
}

fn code_for(err: &StoreError) -> OutcomeCode {
    match err {
        StoreError::NotFound { .. } => OutcomeCode::NotFound,
        StoreError::FileMissing { .. } => OutcomeCode::FileMissing,
        StoreError::Runtime(_) | StoreError::Io(_) => OutcomeCode::Failed,
    }
}
