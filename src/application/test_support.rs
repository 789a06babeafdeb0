//! In-memory doubles for application tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Record, SceneObject, SourceGroup};
use crate::domain::ports::{
    FileProbe, HostStore, LaunchError, Launcher, StoreError, StoreResult, ViewEvent,
    ViewEventSink,
};
use crate::domain::value_objects::{Kind, LibraryPath};

#[derive(Debug, Default)]
pub struct FakeStore {
    pub groups: Vec<SourceGroup>,
    pub records: Vec<Record>,
    pub objects: Vec<SceneObject>,
    pub selected: Vec<String>,
    pub active: Option<String>,
    pub reloaded: Vec<String>,
    pub failing: HashSet<String>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, name: &str, path: &str) -> Self {
        self.groups.push(SourceGroup::new(name, path));
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Make host operations on `name` fail
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn remove_group(&mut self, name: &str) {
        self.groups.retain(|g| g.name != name);
        self.records.retain(|r| !r.is_from(name));
    }
}

impl HostStore for FakeStore {
    fn list_groups(&self) -> Vec<SourceGroup> {
        self.groups.clone()
    }

    fn records_of(&self, group: &str) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.is_from(group))
            .cloned()
            .collect()
    }

    fn scene_objects(&self) -> Vec<SceneObject> {
        self.objects.clone()
    }

    fn reload_group(&mut self, name: &str) -> StoreResult<()> {
        if self.failing.contains(name) {
            return Err(StoreError::Runtime("cannot read file".to_string()));
        }
        self.reloaded.push(name.to_string());
        Ok(())
    }

    fn delete_group(&mut self, name: &str) -> StoreResult<()> {
        if self.failing.contains(name) {
            return Err(StoreError::Runtime("library is in use".to_string()));
        }
        if self.find_group(name).is_none() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        self.remove_group(name);
        Ok(())
    }

    fn deselect_all(&mut self) {
        self.selected.clear();
    }

    fn select_object(&mut self, name: &str) -> StoreResult<()> {
        let object = self
            .objects
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })?;
        if !object.in_view_layer {
            return Err(StoreError::Runtime(format!(
                "object '{}' can't be selected because it is not in View Layer",
                name
            )));
        }
        self.selected.push(name.to_string());
        Ok(())
    }

    fn set_active_object(&mut self, name: &str) -> StoreResult<()> {
        self.active = Some(name.to_string());
        Ok(())
    }

    fn find_record(&self, kind: Kind, name: &str) -> Option<Record> {
        self.records
            .iter()
            .find(|r| r.kind == kind && r.name == name)
            .cloned()
    }
}

/// Probe that treats a fixed set of raw paths as existing
#[derive(Debug, Default)]
pub struct FakeProbe {
    pub existing: HashSet<String>,
}

impl FakeProbe {
    pub fn with_existing(paths: &[&str]) -> Self {
        Self {
            existing: paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl FileProbe for FakeProbe {
    fn resolve(&self, path: &LibraryPath) -> PathBuf {
        path.resolve(Path::new("/project"))
    }

    fn exists(&self, path: &LibraryPath) -> bool {
        self.existing.contains(path.as_str())
    }
}

/// Launcher that records what it was asked to open
#[derive(Debug, Default)]
pub struct FakeLauncher {
    pub launched: RefCell<Vec<PathBuf>>,
    pub fail: bool,
}

impl Launcher for FakeLauncher {
    fn launch(&self, file: &Path) -> Result<(), LaunchError> {
        if self.fail {
            return Err(LaunchError::NotConfigured);
        }
        self.launched.borrow_mut().push(file.to_path_buf());
        Ok(())
    }
}

/// Sink that counts `Rebuilt` events
#[derive(Debug, Clone, Default)]
pub struct RebuildCounter(Rc<Cell<usize>>);

impl RebuildCounter {
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl ViewEventSink for RebuildCounter {
    fn on_event(&self, event: ViewEvent) {
        if let ViewEvent::Rebuilt { .. } = event {
            self.0.set(self.0.get() + 1);
        }
    }
}
