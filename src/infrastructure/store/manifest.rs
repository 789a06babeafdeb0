//! TOML Manifest Store
//!
//! Implements the HostStore port over a scene manifest file:
//!
//! ```toml
//! [[library]]
//! name = "props.blend"
//! filepath = "//libs/props.blend"
//!
//! [[record]]
//! kind = "mesh"
//! name = "Cube"
//! library = "props.blend"
//!
//! [[object]]
//! name = "Cube.001"
//! type = "mesh"
//! data = "Cube"
//! ```
//!
//! `//` paths resolve against the manifest's directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::entities::{Record, SceneObject, SourceGroup};
use crate::domain::ports::{HostStore, StoreError, StoreResult};
use crate::domain::value_objects::Kind;
use crate::error::{LinkviewError, LinkviewResult};

/// On-disk manifest layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Manifest {
    /// Currently selected objects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    selected: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
    #[serde(default, rename = "library")]
    libraries: Vec<SourceGroup>,
    #[serde(default, rename = "record")]
    records: Vec<Record>,
    #[serde(default, rename = "object")]
    objects: Vec<SceneObject>,
}

impl Manifest {
    fn parse(content: &str) -> Result<Self, String> {
        let deserializer = toml::de::Deserializer::new(content);
        let manifest: Manifest = serde_ignored::deserialize(deserializer, |key| {
            warn!(key = %key, "ignoring unknown manifest key");
        })
        .map_err(|e| e.to_string())?;
        manifest.check_unique()?;
        Ok(manifest)
    }

    /// Library names and record identities must not repeat
    fn check_unique(&self) -> Result<(), String> {
        let mut libraries = HashSet::new();
        for group in &self.libraries {
            if !libraries.insert(group.name.as_str()) {
                return Err(format!("duplicate library '{}'", group.name));
            }
        }
        let mut records = HashSet::new();
        for record in &self.records {
            if !records.insert((record.kind, record.name.as_str())) {
                return Err(format!(
                    "duplicate {} record '{}'",
                    record.kind.label(),
                    record.name
                ));
            }
        }
        Ok(())
    }
}

/// Whether `object` is, or uses, one of `records`
fn refers_to(object: &SceneObject, records: &[Record]) -> bool {
    let has = |kind: Kind, name: &str| records.iter().any(|r| r.kind == kind && r.name == name);
    has(Kind::Object, &object.name)
        || object.data.as_deref().is_some_and(|d| has(Kind::Mesh, d))
        || object
            .instance_collection
            .as_deref()
            .is_some_and(|c| has(Kind::Collection, c))
        || object
            .data_materials
            .iter()
            .chain(&object.slot_materials)
            .any(|m| has(Kind::Material, m))
}

/// Host store backed by a TOML manifest
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: Option<PathBuf>,
    root: PathBuf,
    manifest: Manifest,
    dirty: bool,
}

impl ManifestStore {
    /// Load a manifest file; its directory becomes the project root
    pub fn load(path: &Path) -> LinkviewResult<Self> {
        if !path.exists() {
            return Err(LinkviewError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let mut store = Self::parse(&content, &root).map_err(|message| {
            LinkviewError::InvalidManifest {
                file: path.to_path_buf(),
                message,
            }
        })?;
        store.path = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            libraries = store.manifest.libraries.len(),
            records = store.manifest.records.len(),
            objects = store.manifest.objects.len(),
            "loaded manifest"
        );
        Ok(store)
    }

    /// Parse manifest text with an explicit project root
    pub fn from_toml(content: &str, root: impl Into<PathBuf>) -> LinkviewResult<Self> {
        let root = root.into();
        Self::parse(content, &root).map_err(|message| LinkviewError::InvalidManifest {
            file: PathBuf::from("<inline>"),
            message,
        })
    }

    fn parse(content: &str, root: &Path) -> Result<Self, String> {
        let manifest = Manifest::parse(content)?;
        Ok(Self {
            path: None,
            root: root.to_path_buf(),
            manifest,
            dirty: false,
        })
    }

    /// Directory that `//` paths are relative to
    pub fn project_root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the store changed since it was loaded or saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn selected_objects(&self) -> &[String] {
        &self.manifest.selected
    }

    pub fn active_object(&self) -> Option<&str> {
        self.manifest.active.as_deref()
    }

    pub fn to_toml_string(&self) -> LinkviewResult<String> {
        Ok(toml::to_string(&self.manifest)?)
    }

    /// Write the manifest back to the file it was loaded from
    pub fn save(&mut self) -> LinkviewResult<()> {
        let path = self.path.clone().ok_or(LinkviewError::NoBackingFile)?;
        self.save_to(&path)
    }

    /// Write the manifest to `path`, replacing it atomically
    pub fn save_to(&mut self, path: &Path) -> LinkviewResult<()> {
        let content = self.to_toml_string()?;
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;
        self.dirty = false;
        debug!(path = %path.display(), "saved manifest");
        Ok(())
    }

    fn object_exists(&self, name: &str) -> bool {
        self.manifest.objects.iter().any(|o| o.name == name)
    }

    /// The manifest as it currently is on disk, when the store has a file
    fn read_backing_manifest(&self) -> StoreResult<Option<Manifest>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::FileMissing { path: path.clone() },
            _ => StoreError::Io(e),
        })?;
        Manifest::parse(&content)
            .map(Some)
            .map_err(|e| StoreError::Runtime(format!("invalid manifest: {}", e)))
    }

    /// Swap one library's entry, records and their users for `on_disk`'s
    fn replace_group(&mut self, group: SourceGroup, on_disk: &Manifest) -> bool {
        let name = group.name.clone();
        let mut changed = false;

        if let Some(slot) = self.manifest.libraries.iter_mut().find(|g| g.name == name) {
            if *slot != group {
                *slot = group;
                changed = true;
            }
        }

        let (old, mut records): (Vec<Record>, Vec<Record>) =
            std::mem::take(&mut self.manifest.records)
                .into_iter()
                .partition(|r| r.is_from(&name));
        let mut fresh = Vec::new();
        for record in on_disk.records.iter().filter(|r| r.is_from(&name)) {
            if records
                .iter()
                .any(|r| r.kind == record.kind && r.name == record.name)
            {
                warn!(library = %name, record = %record.name, "record already linked from another library");
                continue;
            }
            fresh.push(record.clone());
        }
        changed |= old != fresh;

        let gone: Vec<Record> = old
            .into_iter()
            .filter(|r| !fresh.iter().any(|f| f.kind == r.kind && f.name == r.name))
            .collect();
        records.extend(fresh.iter().cloned());
        self.manifest.records = records;
        self.unlink_records(&gone);

        for object in on_disk.objects.iter().filter(|o| refers_to(o, &fresh)) {
            match self.manifest.objects.iter_mut().find(|o| o.name == object.name) {
                Some(existing) if existing == object => {}
                Some(existing) => {
                    *existing = object.clone();
                    changed = true;
                }
                None => {
                    self.manifest.objects.push(object.clone());
                    changed = true;
                }
            }
        }

        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Remove references to records that no longer exist
    fn unlink_records(&mut self, removed: &[Record]) {
        let is_removed =
            |kind: Kind, name: &str| removed.iter().any(|r| r.kind == kind && r.name == name);

        // Linked objects leave the scene together with their library
        self.manifest
            .objects
            .retain(|object| !is_removed(Kind::Object, &object.name));

        for object in &mut self.manifest.objects {
            if object
                .data
                .as_deref()
                .is_some_and(|data| is_removed(Kind::Mesh, data))
            {
                object.data = None;
            }
            if object
                .instance_collection
                .as_deref()
                .is_some_and(|c| is_removed(Kind::Collection, c))
            {
                object.instance_collection = None;
            }
            object
                .data_materials
                .retain(|m| !is_removed(Kind::Material, m));
            object
                .slot_materials
                .retain(|m| !is_removed(Kind::Material, m));
        }

        let objects = &self.manifest.objects;
        self.manifest
            .selected
            .retain(|name| objects.iter().any(|o| &o.name == name));
        if let Some(active) = &self.manifest.active {
            if !objects.iter().any(|o| &o.name == active) {
                self.manifest.active = None;
            }
        }
    }
}

impl HostStore for ManifestStore {
    fn list_groups(&self) -> Vec<SourceGroup> {
        self.manifest.libraries.clone()
    }

    fn records_of(&self, group: &str) -> Vec<Record> {
        self.manifest
            .records
            .iter()
            .filter(|r| r.is_from(group))
            .cloned()
            .collect()
    }

    fn scene_objects(&self) -> Vec<SceneObject> {
        self.manifest.objects.clone()
    }

    fn reload_group(&mut self, name: &str) -> StoreResult<()> {
        if self.find_group(name).is_none() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        let on_disk = self.read_backing_manifest()?;
        let group = match &on_disk {
            Some(manifest) => manifest
                .libraries
                .iter()
                .find(|g| g.name == name)
                .cloned()
                .ok_or_else(|| {
                    StoreError::Runtime(format!(
                        "library '{}' is no longer listed in the manifest",
                        name
                    ))
                })?,
            None => self.find_group(name).ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })?,
        };

        let path = group.file_path.resolve(&self.root);
        let metadata = fs::metadata(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::FileMissing { path: path.clone() },
            _ => StoreError::Io(e),
        })?;
        if !metadata.is_file() {
            return Err(StoreError::Runtime(format!(
                "cannot read file '{}': not a regular file",
                path.display()
            )));
        }

        let Some(on_disk) = on_disk else {
            debug!(library = name, path = %path.display(), "library file present, nothing to re-read");
            return Ok(());
        };
        let changed = self.replace_group(group, &on_disk);
        debug!(library = name, path = %path.display(), changed, "reloaded library");
        Ok(())
    }

    fn delete_group(&mut self, name: &str) -> StoreResult<()> {
        let Some(position) = self.manifest.libraries.iter().position(|g| g.name == name) else {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        };
        self.manifest.libraries.remove(position);

        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.manifest.records)
            .into_iter()
            .partition(|r| r.is_from(name));
        self.manifest.records = kept;
        self.unlink_records(&removed);
        self.dirty = true;
        debug!(library = name, records = removed.len(), "deleted library");
        Ok(())
    }

    fn deselect_all(&mut self) {
        if !self.manifest.selected.is_empty() {
            self.dirty = true;
        }
        self.manifest.selected.clear();
    }

    fn select_object(&mut self, name: &str) -> StoreResult<()> {
        let object = self
            .manifest
            .objects
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })?;
        if !object.in_view_layer {
            return Err(StoreError::Runtime(format!(
                "Object '{}' can't be selected because it is not in View Layer",
                name
            )));
        }
        if !self.manifest.selected.iter().any(|s| s == name) {
            self.manifest.selected.push(name.to_string());
            self.dirty = true;
        }
        Ok(())
    }

    fn set_active_object(&mut self, name: &str) -> StoreResult<()> {
        if !self.object_exists(name) {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        self.manifest.active = Some(name.to_string());
        self.dirty = true;
        Ok(())
    }

    fn find_record(&self, kind: Kind, name: &str) -> Option<Record> {
        self.manifest
            .records
            .iter()
            .find(|r| r.kind == kind && r.name == name)
            .cloned()
    }
}
