//! Scenario: Remove the Selected Library
//!
//! Journey: the user has the last library selected and deletes it. The
//! selection falls back to the remaining library without errors, and the
//! objects using the deleted data lose their references.

use linkview::application::{select_users_of, LibraryOps, ViewController};
use linkview::domain::ports::HostStore;
use linkview::infrastructure::{LocalProbe, ManifestStore, ProcessLauncher};
use linkview::{Kind, OutcomeCode, Severity};

const SCENE: &str = r#"
[[library]]
name = "A.lib"
filepath = "//A.lib"

[[library]]
name = "B.lib"
filepath = "//B.lib"

[[record]]
kind = "mesh"
name = "Cube"
library = "A.lib"

[[record]]
kind = "mesh"
name = "Rock"
library = "B.lib"

[[object]]
name = "Rock.001"
type = "mesh"
data = "Rock"
"#;

fn ops(root: &std::path::Path) -> LibraryOps<LocalProbe, ProcessLauncher> {
    LibraryOps::new(LocalProbe::new(root), ProcessLauncher::new("", Vec::new()))
}

/// SCENARIO: deleting the selected last library clamps the selection
#[test]
fn scenario_delete_selected_library() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("B.lib"), "BLENDER").unwrap();
    let mut store = ManifestStore::from_toml(SCENE, dir.path()).unwrap();
    let ops = ops(dir.path());
    let mut view = ViewController::new();
    view.select_group(1, &store);
    assert_eq!(view.selected_group_index(), Some(1));

    let outcome = ops.delete(&mut store, &mut view, "B.lib");

    assert_eq!(outcome.message, "Force Deleted Library: B.lib");
    assert_eq!(view.selected_group_index(), Some(0));
    assert_eq!(view.selected_group().unwrap().name, "A.lib");
    assert_eq!(store.group_count(), 1);
    assert!(store.find_record(Kind::Mesh, "Rock").is_none());
    assert_eq!(store.scene_objects()[0].data, None);
}

/// SCENARIO: deleting twice reports the second attempt without failing
#[test]
fn scenario_delete_twice() {
    let mut store = ManifestStore::from_toml(SCENE, "/nowhere").unwrap();
    let ops = ops(std::path::Path::new("/nowhere"));
    let mut view = ViewController::new();
    view.rebuild(&store);

    let first = ops.delete(&mut store, &mut view, "A.lib");
    assert_eq!(
        first.message,
        "Cleaned up and deleted broken Library: A.lib"
    );

    let second = ops.delete(&mut store, &mut view, "A.lib");
    assert_eq!(second.code, OutcomeCode::NotFound);
    assert_eq!(second.severity, Severity::Warning);
}

/// SCENARIO: users of data from a deleted library can no longer be selected
#[test]
fn scenario_select_users_after_delete() {
    let mut store = ManifestStore::from_toml(SCENE, "/nowhere").unwrap();
    let ops = ops(std::path::Path::new("/nowhere"));
    let mut view = ViewController::new();
    view.rebuild(&store);

    let before = select_users_of(&mut store, &mut view, Kind::Mesh, "Rock");
    assert_eq!(before.count, 1);
    assert_eq!(store.selected_objects(), &["Rock.001".to_string()]);

    ops.delete(&mut store, &mut view, "B.lib");
    let after = select_users_of(&mut store, &mut view, Kind::Mesh, "Rock");
    assert_eq!(after.severity, Severity::Error);
    assert_eq!(after.code, OutcomeCode::NotFound);
}
