//! Scenario: Browse a Library
//!
//! Journey: the user picks a library, reads its linked data by kind,
//! searches, and collapses a category.

use linkview::application::ViewController;
use linkview::infrastructure::ManifestStore;
use linkview::{Kind, ViewNode};

const TWO_LIBRARIES: &str = r#"
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
kind = "material"
name = "Red"
library = "A.lib"

[[record]]
kind = "object"
name = "Lamp"
library = "B.lib"
"#;

fn open() -> (ManifestStore, ViewController) {
    let store = ManifestStore::from_toml(TWO_LIBRARIES, "/project").unwrap();
    let mut view = ViewController::new();
    view.rebuild(&store);
    (store, view)
}

/// SCENARIO: first library is projected by kind, then searched
#[test]
fn scenario_project_then_search() {
    let (store, mut view) = open();

    view.select_group(0, &store);
    assert_eq!(
        view.nodes(),
        &[
            ViewNode::header(Kind::Mesh, 1, true),
            ViewNode::row(Kind::Mesh, "Cube"),
            ViewNode::header(Kind::Material, 1, true),
            ViewNode::row(Kind::Material, "Red"),
        ]
    );

    view.set_search("cub", &store);
    assert_eq!(view.visible_indices(), &[0, 1]);
}

/// SCENARIO: switching library shows only that library's data
#[test]
fn scenario_switch_library() {
    let (store, mut view) = open();

    view.move_group(1, &store);
    assert_eq!(view.selected_group().unwrap().name, "B.lib");
    assert_eq!(
        view.nodes(),
        &[
            ViewNode::header(Kind::Object, 1, true),
            ViewNode::row(Kind::Object, "Lamp"),
        ]
    );
}

/// SCENARIO: collapsing the category under the cursor moves the cursor to the top
#[test]
fn scenario_collapse_under_cursor() {
    let (store, mut view) = open();

    view.select_row(3);
    assert_eq!(view.selected_node(), Some(&ViewNode::row(Kind::Material, "Red")));

    view.toggle_category(Kind::Material, &store);
    assert_eq!(view.visible_count(), 3);
    assert_eq!(view.selected_row(), Some(0));

    // Expand state survives switching away and back
    view.select_group(1, &store);
    view.select_group(0, &store);
    assert!(!view.categories().is_expanded(Kind::Material));
    assert_eq!(view.visible_count(), 3);
}

/// SCENARIO: a search matching nothing leaves no selected row
#[test]
fn scenario_search_without_matches() {
    let (store, mut view) = open();

    view.set_search("zzz", &store);
    assert_eq!(view.visible_count(), 0);
    assert_eq!(view.selected_row(), None);
    assert_eq!(view.selected_node(), None);

    view.set_search("", &store);
    assert_eq!(view.visible_count(), 4);
}
