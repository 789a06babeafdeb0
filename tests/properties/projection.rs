//! Property tests for projecting a library onto view nodes.

use proptest::prelude::*;

use linkview::domain::services::{project, CategoryStateStore};
use linkview::{Kind, Record, SourceGroup, ViewNode};

fn records() -> impl Strategy<Value = Vec<Record>> {
    let record = (
        prop::sample::select(Kind::ALL.to_vec()),
        "[A-Za-z0-9_.]{1,8}",
    )
        .prop_map(|(kind, name)| Record::linked(kind, name, "lib"));
    prop::collection::vec(record, 0..24)
}

fn collapsed() -> impl Strategy<Value = Vec<Kind>> {
    prop::sample::subsequence(Kind::ALL.to_vec(), 0..=4)
}

fn run(records: &[Record], categories: &mut CategoryStateStore) -> Vec<ViewNode> {
    let groups = vec![SourceGroup::new("lib", "//lib.blend")];
    project(&groups, 0, |_| records.to_vec(), categories)
}

proptest! {
    /// PROPERTY: headers follow kind order and each is followed by exactly its
    /// sorted rows when expanded, and by nothing when collapsed.
    #[test]
    fn property_projection_shape(records in records(), collapsed in collapsed()) {
        let mut categories = CategoryStateStore::new();
        for kind in &collapsed {
            categories.toggle(*kind);
        }
        let nodes = run(&records, &mut categories);

        let mut position = 0;
        for kind in Kind::ALL {
            let mut names: Vec<&str> = records
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| r.name.as_str())
                .collect();
            if names.is_empty() {
                continue;
            }
            names.sort_unstable();

            let expanded = !collapsed.contains(&kind);
            prop_assert_eq!(&nodes[position], &ViewNode::header(kind, names.len(), expanded));
            position += 1;
            if expanded {
                for name in names {
                    prop_assert_eq!(&nodes[position], &ViewNode::row(kind, name));
                    position += 1;
                }
            }
        }
        prop_assert_eq!(position, nodes.len());
    }

    /// PROPERTY: collapsing then expanding a kind restores the projection.
    #[test]
    fn property_double_toggle_restores_projection(records in records(), k in prop::sample::select(Kind::ALL.to_vec())) {
        let mut categories = CategoryStateStore::new();
        let original = run(&records, &mut categories);

        categories.toggle(k);
        categories.toggle(k);
        prop_assert_eq!(run(&records, &mut categories), original);
    }

    /// PROPERTY: projecting with an out-of-range group yields nothing.
    #[test]
    fn property_out_of_range_group_projects_nothing(records in records(), selected in 1usize..10) {
        let groups = vec![SourceGroup::new("lib", "//lib.blend")];
        let mut categories = CategoryStateStore::new();
        let nodes = project(&groups, selected, |_| records.clone(), &mut categories);
        prop_assert!(nodes.is_empty());
    }
}
