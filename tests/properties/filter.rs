//! Property tests for the search filter.

use proptest::prelude::*;

use linkview::domain::services::{filter, parent_header, project, CategoryStateStore};
use linkview::{Kind, Record, SourceGroup, ViewNode};

fn nodes() -> impl Strategy<Value = Vec<ViewNode>> {
    let record = (
        prop::sample::select(Kind::ALL.to_vec()),
        "[A-Za-z]{1,6}",
    )
        .prop_map(|(kind, name)| Record::linked(kind, name, "lib"));
    prop::collection::vec(record, 0..20).prop_map(|records| {
        let groups = vec![SourceGroup::new("lib", "//lib.blend")];
        project(&groups, 0, |_| records, &mut CategoryStateStore::new())
    })
}

proptest! {
    /// PROPERTY: the empty term shows every node.
    #[test]
    fn property_empty_term_is_identity(nodes in nodes()) {
        prop_assert_eq!(filter(&nodes, ""), (0..nodes.len()).collect::<Vec<_>>());
    }

    /// PROPERTY: every visible row brings its header; indices ascend.
    #[test]
    fn property_rows_keep_their_header(nodes in nodes(), term in "[a-z]{0,3}") {
        let visible = filter(&nodes, &term);
        prop_assert!(visible.windows(2).all(|w| w[0] < w[1]));
        for &index in &visible {
            if !nodes[index].is_header() {
                let header = parent_header(&nodes, index).expect("row without header");
                prop_assert!(visible.contains(&header));
            }
        }
    }

    /// PROPERTY: filtering the filtered list changes nothing.
    #[test]
    fn property_filter_is_idempotent(nodes in nodes(), term in "[a-z]{1,3}") {
        let visible = filter(&nodes, &term);
        let subset: Vec<ViewNode> = visible.iter().map(|&i| nodes[i].clone()).collect();
        prop_assert_eq!(filter(&subset, &term), (0..subset.len()).collect::<Vec<_>>());
    }

    /// PROPERTY: matching ignores case.
    #[test]
    fn property_filter_ignores_case(nodes in nodes(), term in "[a-z]{1,3}") {
        prop_assert_eq!(filter(&nodes, &term), filter(&nodes, &term.to_uppercase()));
    }
}
