//! Property tests for per-kind expand flags.

use proptest::prelude::*;

use linkview::domain::services::CategoryStateStore;
use linkview::Kind;

fn kind() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::ALL.to_vec())
}

proptest! {
    /// PROPERTY: an unseen kind is expanded; each toggle flips it.
    #[test]
    fn property_toggle_parity(k in kind(), toggles in 0usize..6) {
        let mut store = CategoryStateStore::new();
        prop_assert!(store.get(k));
        for _ in 0..toggles {
            store.toggle(k);
        }
        prop_assert_eq!(store.get(k), toggles % 2 == 0);
    }

    /// PROPERTY: toggling one kind never touches another.
    #[test]
    fn property_toggle_is_local(a in kind(), b in kind()) {
        prop_assume!(a != b);
        let mut store = CategoryStateStore::new();
        let before = store.get(b);
        store.toggle(a);
        prop_assert_eq!(store.get(b), before);
    }
}
