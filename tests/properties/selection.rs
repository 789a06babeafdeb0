//! Property tests for selection index clamping.

use proptest::prelude::*;

use linkview::domain::services::{clamp_group_index, clamp_row_index};

proptest! {
    /// PROPERTY: a clamped group index is always in range when groups exist.
    #[test]
    fn property_group_index_in_range(current in 0usize..1000, count in 0usize..50) {
        let clamped = clamp_group_index(current, count);
        if count == 0 {
            prop_assert_eq!(clamped, 0);
        } else {
            prop_assert!(clamped < count);
        }
    }

    /// PROPERTY: valid indices are left untouched.
    #[test]
    fn property_valid_index_is_stable(count in 1usize..50, seed in 0usize..1000) {
        let current = seed % count;
        prop_assert_eq!(clamp_group_index(current, count), current);
        prop_assert_eq!(clamp_row_index(current, count), current);
    }

    /// PROPERTY: a row index past the end resets to the top.
    #[test]
    fn property_row_past_end_resets(count in 0usize..50, extra in 0usize..50) {
        prop_assert_eq!(clamp_row_index(count + extra, count), 0);
    }
}
