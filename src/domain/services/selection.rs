//! Selection index clamping
//!
//! Both functions leave an already valid index untouched, so callers can
//! compare before and after to avoid spurious change notifications. Call
//! the group clamp first (it decides what gets projected), then the row
//! clamp against the post-filter visible count.

/// Clamp the selected group index against the current group count.
///
/// With no groups the result is 0 and carries no meaning; callers check the
/// count to decide whether there is a selection at all.
pub fn clamp_group_index(current: usize, group_count: usize) -> usize {
    if group_count == 0 {
        0
    } else if current >= group_count {
        group_count - 1
    } else {
        current
    }
}

/// Clamp the selected row index against the visible node count.
///
/// A row that fell off the end resets to the top of the list.
pub fn clamp_row_index(current: usize, visible_count: usize) -> usize {
    if current >= visible_count {
        0
    } else {
        current
    }
}
