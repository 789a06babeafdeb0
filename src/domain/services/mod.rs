//! Domain Services
//!
//! Stateless logic behind the list view:
//! - `category_state` - expand/collapse flags that survive rebuilds
//! - `projection` - selected library → flat header/row list
//! - `filter` - search term → visible node indices
//! - `selection` - index clamping after every rebuild
//! - `usage` - which scene objects use a linked record

pub mod category_state;
pub mod filter;
pub mod projection;
pub mod selection;
pub mod usage;

pub use category_state::CategoryStateStore;
pub use filter::{filter, parent_header};
pub use projection::{partition_by_kind, present_kinds, project};
pub use selection::{clamp_group_index, clamp_row_index};
pub use usage::{is_user, selectable_users};
