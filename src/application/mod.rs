//! Application Layer
//!
//! Use cases that orchestrate the list view.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Turns host failures into one-line outcomes
//!
//! ## Use Cases
//!
//! - `ViewController` - Owns the view state and runs rebuilds
//! - `LibraryOps` - Refresh, reload, open, delete, clean up broken links
//! - `select_users_of` - Select scene objects using a linked record

pub mod library_ops;
pub mod select_users;
#[cfg(test)]
pub(crate) mod test_support;
pub mod view_controller;

pub use library_ops::LibraryOps;
pub use select_users::{select_users_of, select_users_of_selected};
pub use view_controller::{HostEvent, ViewController, ViewState};
