//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_probe;
pub mod host_store;
pub mod launcher;
pub mod view_events;

pub use file_probe::FileProbe;
pub use host_store::{HostStore, StoreError, StoreResult};
pub use launcher::{LaunchError, Launcher};
pub use view_events::{NoopEventSink, ViewEvent, ViewEventSink};
