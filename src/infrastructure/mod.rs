//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `store/` - HostStore over a TOML scene manifest
//! - `fs/` - FileProbe over the local disk
//! - `events/` - ViewEventSink implementations
//! - `launcher` - Launcher spawning an external program

pub mod events;
pub mod fs;
pub mod launcher;
pub mod store;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalProbe;
pub use launcher::ProcessLauncher;
pub use store::ManifestStore;
