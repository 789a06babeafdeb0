//! File System Implementations
//!
//! Concrete implementations of the FileProbe port.

mod local;

pub use local::LocalProbe;
