//! Host Store Implementations

mod manifest;

pub use manifest::ManifestStore;
