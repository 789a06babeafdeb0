//! Domain Layer
//!
//! The list view engine: pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Source groups, records, scene objects, view nodes
//! - `value_objects/` - Kind, library paths, outcomes
//! - `services/` - Category state, projection, filter, selection, usage
//! - `ports/` - Interface definitions for the host and infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All host access goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
