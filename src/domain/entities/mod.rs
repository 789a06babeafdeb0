//! Domain Entities
//!
//! - `SourceGroup` - A linked library file
//! - `Record` - A typed data block linked from a library
//! - `SceneObject` - An object in the active scene
//! - `ViewNode` - One line of the flattened list view

mod record;
mod scene_object;
mod source_group;
mod view_node;

pub use record::Record;
pub use scene_object::{ObjectType, SceneObject};
pub use source_group::SourceGroup;
pub use view_node::ViewNode;
