//! Record usage predicates
//!
//! Decide whether a scene object uses a given linked record. Each kind has
//! its own notion of "use":
//! - Object: the scene object is the record itself
//! - Collection: the object instances the collection
//! - Mesh: a mesh object whose data is the mesh
//! - Material: the material sits in the object's data or in its slots

use crate::domain::entities::{ObjectType, Record, SceneObject};
use crate::domain::value_objects::Kind;

/// Whether `object` uses `record`
pub fn is_user(object: &SceneObject, record: &Record) -> bool {
    let name = record.name.as_str();
    match record.kind {
        Kind::Object => object.name == name,
        Kind::Collection => object.instance_collection.as_deref() == Some(name),
        Kind::Mesh => object.object_type == ObjectType::Mesh && object.data.as_deref() == Some(name),
        Kind::Material => {
            object.data_materials.iter().any(|m| m == name)
                || object.slot_materials.iter().any(|m| m == name)
        }
    }
}

/// Objects that use `record` and may be selected by host policy
pub fn selectable_users<'a>(
    objects: &'a [SceneObject],
    record: &Record,
) -> impl Iterator<Item = &'a SceneObject> + 'a {
    let record = record.clone();
    objects
        .iter()
        .filter(move |object| is_user(object, &record) && object.is_selectable())
}
