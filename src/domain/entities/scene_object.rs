//! Scene object entity - an object placed in the active scene

use serde::{Deserialize, Serialize};

/// Object type, as far as usage lookups care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Mesh,
    Empty,
    #[default]
    Other,
}

/// An object in the active scene and the data it references
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(rename = "type", default)]
    pub object_type: ObjectType,
    /// Object data (mesh name for mesh objects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Collection instanced by this object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_collection: Option<String>,
    /// Materials held by the object's data
    #[serde(default, rename = "materials", skip_serializing_if = "Vec::is_empty")]
    pub data_materials: Vec<String>,
    /// Materials assigned directly to object slots
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slot_materials: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide_viewport: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide_select: bool,
    /// Objects excluded from the view layer cannot be selected
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub in_view_layer: bool,
}

fn default_true() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

impl SceneObject {
    pub fn new(name: impl Into<String>, object_type: ObjectType) -> Self {
        Self {
            name: name.into(),
            object_type,
            in_view_layer: true,
            ..Default::default()
        }
    }

    /// Visible and selectable by host policy
    pub fn is_selectable(&self) -> bool {
        !self.hidden && !self.hide_viewport && !self.hide_select
    }
}
