//! Reusable manifests.

/// Two libraries: `props.blend` exists on disk (tests create it), `old.blend` does not
pub const SCENE: &str = r#"
[[library]]
name = "props.blend"
filepath = "//libs/props.blend"

[[library]]
name = "old.blend"
filepath = "//old.blend"

[[record]]
kind = "mesh"
name = "Cube"
library = "props.blend"

[[record]]
kind = "mesh"
name = "Sphere"
library = "props.blend"

[[record]]
kind = "material"
name = "Red"
library = "props.blend"

[[record]]
kind = "collection"
name = "Set"
library = "props.blend"

[[record]]
kind = "mesh"
name = "Tree"
library = "old.blend"

[[object]]
name = "Cube.001"
type = "mesh"
data = "Cube"
materials = ["Red"]

[[object]]
name = "Cube.002"
type = "mesh"
data = "Cube"
hide_select = true

[[object]]
name = "SetInstance"
type = "empty"
instance_collection = "Set"

[[object]]
name = "Tree.001"
type = "mesh"
data = "Tree"
"#;

/// Scene manifest plus the `props.blend` file on disk
pub fn scene_env() -> super::TestEnv {
    let env = super::TestEnv::with_manifest(SCENE);
    env.write_file("libs/props.blend", "BLENDER");
    env
}
