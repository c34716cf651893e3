use bevy::prelude::*;

use crate::engine::shaders::MatcapMaterial;

/// Shared handles for everything visible in the scene: the one torus mesh
/// every knot instances, the one matcap material, and the capture texture
/// that material samples.
#[derive(Resource)]
pub struct SceneAssets {
    pub matcap_texture: Handle<Image>,
    pub matcap_material: Handle<MatcapMaterial>,
    pub knot_mesh: Handle<Mesh>,
}
