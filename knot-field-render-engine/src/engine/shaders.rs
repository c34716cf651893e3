/// Matcap shading material shared by the title mesh and every knot
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

/// The fragment shader samples the capture texture by view-space normal, so
/// the scene needs no lights at all.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct MatcapMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub matcap: Handle<Image>,
}

impl Material for MatcapMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/matcap.wgsl".into()
    }
}
