use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

/// Splat shader material. The vertex stage expands each quad corner in
/// view space by half the point size; the fragment stage keeps the unit
/// disc and blends it over the scene. `AlphaMode::Blend` also disables
/// depth writes, so overlapping splats do not punch holes in each other.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SplatMaterial {
    #[uniform(0)]
    pub point_size: f32,
}

impl Material for SplatMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/splat.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/splat.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }
}
