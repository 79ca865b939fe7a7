use bevy::prelude::*;
use bevy::render::render_resource::TextureFormat;
use bevy::render::view::NoFrustumCulling;

use constants::render_settings::{CLOUD_TILT, SPLAT_SIZE};

use crate::engine::assets::sprite_assets::SpriteAssets;
use crate::engine::assets::sprite_manifest::SpriteManifest;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::sampler::sample_rgba_image;
use crate::engine::mesh::splat_mesh::{SplatCloud, create_splat_mesh};
use crate::engine::physics::cloud::SpriteCloud;
use crate::engine::render::splat_material::SplatMaterial;

/// Sample the loaded sprite image into simulation buffers and spawn the
/// splat mesh entity. Runs once; later frames early-return on progress.
pub fn create_cloud_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<SplatMaterial>>,
    images: Res<Assets<Image>>,
    mut sprite_assets: ResMut<SpriteAssets>,
    manifest: Option<Res<SpriteManifest>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.cloud_created || !loading_progress.image_loaded {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };
    let Some(image) = images.get(&sprite_assets.image) else {
        return;
    };

    let Some((data, width, height)) = rgba8_pixels(image) else {
        error!(
            "Sprite image has unsupported texture format {:?}",
            image.texture_descriptor.format
        );
        next_state.set(AppState::LoadFailed);
        return;
    };

    let sampled = sample_rgba_image(&data, width, height, manifest.sample_step());
    if sampled.is_empty() {
        // Valid but inert: nothing passed the alpha test.
        warn!("Sprite silhouette is fully transparent, cloud has no points");
    }

    let cloud = SpriteCloud::from_samples(sampled.positions, sampled.colors);
    spawn_cloud_entity(&mut commands, &mut meshes, &mut materials, &cloud);

    info!("✓ Sprite cloud created with {} points", cloud.len());
    commands.insert_resource(cloud);
    sprite_assets.is_loaded = true;
    loading_progress.cloud_created = true;
}

fn spawn_cloud_entity(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<SplatMaterial>>,
    cloud: &SpriteCloud,
) {
    let mesh = create_splat_mesh(&cloud.positions, &cloud.colors);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(SplatMaterial {
            point_size: SPLAT_SIZE,
        })),
        // Slight tilt so the sprite does not read as a flat card.
        Transform::from_rotation(Quat::from_rotation_x(CLOUD_TILT)),
        SplatCloud,
        // Deformation moves vertices every frame; skip culling.
        NoFrustumCulling,
    ));
}

/// Borrow the image pixels as tightly packed RGBA8, converting other
/// formats when possible.
fn rgba8_pixels(image: &Image) -> Option<(std::borrow::Cow<'_, [u8]>, u32, u32)> {
    let width = image.width();
    let height = image.height();

    match image.texture_descriptor.format {
        TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb => {
            let data = image.data.as_ref()?;
            Some((std::borrow::Cow::Borrowed(data.as_slice()), width, height))
        }
        _ => {
            let converted = image.convert(TextureFormat::Rgba8UnormSrgb)?;
            let data = converted.data?;
            Some((std::borrow::Cow::Owned(data), width, height))
        }
    }
}
