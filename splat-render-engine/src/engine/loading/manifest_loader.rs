use bevy::asset::LoadState;
use bevy::prelude::*;

use constants::path::SPRITE_MANIFEST_PATH;

use crate::engine::assets::sprite_assets::SpriteAssets;
use crate::engine::assets::sprite_manifest::SpriteManifest;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SpriteManifest>>,
}

/// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading sprite manifest from: {SPRITE_MANIFEST_PATH}");
    manifest_loader.handle = Some(asset_server.load(SPRITE_MANIFEST_PATH));
}

/// Apply the manifest and start loading the sprite image when ready
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut sprite_assets: ResMut<SpriteAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SpriteManifest>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }
    let Some(handle) = &manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        info!("✓ Sprite manifest loaded, sampling {} every {} px", manifest.image, manifest.sample_step());
        sprite_assets.image = asset_server.load(&manifest.image);
        sprite_assets.manifest = Some(handle.clone());
        commands.insert_resource(manifest.clone());
        loading_progress.manifest_loaded = true;
        return;
    }

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        error!("Failed to load sprite manifest: {err}");
        next_state.set(AppState::LoadFailed);
    }
}
