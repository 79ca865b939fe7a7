use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::sprite_assets::SpriteAssets;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;

/// Check whether the sprite image has finished loading.
///
/// A decode failure is fatal to the feature: the state machine moves to
/// `LoadFailed` and the cloud is never created.
pub fn check_image_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    sprite_assets: Res<SpriteAssets>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.image_loaded || !loading_progress.manifest_loaded {
        return;
    }

    match asset_server.get_load_state(&sprite_assets.image) {
        Some(LoadState::Loaded) => {
            info!("✓ Sprite image loaded");
            loading_progress.image_loaded = true;
        }
        Some(LoadState::Failed(err)) => {
            error!("Failed to load sprite image: {err}");
            next_state.set(AppState::LoadFailed);
        }
        _ => {}
    }
}
