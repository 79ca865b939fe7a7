use bevy::prelude::*;

use crate::engine::assets::sprite_manifest::SpriteManifest;

/// Handles for the sprite manifest and its raster image. Filled in by
/// the loading pipeline; `is_loaded` flips once the cloud exists.
#[derive(Resource, Default)]
pub struct SpriteAssets {
    pub manifest: Option<Handle<SpriteManifest>>,
    pub image: Handle<Image>,
    pub is_loaded: bool,
}
