use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub image_loaded: bool,
    pub cloud_created: bool,
}
