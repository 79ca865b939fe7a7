use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    /// Fail-stop: the manifest or sprite image could not be loaded.
    /// No cloud is created and the simulation never starts.
    LoadFailed,
}

#[derive(Component)]
pub struct FpsText;

/// Final transition once the cloud entity and buffers exist.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.cloud_created {
        info!("→ Point cloud ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
