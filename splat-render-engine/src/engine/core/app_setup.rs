use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::camera::START_DISTANCE;
use constants::render_settings::{BACKGROUND_COLOUR, FOG_END, FOG_START};

use crate::engine::assets::sprite_assets::SpriteAssets;
use crate::engine::assets::sprite_manifest::SpriteManifest;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::cloud_creator::create_cloud_when_ready;
use crate::engine::loading::image_loader::check_image_loading;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::splat_mesh::sync_splat_mesh;
use crate::engine::physics::integrator::physics_step;
use crate::engine::render::splat_material::SplatMaterial;
use crate::tools::drag_deform::{DragState, project_cursor, track_drag_input};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<SplatMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SpriteManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SpriteManifest>::new(&["json"]))
        .insert_resource(ClearColor(background_colour()));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<SpriteAssets>()
        .init_resource::<DragState>()
        .init_resource::<OrbitCamera>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_system,
                check_image_loading,
                create_cloud_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Runtime systems, chained so input is fully resolved before the
    // integrator reads it and physics completes before the mesh upload.
    app.add_systems(
        Update,
        (
            track_drag_input,
            project_cursor,
            camera_controller,
            physics_step,
            sync_splat_mesh,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn background_colour() -> Color {
    Color::srgb(
        BACKGROUND_COLOUR[0],
        BACKGROUND_COLOUR[1],
        BACKGROUND_COLOUR[2],
    )
}

/// Startup system that only handles basic scene initialisation.
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, START_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: background_colour(),
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    use crate::engine::core::app_state::FpsText;

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
