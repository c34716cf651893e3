use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START};

// Crate engine modules
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::drift::drift_system;
use crate::engine::loading::manifest_loader::{ManifestLoader, poll_manifest, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_loader::check_matcap_loading;
use crate::engine::scene::axes::{AxesHelper, draw_axes_gizmo};
use crate::engine::scene::knots::spawn_knot_field_when_ready;
use crate::engine::scene::text::spawn_title_when_ready;
use crate::engine::shaders::MatcapMaterial;
use crate::engine::systems::debug_panel::{handle_axes_toggle, spawn_debug_panel};
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<MatcapMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<AxesHelper>()
        .insert_resource(OrbitCamera::from_position(CAMERA_START, Vec3::ZERO));

    // Loading pollers only run until every asset has resolved.
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                poll_manifest,
                check_matcap_loading,
                spawn_knot_field_when_ready,
                spawn_title_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // The drift pass is never gated on loading: knots animate from the frame
    // they exist, whether or not any asset resolved. Camera follows the
    // drift pass inside a frame, render extraction follows both.
    app.add_systems(
        Update,
        (
            (drift_system, camera_controller).chain(),
            draw_axes_gizmo,
            handle_axes_toggle,
            fps_text_update_system,
        ),
    );

    app
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

// Startup system for everything that needs no assets: camera and UI
fn setup(mut commands: Commands, orbit: Res<OrbitCamera>) {
    spawn_viewport_camera(&mut commands, &orbit);
    spawn_fps_overlay(&mut commands);
    spawn_debug_panel(&mut commands);
}

fn spawn_viewport_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.target_transform(),
    ));
}
