use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::camera::{OrbitLock, orbit_camera_controller};
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, build_scene_when_ready, start_loading,
};
use crate::engine::scene::manifest::StageManifest;
use crate::tools::{prop_manager::PropManagerPlugin, transform_gizmo::TransformGizmoPlugin};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::{FpsText, fps_text_update_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers StageManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<StageManifest>::new(&["json"]))
        .init_state::<AppState>()
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<ManifestLoader>()
        .init_resource::<OrbitLock>();

    // Interaction plugins: prop picking / panel, and the transform gizmo.
    app.add_plugins(PropManagerPlugin);
    app.add_plugins(TransformGizmoPlugin);

    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            build_scene_when_ready.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            orbit_camera_controller.run_if(in_state(AppState::Running)),
        );

    // FPS overlay only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, create_native_overlays);
        app.add_systems(Update, fps_text_update_system);
    }

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

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(mut commands: Commands) {
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
