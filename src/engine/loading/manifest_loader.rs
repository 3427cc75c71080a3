use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use constants::path::RELATIVE_MANIFEST_PATH;

use crate::engine::camera::OrbitCamera;
use crate::engine::core::app_state::AppState;
use crate::engine::scene::ground::spawn_ground;
use crate::engine::scene::lighting::spawn_light_rig;
use crate::engine::scene::manifest::StageManifest;
use crate::tools::prop_manager::spawn::spawn_prop;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<StageManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading stage manifest from: {RELATIVE_MANIFEST_PATH}");
    manifest_loader.handle = Some(asset_server.load(RELATIVE_MANIFEST_PATH));
}

/// Build the world once the manifest resolves, then enter `Running`.
///
/// A missing or malformed manifest file never resolves, so the app stays
/// in `Loading` and nothing interactive ever starts.
pub fn build_scene_when_ready(
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<StageManifest>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };
    let Some(manifest) = manifests.get(handle) else {
        return;
    };

    spawn_stage_camera(&mut commands, manifest);
    spawn_light_rig(&mut commands, manifest);
    spawn_ground(&mut commands, &mut meshes, &mut materials, &manifest.ground);

    for plan in &manifest.props {
        spawn_prop(
            &mut commands,
            &mut meshes,
            &mut materials,
            plan.position(),
            plan.size(),
        );
    }

    commands.insert_resource(manifest.clone());

    info!(
        "Stage ready: {} initial prop(s), grid {}x{}",
        manifest.props.len(),
        manifest.ground.grid_divisions,
        manifest.ground.grid_divisions
    );
    next_state.set(AppState::Running);
}

fn spawn_stage_camera(commands: &mut Commands, manifest: &StageManifest) {
    let pose = &manifest.camera;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: pose.fov_degrees.to_radians(),
            near: pose.near,
            far: pose.far,
            ..default()
        }),
        Transform::from_translation(manifest.camera_position())
            .looking_at(manifest.camera_target(), Vec3::Y),
        DistanceFog {
            color: manifest.fog_colour(),
            falloff: FogFalloff::Linear {
                start: manifest.fog.start,
                end: manifest.fog.end,
            },
            ..default()
        },
    ));

    commands.insert_resource(OrbitCamera::from_pose(
        manifest.camera_position(),
        manifest.camera_target(),
    ));
}
