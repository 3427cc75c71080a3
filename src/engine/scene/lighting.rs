use bevy::pbr::{CascadeShadowConfigBuilder, DirectionalLightShadowMap};
use bevy::prelude::*;

use crate::engine::scene::manifest::StageManifest;

#[derive(Component)]
pub struct StageLight;

/// Spawn the manifest-described light rig: an ambient term plus one
/// directional light casting shadows over the play area.
pub fn spawn_light_rig(commands: &mut Commands, manifest: &StageManifest) {
    let rig = &manifest.lighting;

    commands.insert_resource(AmbientLight {
        color: manifest.ambient_colour(),
        brightness: rig.ambient_brightness,
        ..default()
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: rig.shadow_map_size,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: rig.illuminance,
            shadows_enabled: true,
            shadow_depth_bias: rig.shadow_depth_bias,
            ..default()
        },
        Transform::from_translation(manifest.directional_position())
            .looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            maximum_distance: rig.shadow_distance,
            ..default()
        }
        .build(),
        StageLight,
    ));
}
