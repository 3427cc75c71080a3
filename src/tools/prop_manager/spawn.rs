use bevy::prelude::*;

use constants::render_settings::{PROP_DEFAULT_SIZE, PROP_SPAWN_HEIGHT, PROP_SPAWN_STEP};

use super::state::{Manipulable, Prop, PropSize, PropSpawnState};

/// Fired by the panel's Add Box button.
#[derive(Event)]
pub struct AddPropEvent;

/// Spawn one eligible box prop. Used for the manifest's initial set and
/// for panel-added props.
pub fn spawn_prop(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    position: Vec3,
    size: Vec3,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::WHITE,
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::from_translation(position),
            Prop,
            PropSize(size),
            Manipulable,
            Name::new("Prop"),
        ))
        .id()
}

/// Append one new prop per Add Box press, each one step further along X.
/// The current selection is left untouched.
pub fn handle_add_prop_events(
    mut events: EventReader<AddPropEvent>,
    mut spawn_state: ResMut<PropSpawnState>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for _event in events.read() {
        spawn_state.added += 1;
        let position = Vec3::new(
            spawn_state.added as f32 * PROP_SPAWN_STEP,
            PROP_SPAWN_HEIGHT,
            0.0,
        );

        spawn_prop(
            &mut commands,
            &mut meshes,
            &mut materials,
            position,
            PROP_DEFAULT_SIZE,
        );
        info!("Added prop #{} at {position}", spawn_state.added);
    }
}
