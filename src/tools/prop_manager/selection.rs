use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::ray::ray_hits_obb;
use super::state::{Manipulable, PropPanelRoot, PropSize, Selected};
use crate::tools::transform_gizmo::state::GizmoState;

/// Nearest eligible hit along a pick ray, standard distance ordering.
pub fn pick_nearest(
    origin: Vec3,
    dir: Vec3,
    props: impl IntoIterator<Item = (Entity, GlobalTransform, Vec3)>,
) -> Option<(Entity, f32)> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, xf, size) in props {
        if let Some(t) = ray_hits_obb(origin, dir, xf, size) {
            if t > 0.0 && best.map_or(true, |(_, best_t)| t < best_t) {
                best = Some((entity, t));
            }
        }
    }
    best
}

/// Left click picks the nearest eligible prop under the cursor and
/// attaches the gizmo to it; empty space clears the selection.
///
/// Presses that start or continue a gizmo drag are resolved by the drag
/// systems and never reach picking.
pub fn handle_prop_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    q_props: Query<(Entity, &GlobalTransform, &PropSize), With<Manipulable>>,
    q_selected: Query<Entity, With<Selected>>,
    q_ui: Query<&Interaction, Or<(With<Button>, With<PropPanelRoot>)>>,
    mut gizmo: ResMut<GizmoState>,
    mut commands: Commands,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if gizmo.drag.is_some() || gizmo.hovered.is_some() {
        return;
    }
    // Clicks landing on the panel belong to the UI, not the scene
    if q_ui.iter().any(|i| *i != Interaction::None) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_xf, cursor_pos) else {
        return;
    };

    let best = pick_nearest(
        ray.origin,
        ray.direction.as_vec3(),
        q_props
            .iter()
            .map(|(e, xf, PropSize(size))| (e, *xf, *size)),
    );

    match best {
        Some((hit, _t)) => attach_selection(&mut commands, &q_selected, &mut gizmo, hit),
        None => clear_selection(&mut commands, &q_selected, &mut gizmo),
    }
}

/// Make `entity` the single selected prop and attach the gizmo to it.
pub fn attach_selection(
    commands: &mut Commands,
    q_selected: &Query<Entity, With<Selected>>,
    gizmo: &mut GizmoState,
    entity: Entity,
) {
    // Deselect all
    for previous in q_selected.iter() {
        if previous != entity {
            commands.entity(previous).remove::<Selected>();
        }
    }
    commands.entity(entity).insert(Selected);
    gizmo.attach(entity);
    info!("Selected prop {entity}");
}

/// Clear the selection and detach the gizmo.
pub fn clear_selection(
    commands: &mut Commands,
    q_selected: &Query<Entity, With<Selected>>,
    gizmo: &mut GizmoState,
) {
    for previous in q_selected.iter() {
        commands.entity(previous).remove::<Selected>();
    }
    if gizmo.target.is_some() {
        gizmo.detach();
        info!("Selection cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop_at(world: &mut World, position: Vec3, size: Vec3) -> (Entity, GlobalTransform, Vec3) {
        let entity = world.spawn_empty().id();
        let xf = GlobalTransform::from(Transform::from_translation(position));
        (entity, xf, size)
    }

    #[test]
    fn empty_space_picks_nothing() {
        let mut world = World::new();
        let props = vec![prop_at(&mut world, Vec3::new(0.0, 1.0, 0.0), Vec3::ONE)];

        let best = pick_nearest(Vec3::new(50.0, 50.0, 50.0), Vec3::Y, props);
        assert!(best.is_none());
    }

    #[test]
    fn single_prop_under_the_ray_is_picked() {
        let mut world = World::new();
        let (entity, xf, size) = prop_at(&mut world, Vec3::new(0.0, 1.0, 0.0), Vec3::ONE);

        let best = pick_nearest(
            Vec3::new(0.0, 1.0, -10.0),
            Vec3::Z,
            vec![(entity, xf, size)],
        );
        assert_eq!(best.map(|(e, _)| e), Some(entity));
    }

    #[test]
    fn overlapping_props_resolve_to_the_nearer_one() {
        let mut world = World::new();
        let near = prop_at(&mut world, Vec3::new(0.0, 1.0, -2.0), Vec3::ONE);
        let far = prop_at(&mut world, Vec3::new(0.0, 1.0, 3.0), Vec3::ONE);
        let near_entity = near.0;

        // Both boxes sit on the ray; distance ordering decides
        let best = pick_nearest(Vec3::new(0.0, 1.0, -10.0), Vec3::Z, vec![far, near]);

        let (picked, t) = best.expect("one of the boxes should be hit");
        assert_eq!(picked, near_entity);
        assert!((t - 7.5).abs() < 1e-4);
    }

    #[test]
    fn hits_behind_the_camera_are_ignored() {
        let mut world = World::new();
        let props = vec![prop_at(&mut world, Vec3::new(0.0, 1.0, -5.0), Vec3::ONE)];

        let best = pick_nearest(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, props);
        assert!(best.is_none());
    }

    #[test]
    fn stage_camera_ray_hits_the_stage_box() {
        // The stage layout: camera at (-8, 1.15, 7.5), one box at (0, 1, 0)
        let mut world = World::new();
        let (entity, xf, size) = prop_at(&mut world, Vec3::new(0.0, 1.0, 0.0), Vec3::ONE);
        let camera = Vec3::new(-8.0, 1.15, 7.5);

        // A click on the box silhouette produces a ray through its centre
        let through_box = (Vec3::new(0.0, 1.0, 0.0) - camera).normalize();
        let best = pick_nearest(camera, through_box, vec![(entity, xf, size)]);
        assert_eq!(best.map(|(e, _)| e), Some(entity));

        // A click on bare ground produces a ray that misses every prop
        let through_ground = (Vec3::new(5.0, 0.0, -5.0) - camera).normalize();
        let best = pick_nearest(camera, through_ground, vec![(entity, xf, size)]);
        assert!(best.is_none());
    }
}
