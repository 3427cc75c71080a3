use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::render_settings::{GIZMO_ARROW_LENGTH, GIZMO_MIN_SCALE};

use super::hit::{hit_test_handles, ray_plane_intersect, screen_scale};
use super::state::{DragState, GizmoHandle, GizmoMode, GizmoState};
use crate::engine::camera::OrbitLock;
use crate::tools::prop_manager::state::Prop;

/// Translation delta constrained to the grabbed axis.
pub fn translate_delta(axis: Vec3, start_point: Vec3, current_point: Vec3) -> Vec3 {
    let delta = current_point - start_point;
    axis * delta.dot(axis)
}

/// Signed angle between the drag's start and current points, measured
/// around `axis` through `center`. `None` while the points sit too close
/// to the axis for a stable direction.
pub fn rotation_angle(axis: Vec3, center: Vec3, start_point: Vec3, current_point: Vec3) -> Option<f32> {
    let start = reject_from_axis(start_point - center, axis)?;
    let current = reject_from_axis(current_point - center, axis)?;

    let mut angle = start.dot(current).clamp(-1.0, 1.0).acos();
    if start.cross(current).dot(axis) < 0.0 {
        angle = -angle;
    }
    Some(angle)
}

fn reject_from_axis(v: Vec3, axis: Vec3) -> Option<Vec3> {
    let projected = v - axis * v.dot(axis);
    if projected.length_squared() < 1e-6 {
        return None;
    }
    Some(projected.normalize())
}

/// Multiplier for a drag along one scale stalk.
pub fn axis_scale_factor(axis: Vec3, start_point: Vec3, current_point: Vec3, arm: f32) -> f32 {
    1.0 + (current_point - start_point).dot(axis) / arm
}

/// Multiplier for a drag on the uniform-scale centre handle.
pub fn uniform_scale_factor(center: Vec3, start_point: Vec3, current_point: Vec3) -> f32 {
    let start_dist = start_point.distance(center);
    if start_dist < 1e-3 {
        return 1.0;
    }
    current_point.distance(center) / start_dist
}

/// Drag plane for a grabbed handle. Axis translate/scale handles use
/// whichever axis-containing plane faces the view most directly;
/// rotation handles drag in their ring plane; the centre handle drags in
/// a view-aligned plane.
pub fn compute_drag_plane(
    handle: GizmoHandle,
    rotating: bool,
    center: Vec3,
    view_dir: Vec3,
) -> (Vec3, Vec3) {
    let Some(axis) = handle.axis() else {
        return (center, -view_dir);
    };

    if rotating {
        return (center, axis);
    }

    // Of the two planes containing the axis, keep the one the view
    // direction crosses most steeply
    let candidates = match handle {
        GizmoHandle::AxisX => (Vec3::Y, Vec3::Z),
        GizmoHandle::AxisY => (Vec3::X, Vec3::Z),
        _ => (Vec3::X, Vec3::Y),
    };
    let normal = if view_dir.dot(candidates.0).abs() > view_dir.dot(candidates.1).abs() {
        candidates.0
    } else {
        candidates.1
    };
    (center, normal)
}

/// A left press on a handle of the attached gizmo starts a drag and
/// takes pointer capture away from orbiting and picking.
pub fn begin_gizmo_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    q_props: Query<&Transform, With<Prop>>,
    mut gizmo: ResMut<GizmoState>,
    mut lock: ResMut<OrbitLock>,
) {
    if !buttons.just_pressed(MouseButton::Left) || gizmo.is_dragging() {
        return;
    }
    let Some(target) = gizmo.target else {
        return;
    };
    let Ok(transform) = q_props.get(target) else {
        return;
    };

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
    let origin = ray.origin;
    let dir = ray.direction.as_vec3();

    let center = transform.translation;
    let size = screen_scale(cam_xf.translation(), center);
    let Some(handle) = hit_test_handles(gizmo.mode, center, size, origin, dir) else {
        return;
    };

    let rotating = gizmo.mode == GizmoMode::Rotate;
    let (plane_origin, plane_normal) = compute_drag_plane(handle, rotating, center, dir);
    let Some(start_point) = ray_plane_intersect(origin, dir, plane_origin, plane_normal) else {
        return;
    };

    gizmo.drag = Some(DragState {
        handle,
        plane_origin,
        plane_normal,
        start_point,
        start_translation: transform.translation,
        start_rotation: transform.rotation,
        start_scale: transform.scale,
    });
    lock.dragging_gizmo = true;
}

/// Drive the attached prop's transform from the in-flight drag, and end
/// the drag when the button releases.
pub fn update_gizmo_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut q_props: Query<&mut Transform, With<Prop>>,
    mut gizmo: ResMut<GizmoState>,
    mut lock: ResMut<OrbitLock>,
) {
    if gizmo.drag.is_none() {
        if lock.dragging_gizmo {
            lock.dragging_gizmo = false;
        }
        return;
    }

    if buttons.just_released(MouseButton::Left) || !buttons.pressed(MouseButton::Left) {
        gizmo.drag = None;
        lock.dragging_gizmo = false;
        return;
    }

    let (Some(drag), Some(target)) = (gizmo.drag, gizmo.target) else {
        return;
    };

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

    let Some(current_point) = ray_plane_intersect(
        ray.origin,
        ray.direction.as_vec3(),
        drag.plane_origin,
        drag.plane_normal,
    ) else {
        return;
    };

    let Ok(mut transform) = q_props.get_mut(target) else {
        return;
    };

    apply_drag(&mut transform, &drag, gizmo.mode, current_point);
}

/// Recompute the target transform from the drag's start transform and
/// the current drag-plane point.
pub fn apply_drag(
    transform: &mut Transform,
    drag: &DragState,
    mode: GizmoMode,
    current_point: Vec3,
) {
    match mode {
        GizmoMode::Translate => {
            let Some(axis) = drag.handle.axis() else {
                return;
            };
            transform.translation =
                drag.start_translation + translate_delta(axis, drag.start_point, current_point);
        }
        GizmoMode::Rotate => {
            let Some(axis) = drag.handle.axis() else {
                return;
            };
            if let Some(angle) =
                rotation_angle(axis, drag.plane_origin, drag.start_point, current_point)
            {
                transform.rotation = Quat::from_axis_angle(axis, angle) * drag.start_rotation;
            }
        }
        GizmoMode::Scale => {
            let mut scale = drag.start_scale;
            match drag.handle {
                GizmoHandle::AxisX => {
                    scale.x *= axis_scale_factor(
                        Vec3::X,
                        drag.start_point,
                        current_point,
                        GIZMO_ARROW_LENGTH,
                    );
                }
                GizmoHandle::AxisY => {
                    scale.y *= axis_scale_factor(
                        Vec3::Y,
                        drag.start_point,
                        current_point,
                        GIZMO_ARROW_LENGTH,
                    );
                }
                GizmoHandle::AxisZ => {
                    scale.z *= axis_scale_factor(
                        Vec3::Z,
                        drag.start_point,
                        current_point,
                        GIZMO_ARROW_LENGTH,
                    );
                }
                GizmoHandle::Center => {
                    scale *= uniform_scale_factor(drag.plane_origin, drag.start_point, current_point);
                }
            }
            transform.scale = scale.max(Vec3::splat(GIZMO_MIN_SCALE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_on(handle: GizmoHandle, center: Vec3, start_point: Vec3) -> DragState {
        DragState {
            handle,
            plane_origin: center,
            plane_normal: Vec3::Z,
            start_point,
            start_translation: center,
            start_rotation: Quat::IDENTITY,
            start_scale: Vec3::ONE,
        }
    }

    #[test]
    fn translate_is_constrained_to_the_grabbed_axis() {
        let delta = translate_delta(Vec3::X, Vec3::ZERO, Vec3::new(2.0, 5.0, -3.0));
        assert_eq!(delta, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn quarter_turn_reads_as_a_signed_angle() {
        let angle = rotation_angle(Vec3::Y, Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, -1.0))
            .expect("angle");
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-4);

        let reverse = rotation_angle(Vec3::Y, Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 1.0))
            .expect("angle");
        assert!((reverse + std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn rotation_is_undefined_on_the_axis_itself() {
        let angle = rotation_angle(Vec3::Y, Vec3::ZERO, Vec3::Y * 2.0, Vec3::X);
        assert!(angle.is_none());
    }

    #[test]
    fn pulling_a_stalk_outward_scales_up() {
        let factor = axis_scale_factor(Vec3::X, Vec3::X, Vec3::X * 1.5, 1.0);
        assert!((factor - 1.5).abs() < 1e-4);
    }

    #[test]
    fn uniform_scale_tracks_the_distance_ratio() {
        let factor = uniform_scale_factor(Vec3::ZERO, Vec3::X, Vec3::X * 3.0);
        assert!((factor - 3.0).abs() < 1e-4);
    }

    #[test]
    fn applied_translate_moves_from_the_start_pose() {
        let center = Vec3::new(0.0, 1.0, 0.0);
        let drag = drag_on(GizmoHandle::AxisX, center, center);
        let mut transform = Transform::from_translation(center);

        apply_drag(
            &mut transform,
            &drag,
            GizmoMode::Translate,
            center + Vec3::new(2.0, 0.4, 0.0),
        );
        assert_eq!(transform.translation, Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn applied_scale_never_collapses_the_prop() {
        let center = Vec3::ZERO;
        let drag = drag_on(GizmoHandle::AxisX, center, Vec3::X);
        let mut transform = Transform::IDENTITY;

        // Push the stalk far past the centre, inverting the raw factor
        apply_drag(
            &mut transform,
            &drag,
            GizmoMode::Scale,
            Vec3::new(-5.0, 0.0, 0.0),
        );
        assert_eq!(transform.scale.x, GIZMO_MIN_SCALE);
        assert_eq!(transform.scale.y, 1.0);
    }

    #[test]
    fn view_facing_plane_is_chosen_for_axis_drags() {
        // Looking straight down: an X drag should ride the XZ plane
        let (_, normal) = compute_drag_plane(GizmoHandle::AxisX, false, Vec3::ZERO, -Vec3::Y);
        assert_eq!(normal, Vec3::Y);
    }

    #[test]
    fn rotation_drags_ride_the_ring_plane() {
        let (_, normal) = compute_drag_plane(GizmoHandle::AxisY, true, Vec3::ZERO, -Vec3::Z);
        assert_eq!(normal, Vec3::Y);
    }
}
