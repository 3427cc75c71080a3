use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::render_settings::{
    GIZMO_ARROW_LENGTH, GIZMO_CENTER_RADIUS, GIZMO_RING_RADIUS, GIZMO_TIP_RADIUS,
};

use super::TransformGizmoGroup;
use super::hit::{hit_test_handles, screen_scale};
use super::state::{GizmoHandle, GizmoMode, GizmoState};
use crate::tools::prop_manager::state::{Prop, PropSize};

/// Track which handle sits under the cursor for highlight and click
/// arbitration. Frozen while a drag is in flight.
pub fn hover_gizmo_handles(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    q_props: Query<&Transform, With<Prop>>,
    mut gizmo: ResMut<GizmoState>,
) {
    if gizmo.is_dragging() {
        return;
    }

    let hovered = hovered_handle(&windows, &cameras, &q_props, &gizmo);
    if gizmo.hovered != hovered {
        gizmo.hovered = hovered;
    }
}

fn hovered_handle(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    q_props: &Query<&Transform, With<Prop>>,
    gizmo: &GizmoState,
) -> Option<GizmoHandle> {
    let target = gizmo.target?;
    let transform = q_props.get(target).ok()?;
    let window = windows.single().ok()?;
    let cursor_pos = window.cursor_position()?;
    let (cam_xf, camera) = cameras.single().ok()?;
    let ray = camera.viewport_to_world(cam_xf, cursor_pos).ok()?;

    let center = transform.translation;
    let size = screen_scale(cam_xf.translation(), center);
    hit_test_handles(
        gizmo.mode,
        center,
        size,
        ray.origin,
        ray.direction.as_vec3(),
    )
}

/// Draw the selection outline and the handles for the current mode.
pub fn draw_gizmo(
    mut gizmos: Gizmos<TransformGizmoGroup>,
    gizmo: Res<GizmoState>,
    cameras: Query<&GlobalTransform, With<Camera3d>>,
    q_props: Query<(&Transform, &PropSize), With<Prop>>,
) {
    let Some(target) = gizmo.target else {
        return;
    };
    let Ok((transform, PropSize(size))) = q_props.get(target) else {
        return;
    };
    let Ok(cam_xf) = cameras.single() else {
        return;
    };

    let center = transform.translation;

    // Selection outline around the prop's scaled bounds
    gizmos.cuboid(
        Transform::from_translation(center)
            .with_rotation(transform.rotation)
            .with_scale(*size * transform.scale),
        Color::srgb(1.0, 0.85, 0.2),
    );

    let world = screen_scale(cam_xf.translation(), center);

    let handle_color = |handle: GizmoHandle, base: Color| -> Color {
        let active = gizmo.drag.map(|d| d.handle) == Some(handle);
        if active {
            Color::srgb(1.0, 1.0, 0.2)
        } else if gizmo.hovered == Some(handle) {
            match base {
                Color::Srgba(c) => Color::srgb(
                    (c.red * 1.5).min(1.0),
                    (c.green * 1.5).min(1.0),
                    (c.blue * 1.5).min(1.0),
                ),
                _ => base,
            }
        } else {
            base
        }
    };

    let x_color = handle_color(GizmoHandle::AxisX, Color::srgb(0.9, 0.2, 0.2));
    let y_color = handle_color(GizmoHandle::AxisY, Color::srgb(0.2, 0.9, 0.2));
    let z_color = handle_color(GizmoHandle::AxisZ, Color::srgb(0.2, 0.2, 0.9));

    match gizmo.mode {
        GizmoMode::Translate => {
            let arm = GIZMO_ARROW_LENGTH * world;
            gizmos.arrow(center, center + Vec3::X * arm, x_color);
            gizmos.arrow(center, center + Vec3::Y * arm, y_color);
            gizmos.arrow(center, center + Vec3::Z * arm, z_color);
        }
        GizmoMode::Rotate => {
            let radius = GIZMO_RING_RADIUS * world;

            // Each ring is perpendicular to its rotation axis
            gizmos.circle(
                Isometry3d::new(center, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
                radius,
                x_color,
            );
            gizmos.circle(
                Isometry3d::new(center, Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                radius,
                y_color,
            );
            gizmos.circle(Isometry3d::new(center, Quat::IDENTITY), radius, z_color);
        }
        GizmoMode::Scale => {
            let arm = GIZMO_ARROW_LENGTH * world;
            let tip = GIZMO_TIP_RADIUS * world;
            let center_color = handle_color(GizmoHandle::Center, Color::srgb(0.9, 0.9, 0.9));

            gizmos.line(center, center + Vec3::X * arm, x_color);
            gizmos.line(center, center + Vec3::Y * arm, y_color);
            gizmos.line(center, center + Vec3::Z * arm, z_color);

            gizmos.sphere(
                Isometry3d::from_translation(center + Vec3::X * arm),
                tip,
                x_color,
            );
            gizmos.sphere(
                Isometry3d::from_translation(center + Vec3::Y * arm),
                tip,
                y_color,
            );
            gizmos.sphere(
                Isometry3d::from_translation(center + Vec3::Z * arm),
                tip,
                z_color,
            );

            gizmos.sphere(
                Isometry3d::from_translation(center),
                GIZMO_CENTER_RADIUS * world,
                center_color,
            );
        }
    }
}
