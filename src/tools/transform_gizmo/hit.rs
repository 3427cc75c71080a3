use bevy::prelude::*;

use constants::render_settings::{
    GIZMO_ARROW_LENGTH, GIZMO_CENTER_RADIUS, GIZMO_PICK_RADIUS, GIZMO_RING_RADIUS,
    GIZMO_SCREEN_SCALE,
};

use super::state::{GizmoHandle, GizmoMode};

/// World-unit size of the gizmo at `center`, kept roughly constant in
/// screen space by scaling with camera distance.
pub fn screen_scale(camera_position: Vec3, center: Vec3) -> f32 {
    camera_position.distance(center) * GIZMO_SCREEN_SCALE
}

/// Intersect a ray with a plane, returning the hit point.
pub fn ray_plane_intersect(
    origin: Vec3,
    dir: Vec3,
    plane_origin: Vec3,
    plane_normal: Vec3,
) -> Option<Vec3> {
    let denom = dir.dot(plane_normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (plane_origin - origin).dot(plane_normal) / denom;
    if t < 0.0 {
        return None;
    }
    Some(origin + dir * t)
}

/// Smallest distance between a ray and the segment `p0..p1`.
pub fn ray_segment_distance(origin: Vec3, dir: Vec3, p0: Vec3, p1: Vec3) -> Option<f32> {
    let u = dir;
    let v = p1 - p0;
    let w = origin - p0;

    let a = u.dot(u);
    let b = u.dot(v);
    let c = v.dot(v);
    let d = u.dot(w);
    let e = v.dot(w);

    let denom = a * c - b * b;
    if denom.abs() < 1e-8 {
        return None;
    }

    let s = ((b * e - c * d) / denom).max(0.0);
    let t = ((a * e - b * d) / denom).clamp(0.0, 1.0);

    let closest_ray = origin + u * s;
    let closest_segment = p0 + v * t;

    Some(closest_ray.distance(closest_segment))
}

/// Distance from the ray's hit on the ring plane to the ring itself.
pub fn ray_circle_distance(
    origin: Vec3,
    dir: Vec3,
    center: Vec3,
    normal: Vec3,
    radius: f32,
) -> Option<f32> {
    let point = ray_plane_intersect(origin, dir, center, normal)?;
    let dist_from_center = point.distance(center);
    Some((dist_from_center - radius).abs())
}

/// Smallest distance between a ray and a point, in front of the origin.
pub fn ray_point_distance(origin: Vec3, dir: Vec3, point: Vec3) -> Option<f32> {
    let t = (point - origin).dot(dir);
    if t < 0.0 {
        return None;
    }
    Some((origin + dir * t).distance(point))
}

const AXES: [(GizmoHandle, Vec3); 3] = [
    (GizmoHandle::AxisX, Vec3::X),
    (GizmoHandle::AxisY, Vec3::Y),
    (GizmoHandle::AxisZ, Vec3::Z),
];

/// Handle under the pick ray for the current mode, if any.
pub fn hit_test_handles(
    mode: GizmoMode,
    center: Vec3,
    size: f32,
    origin: Vec3,
    dir: Vec3,
) -> Option<GizmoHandle> {
    let pick_radius = GIZMO_PICK_RADIUS * size;

    match mode {
        GizmoMode::Translate | GizmoMode::Scale => {
            // Centre handle first: it sits on top of all three stalks
            if mode == GizmoMode::Scale {
                if let Some(d) = ray_point_distance(origin, dir, center) {
                    if d < GIZMO_CENTER_RADIUS * size {
                        return Some(GizmoHandle::Center);
                    }
                }
            }

            let arm = GIZMO_ARROW_LENGTH * size;
            for (handle, axis) in AXES {
                if let Some(d) = ray_segment_distance(origin, dir, center, center + axis * arm) {
                    if d < pick_radius {
                        return Some(handle);
                    }
                }
            }
            None
        }
        GizmoMode::Rotate => {
            let radius = GIZMO_RING_RADIUS * size;

            let mut best: Option<(GizmoHandle, f32)> = None;
            for (handle, axis) in AXES {
                if let Some(d) = ray_circle_distance(origin, dir, center, axis, radius) {
                    if d < pick_radius && best.map_or(true, |(_, best_d)| d < best_d) {
                        best = Some((handle, d));
                    }
                }
            }
            best.map(|(handle, _)| handle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_plane_hits_straight_on() {
        let hit = ray_plane_intersect(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y, Vec3::ZERO, Vec3::Y);
        assert_eq!(hit, Some(Vec3::ZERO));
    }

    #[test]
    fn parallel_ray_never_hits_the_plane() {
        let hit = ray_plane_intersect(Vec3::new(0.0, 5.0, 0.0), Vec3::X, Vec3::ZERO, Vec3::Y);
        assert!(hit.is_none());
    }

    #[test]
    fn plane_behind_the_ray_is_rejected() {
        let hit = ray_plane_intersect(Vec3::new(0.0, 5.0, 0.0), Vec3::Y, Vec3::ZERO, Vec3::Y);
        assert!(hit.is_none());
    }

    #[test]
    fn ray_passing_an_axis_stalk_measures_the_gap() {
        // Segment along X at the origin, ray along Z passing 0.05 above it
        let d = ray_segment_distance(
            Vec3::new(0.5, 0.05, -5.0),
            Vec3::Z,
            Vec3::ZERO,
            Vec3::X,
        );
        assert!((d.expect("distance") - 0.05).abs() < 1e-4);
    }

    #[test]
    fn ring_distance_is_zero_on_the_ring() {
        // Y ring of radius 1: aim at a point on the circle from above
        let origin = Vec3::new(1.0, 5.0, 0.0);
        let d = ray_circle_distance(origin, -Vec3::Y, Vec3::ZERO, Vec3::Y, 1.0);
        assert!(d.expect("distance") < 1e-4);
    }

    #[test]
    fn translate_hit_test_resolves_the_grabbed_axis() {
        let center = Vec3::new(0.0, 1.0, 0.0);
        let size = 1.0;

        // Aim just past the middle of the +X stalk, from the front
        let target = center + Vec3::X * GIZMO_ARROW_LENGTH * 0.5;
        let origin = Vec3::new(target.x, target.y, -10.0);
        let handle = hit_test_handles(GizmoMode::Translate, center, size, origin, Vec3::Z);
        assert_eq!(handle, Some(GizmoHandle::AxisX));
    }

    #[test]
    fn scale_centre_handle_wins_over_the_stalks() {
        let center = Vec3::new(0.0, 1.0, 0.0);
        let origin = Vec3::new(0.0, 1.0, -10.0);
        let handle = hit_test_handles(GizmoMode::Scale, center, 1.0, origin, Vec3::Z);
        assert_eq!(handle, Some(GizmoHandle::Center));
    }

    #[test]
    fn rays_far_from_every_handle_hit_nothing() {
        let handle = hit_test_handles(
            GizmoMode::Translate,
            Vec3::ZERO,
            1.0,
            Vec3::new(50.0, 50.0, -10.0),
            Vec3::Z,
        );
        assert!(handle.is_none());
    }
}
