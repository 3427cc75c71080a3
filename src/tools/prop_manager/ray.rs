use bevy::prelude::*;

/// Test a world-space ray against an oriented box: the ray is taken into
/// the box's local frame and run through the slab test against its
/// half-extents. `size` is the box's local size; `Transform` scale is
/// carried by `xf`.
pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray-AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = Vec3::new(
        if ray_direction.x != 0.0 {
            1.0 / ray_direction.x
        } else {
            f32::INFINITY
        },
        if ray_direction.y != 0.0 {
            1.0 / ray_direction.y
        } else {
            f32::INFINITY
        },
        if ray_direction.z != 0.0 {
            1.0 / ray_direction.z
        } else {
            f32::INFINITY
        },
    );

    let (mut tmin, mut tmax) = (
        (min.x - ray_origin.x) * inv.x,
        (max.x - ray_origin.x) * inv.x,
    );
    if tmin > tmax {
        std::mem::swap(&mut tmin, &mut tmax);
    }

    let (mut tymin, mut tymax) = (
        (min.y - ray_origin.y) * inv.y,
        (max.y - ray_origin.y) * inv.y,
    );
    if tymin > tymax {
        std::mem::swap(&mut tymin, &mut tymax);
    }

    if (tmin > tymax) || (tymin > tmax) {
        return None;
    }
    if tymin > tmin {
        tmin = tymin;
    }
    if tymax < tmax {
        tmax = tymax;
    }

    let (mut tzmin, mut tzmax) = (
        (min.z - ray_origin.z) * inv.z,
        (max.z - ray_origin.z) * inv.z,
    );
    if tzmin > tzmax {
        std::mem::swap(&mut tzmin, &mut tzmax);
    }

    if (tmin > tzmax) || (tzmin > tmax) {
        return None;
    }
    if tzmin > tmin {
        tmin = tzmin;
    }
    if tzmax < tmax {
        tmax = tzmax;
    }

    if tmax < 0.0 {
        return None;
    }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_through_box_centre_hits_the_near_face() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::Z,
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        );
        assert_eq!(t, Some(4.5));
    }

    #[test]
    fn ray_beside_box_misses() {
        let t = ray_aabb_hit_t(
            Vec3::new(2.0, 0.0, -5.0),
            Vec3::Z,
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn box_behind_ray_origin_misses() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::Z,
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn origin_inside_box_returns_the_exit_face() {
        let t = ray_aabb_hit_t(Vec3::ZERO, Vec3::Z, Vec3::splat(-0.5), Vec3::splat(0.5));
        assert_eq!(t, Some(0.5));
    }

    #[test]
    fn rotated_box_is_tested_in_its_own_frame() {
        // Unit box yawed 45 degrees: its corner reaches sqrt(0.5) along X
        let xf = GlobalTransform::from(
            Transform::from_xyz(0.0, 1.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
        );

        let corner_reach = 0.5_f32.sqrt();
        let inside = ray_hits_obb(
            Vec3::new(corner_reach - 0.05, 1.0, -5.0),
            Vec3::Z,
            xf,
            Vec3::ONE,
        );
        let outside = ray_hits_obb(
            Vec3::new(corner_reach + 0.05, 1.0, -5.0),
            Vec3::Z,
            xf,
            Vec3::ONE,
        );

        assert!(inside.is_some());
        assert!(outside.is_none());
    }

    #[test]
    fn transform_scale_grows_the_hit_volume() {
        let xf = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 0.0).with_scale(Vec3::splat(4.0)));

        let t = ray_hits_obb(Vec3::new(1.5, 0.0, -5.0), Vec3::Z, xf, Vec3::ONE);
        assert!(t.is_some(), "scaled box should cover x = 1.5");
    }
}
