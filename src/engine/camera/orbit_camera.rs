use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use constants::render_settings::{
    CAMERA_LERP_SPEED, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_PITCH_LIMIT,
    ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY,
};

/// Orbit state around a fixed focus point. The rendered camera eases
/// toward the pose this resource describes.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Recover orbit parameters from an explicit camera pose.
    pub fn from_pose(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().max(ORBIT_MIN_DISTANCE);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (-offset.y / distance).clamp(-1.0, 1.0).asin();

        Self {
            focus: target,
            distance,
            yaw,
            pitch,
        }
    }

    /// Camera pose for the current orbit state, looking at the focus.
    pub fn eye_transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let eye = self.focus + rotation * (Vec3::Z * self.distance);
        Transform::from_translation(eye).with_rotation(rotation)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 10.0,
            yaw: 0.0,
            pitch: -0.6,
        }
    }
}

/// Set while a gizmo drag owns the pointer; the orbit controller ignores
/// input for as long as it is held.
#[derive(Resource, Default)]
pub struct OrbitLock {
    pub dragging_gizmo: bool,
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    lock: Res<OrbitLock>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Drain input up front so stale deltas never apply after a lock
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if !lock.dragging_gizmo {
        // Mouse motion with right click orbits around the focus
        if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
            orbit.yaw -= mouse_delta.x * ORBIT_YAW_SENSITIVITY;
            orbit.pitch = (orbit.pitch - mouse_delta.y * ORBIT_PITCH_SENSITIVITY)
                .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        }

        // Mouse wheel dollies toward or away from the focus
        if scroll_accum.abs() > f32::EPSILON {
            let dolly_speed = (orbit.distance * 0.2).clamp(0.5, 50.0);
            orbit.distance = (orbit.distance - scroll_accum * dolly_speed)
                .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        }
    }

    let target = orbit.eye_transform();
    let lerp_speed = (CAMERA_LERP_SPEED * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pose_round_trips_the_stage_camera() {
        let position = Vec3::new(-8.0, 1.15, 7.5);
        let target = Vec3::ZERO;

        let orbit = OrbitCamera::from_pose(position, target);
        let eye = orbit.eye_transform();

        assert!(
            eye.translation.distance(position) < 1e-4,
            "recovered eye {} differs from {}",
            eye.translation,
            position
        );
    }

    #[test]
    fn eye_transform_faces_the_focus() {
        let orbit = OrbitCamera::from_pose(Vec3::new(-8.0, 1.15, 7.5), Vec3::ZERO);
        let eye = orbit.eye_transform();

        let forward = eye.rotation * -Vec3::Z;
        let to_focus = (orbit.focus - eye.translation).normalize();
        assert!(forward.dot(to_focus) > 0.9999);
    }

    #[test]
    fn from_pose_enforces_the_minimum_distance() {
        let orbit = OrbitCamera::from_pose(Vec3::new(0.0, 0.1, 0.0), Vec3::ZERO);
        assert!(orbit.distance >= ORBIT_MIN_DISTANCE);
    }
}
