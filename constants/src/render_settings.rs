use bevy::prelude::*;

// Gizmo geometry, in world units at unit camera distance
pub const GIZMO_SCREEN_SCALE: f32 = 0.15;
pub const GIZMO_ARROW_LENGTH: f32 = 1.0;
pub const GIZMO_RING_RADIUS: f32 = 1.0;
pub const GIZMO_PICK_RADIUS: f32 = 0.08;
pub const GIZMO_TIP_RADIUS: f32 = 0.07;
pub const GIZMO_CENTER_RADIUS: f32 = 0.12;
pub const GIZMO_LINE_WIDTH: f32 = 3.0;

// Scale drags clamp here so a prop can never collapse or invert
pub const GIZMO_MIN_SCALE: f32 = 0.01;

// Orbit camera
pub const CAMERA_LERP_SPEED: f32 = 12.0;
pub const ORBIT_PITCH_LIMIT: f32 = 1.54;
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 200.0;
pub const ORBIT_YAW_SENSITIVITY: f32 = 0.0035;
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.0030;

// Prop spawning
pub const PROP_DEFAULT_SIZE: Vec3 = Vec3::ONE;
pub const PROP_SPAWN_STEP: f32 = 1.5;
pub const PROP_SPAWN_HEIGHT: f32 = 1.0;
