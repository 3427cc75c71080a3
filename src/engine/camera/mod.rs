pub mod orbit_camera;

pub use orbit_camera::{OrbitCamera, OrbitLock, orbit_camera_controller};
