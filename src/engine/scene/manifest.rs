use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Initial camera pose and projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

/// Linear distance-fog band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FogBand {
    pub colour: [f32; 3],
    pub start: f32,
    pub end: f32,
}

/// Ambient term plus one shadow-casting directional light.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightRig {
    pub ambient_colour: [f32; 3],
    pub ambient_brightness: f32,
    pub directional_position: [f32; 3],
    pub illuminance: f32,
    pub shadow_distance: f32,
    pub shadow_depth_bias: f32,
    pub shadow_map_size: usize,
}

/// Ground plane extent and grid resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundPlan {
    pub extent: f32,
    pub grid_divisions: u32,
}

/// One manipulable box to spawn at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropPlan {
    pub position: [f32; 3],
    pub size: [f32; 3],
}

impl PropPlan {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn size(&self) -> Vec3 {
        Vec3::from_array(self.size)
    }
}

/// Complete stage manifest as a Bevy asset. Mirrors JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct StageManifest {
    pub camera: CameraPose,
    pub fog: FogBand,
    pub lighting: LightRig,
    pub ground: GroundPlan,
    pub props: Vec<PropPlan>,
}

impl StageManifest {
    /// Camera start position for orbit controller initialisation.
    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera.position)
    }

    /// Point the camera orbits around.
    pub fn camera_target(&self) -> Vec3 {
        Vec3::from_array(self.camera.target)
    }

    pub fn fog_colour(&self) -> Color {
        let [r, g, b] = self.fog.colour;
        Color::srgb(r, g, b)
    }

    pub fn ambient_colour(&self) -> Color {
        let [r, g, b] = self.lighting.ambient_colour;
        Color::srgb(r, g, b)
    }

    pub fn directional_position(&self) -> Vec3 {
        Vec3::from_array(self.lighting.directional_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGE_JSON: &str = r#"{
        "camera": {
            "position": [-8.0, 1.15, 7.5],
            "target": [0.0, 0.0, 0.0],
            "fov_degrees": 45.0,
            "near": 1.0,
            "far": 1000.0
        },
        "fog": { "colour": [0.627, 0.627, 0.627], "start": 10.0, "end": 50.0 },
        "lighting": {
            "ambient_colour": [1.0, 1.0, 1.0],
            "ambient_brightness": 80.0,
            "directional_position": [6.0, 17.0, 20.0],
            "illuminance": 10000.0,
            "shadow_distance": 40.0,
            "shadow_depth_bias": 0.001,
            "shadow_map_size": 4096
        },
        "ground": { "extent": 100.0, "grid_divisions": 100 },
        "props": [ { "position": [0.0, 1.0, 0.0], "size": [1.0, 1.0, 1.0] } ]
    }"#;

    #[test]
    fn manifest_parses_stage_json() {
        let manifest: StageManifest =
            serde_json::from_str(STAGE_JSON).expect("stage JSON should parse");

        assert_eq!(manifest.camera_position(), Vec3::new(-8.0, 1.15, 7.5));
        assert_eq!(manifest.camera_target(), Vec3::ZERO);
        assert_eq!(manifest.lighting.shadow_map_size, 4096);
        assert_eq!(manifest.ground.grid_divisions, 100);
        assert_eq!(manifest.props.len(), 1);
        assert_eq!(manifest.props[0].position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(manifest.props[0].size(), Vec3::ONE);
    }
}
