/// Stage manifest location, relative to the asset root.
pub const RELATIVE_MANIFEST_PATH: &str = "scenes/stage.json";
