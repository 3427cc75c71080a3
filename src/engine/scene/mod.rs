//! Static world construction: manifest-described camera, lights, ground,
//! and the initial prop set.

/// Ground plane and line-grid mesh construction.
pub mod ground;

/// Ambient and shadowed directional light rig.
pub mod lighting;

/// Stage description as a JSON asset. Mirrors the manifest file exactly.
pub mod manifest;
