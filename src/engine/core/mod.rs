//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the stage manifest loader, interaction
/// plugins, and platform-specific configuration.
pub mod app_setup;

/// Application state machine and frame-rate overlay.
///
/// Gates interactive systems behind manifest loading and updates the FPS
/// readout on native builds.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
