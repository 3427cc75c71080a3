//! Transform gizmo for the selected prop.
//!
//! The gizmo attaches to whichever prop the prop manager selects and
//! edits that prop's `Transform` through pointer drags. Handles are
//! drawn with Bevy's immediate-mode gizmo API in a dedicated config
//! group so they render on top of the scene.
//!
//! ## Interaction
//!
//! - G/R/S switch between Translate, Rotate, and Scale modes
//! - axis handles constrain the edit to one world axis; the centre
//!   sphere in Scale mode applies uniformly
//! - a press on a handle captures the pointer: the orbit camera and
//!   click picking stand down until release

/// Selection outline, handle drawing, and hover tracking.
pub mod draw;

/// Drag-plane editing of the attached prop's transform.
pub mod drag;

/// Ray/handle hit tests and gizmo sizing.
pub mod hit;

/// Gizmo mode, handle, and drag state.
pub mod state;

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use constants::render_settings::GIZMO_LINE_WIDTH;

pub use state::{GizmoMode, GizmoState};

use crate::engine::core::app_state::AppState;
use drag::{begin_gizmo_drag, update_gizmo_drag};
use draw::{draw_gizmo, hover_gizmo_handles};

/// Gizmo group for the transform handles so they render on top.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct TransformGizmoGroup;

// Registers the gizmo resources, drawing, and drag systems.
pub struct TransformGizmoPlugin;

impl Plugin for TransformGizmoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GizmoState>()
            .init_gizmo_group::<TransformGizmoGroup>()
            .add_systems(Startup, configure_gizmo_lines)
            .add_systems(
                Update,
                (
                    handle_mode_keys,
                    hover_gizmo_handles,
                    begin_gizmo_drag,
                    update_gizmo_drag,
                    draw_gizmo,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

fn configure_gizmo_lines(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<TransformGizmoGroup>();
    config.depth_bias = -1.0;
    config.line.width = GIZMO_LINE_WIDTH;
}

/// G/R/S choose the gizmo mode. A pure mode switch: the selection is
/// untouched, and mode keys are ignored while a drag is in flight.
pub fn handle_mode_keys(keyboard: Res<ButtonInput<KeyCode>>, mut gizmo: ResMut<GizmoState>) {
    if gizmo.is_dragging() {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyG) {
        set_mode(&mut gizmo, GizmoMode::Translate);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        set_mode(&mut gizmo, GizmoMode::Rotate);
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        set_mode(&mut gizmo, GizmoMode::Scale);
    }
}

fn set_mode(gizmo: &mut GizmoState, mode: GizmoMode) {
    if gizmo.mode != mode {
        gizmo.mode = mode;
        gizmo.hovered = None;
        info!("Gizmo mode: {mode:?}");
    }
}
