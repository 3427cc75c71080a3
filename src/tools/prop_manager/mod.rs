//! Prop ownership, picking, and the side panel.
//!
//! ## Selection
//!
//! Left click casts a camera ray through the cursor and tests it against
//! the eligible-prop set only (entities carrying `Manipulable`); the
//! ground, grid, lights, and the gizmo's own handles are never hit
//! candidates. The nearest positive hit becomes the single selected
//! prop and the transform gizmo attaches to it in Translate mode.
//! Clicks on empty space clear the selection and detach the gizmo.
//!
//! ## Raycasting
//!
//! Prop selection uses oriented bounding box intersection:
//! - camera ray transformed into prop-local space
//! - AABB slab method tests against half-extents
//! - closest hit entity selected with depth sorting
//!
//! ## Panel
//!
//! Collapsible side panel (native only) with an Add Box button that
//! appends one eligible prop per press at a fixed position step, plus a
//! status line mirroring gizmo mode and selection.

/// UI button interactions for the Props panel (native only).
pub mod interactions;

/// Ray intersection utilities for oriented bounding box selection.
pub mod ray;

/// Click picking and single-selection bookkeeping.
pub mod selection;

/// Prop spawning, at startup and from the Add Box button.
pub mod spawn;

/// State resources and components for props and the panel.
pub mod state;

/// UI spawning and update systems for the Props panel (native only).
pub mod ui;

use bevy::prelude::*;

pub use state::{Manipulable, Prop, PropSize, Selected};

use crate::engine::core::app_state::AppState;
use crate::tools::transform_gizmo::drag::begin_gizmo_drag;
use selection::handle_prop_click;
use spawn::{AddPropEvent, handle_add_prop_events};
use state::{PropPanelUiState, PropSpawnState};

#[cfg(not(target_arch = "wasm32"))]
use interactions::{add_box_button_interaction, collapse_button_interaction};
#[cfg(not(target_arch = "wasm32"))]
use ui::{apply_collapse_state, reflect_status_label, spawn_prop_panel_ui};

// Registers the prop set, picking, and the Props panel.
pub struct PropManagerPlugin;

impl Plugin for PropManagerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PropPanelUiState>()
            .init_resource::<PropSpawnState>()
            .add_event::<AddPropEvent>()
            .add_systems(
                Update,
                (
                    // Drag-begin wins a click before picking sees it
                    handle_prop_click.after(begin_gizmo_drag),
                    handle_add_prop_events,
                )
                    .run_if(in_state(AppState::Running)),
            );

        // Panel UI only for native builds.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(
                Update,
                (
                    collapse_button_interaction,
                    apply_collapse_state,
                    add_box_button_interaction,
                    reflect_status_label,
                ),
            );
            app.add_systems(Startup, spawn_prop_panel_ui);
        }
    }
}
