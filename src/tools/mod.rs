//! Interactive tools for editing the stage.
//!
//! Two tools cooperate around a single selection:
//!
//! - the prop manager owns the prop set and Selection State: left click
//!   raycasts against eligible props, the side panel appends new ones;
//! - the transform gizmo draws handles for the selected prop and edits
//!   its transform through drag operations, switching between translate,
//!   rotate, and scale modes on G/R/S.
//!
//! A click is resolved in one place: a press that lands on a gizmo
//! handle begins a drag and is never re-interpreted as a pick, so the
//! gizmo itself can never steal or change the selection.

/// Prop set, ray picking, selection state, and the side panel.
pub mod prop_manager;

/// Translate/rotate/scale gizmo: drawing, hit tests, drag editing.
pub mod transform_gizmo;
