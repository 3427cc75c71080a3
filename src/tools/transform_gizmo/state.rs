use bevy::prelude::*;

/// Gizmo interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// One grabbable piece of the gizmo. Axis handles are shared between
/// modes; `Center` only exists in Scale mode (uniform scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoHandle {
    AxisX,
    AxisY,
    AxisZ,
    Center,
}

impl GizmoHandle {
    /// World-space axis for axis handles, `None` for the centre handle.
    pub fn axis(self) -> Option<Vec3> {
        match self {
            Self::AxisX => Some(Vec3::X),
            Self::AxisY => Some(Vec3::Y),
            Self::AxisZ => Some(Vec3::Z),
            Self::Center => None,
        }
    }
}

/// In-flight drag: the grabbed handle, its drag plane, and the target's
/// transform at the moment the drag began.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub handle: GizmoHandle,
    pub plane_origin: Vec3,
    pub plane_normal: Vec3,
    pub start_point: Vec3,
    pub start_translation: Vec3,
    pub start_rotation: Quat,
    pub start_scale: Vec3,
}

/// Attachment target, mode, and pointer state of the gizmo.
///
/// Written by the selection helpers (attach/detach) and the drag
/// systems; everything else only reads it.
#[derive(Resource, Default)]
pub struct GizmoState {
    pub target: Option<Entity>,
    pub mode: GizmoMode,
    pub hovered: Option<GizmoHandle>,
    pub drag: Option<DragState>,
}

impl GizmoState {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Attach to a prop. Attaching always resets the mode to Translate.
    pub fn attach(&mut self, entity: Entity) {
        self.target = Some(entity);
        self.mode = GizmoMode::Translate;
        self.drag = None;
    }

    pub fn detach(&mut self) {
        self.target = None;
        self.hovered = None;
        self.drag = None;
    }
}
