use bevy::prelude::*;

// Resources
#[derive(Resource)]
pub struct PropPanelUiState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}
impl Default for PropPanelUiState {
    fn default() -> Self {
        Self {
            collapsed: false,
            open_width: 280.0,
            closed_width: 32.0,
        }
    }
}

/// Running count of panel-added props; fixes each new spawn position.
#[derive(Resource, Default)]
pub struct PropSpawnState {
    pub added: u32,
}

// Panel components
#[derive(Component)]
pub struct PropPanelRoot;
#[derive(Component)]
pub struct PropPanelBody;
#[derive(Component)]
pub struct HeaderNode;
#[derive(Component)]
pub struct TitleText;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;
#[derive(Component)]
pub struct AddBoxButton;
#[derive(Component)]
pub struct StatusLabel;

// World components
#[derive(Component)]
pub struct Prop;

/// Eligibility flag: only entities carrying this are pick candidates.
#[derive(Component)]
pub struct Manipulable;

/// At most one entity carries this at any time.
#[derive(Component)]
pub struct Selected;

/// Local-space half-extent basis for ray tests, before `Transform` scale.
#[derive(Component)]
pub struct PropSize(pub Vec3);
