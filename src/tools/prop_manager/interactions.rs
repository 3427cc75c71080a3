use bevy::prelude::*;

use super::spawn::AddPropEvent;
use super::state::*;

// Chevron icon toggles collapse state
pub fn collapse_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<CollapseButton>),
    >,
    mut state: ResMut<PropPanelUiState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                state.collapsed = !state.collapsed;
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// Add Box button appends one prop per press
pub fn add_box_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<AddBoxButton>),
    >,
    mut events: EventWriter<AddPropEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                events.write(AddPropEvent);
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}
