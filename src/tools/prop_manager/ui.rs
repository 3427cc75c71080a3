use bevy::prelude::*;

use super::state::*;
use crate::tools::transform_gizmo::state::GizmoState;

// Spawns the Props panel with header, Add Box button, and status line
pub fn spawn_prop_panel_ui(mut commands: Commands, state: Res<PropPanelUiState>) {
    let width = if state.collapsed {
        state.closed_width
    } else {
        state.open_width
    };
    let body_display = if state.collapsed {
        Display::None
    } else {
        Display::Flex
    };

    commands
        .spawn((
            PropPanelRoot,
            Name::new("PropPanel"),
            // Tracks pointer hover so clicks on the panel never fall
            // through to scene picking
            Interaction::default(),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(width),
                min_width: Val::Px(0.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                justify_content: JustifyContent::FlexStart,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            let (pad, btn) = if state.collapsed { (4.0, 24.0) } else { (12.0, 28.0) };

            parent
                .spawn((
                    HeaderNode,
                    Name::new("Header"),
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(pad)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: if state.collapsed {
                            JustifyContent::FlexEnd
                        } else {
                            JustifyContent::SpaceBetween
                        },
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        TitleText,
                        Name::new("Title"),
                        Text::new("Props"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        Node {
                            display: if state.collapsed { Display::None } else { Display::Flex },
                            ..default()
                        },
                    ));

                    let chevron = if state.collapsed { ">" } else { "<" };
                    header
                        .spawn((
                            CollapseButton,
                            Name::new("CollapseButton"),
                            Button,
                            BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            Node {
                                width: Val::Px(btn),
                                height: Val::Px(btn),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn_parent| {
                            btn_parent.spawn((
                                CollapseLabel,
                                Text::new(chevron),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                            ));
                        });
                });

            parent
                .spawn((
                    PropPanelBody,
                    Name::new("Body"),
                    BackgroundColor(Color::srgb(0.12, 0.13, 0.15)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        row_gap: Val::Px(8.0),
                        column_gap: Val::Px(8.0),
                        display: body_display,
                        flex_direction: FlexDirection::Column,
                        overflow: Overflow::clip_y(),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    body.spawn((
                        AddBoxButton,
                        Button,
                        Name::new("AddBoxButton"),
                        BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(36.0),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("Add Box"),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        ));
                    });

                    body.spawn((
                        StatusLabel,
                        Name::new("StatusLabel"),
                        Text::new("Mode: Translate"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.8, 0.8, 0.85)),
                    ));
                });
        });
}

pub fn apply_collapse_state(
    state: Res<PropPanelUiState>,
    mut nodes: ParamSet<(
        Query<&mut Node, With<PropPanelRoot>>,
        Query<&mut Node, With<PropPanelBody>>,
        Query<&mut Node, With<HeaderNode>>,
        Query<&mut Node, With<TitleText>>,
        Query<&mut Node, With<CollapseButton>>,
    )>,
    mut chevrons: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() {
        return;
    }

    if let Ok(mut n) = nodes.p0().single_mut() {
        n.width = Val::Px(if state.collapsed {
            state.closed_width
        } else {
            state.open_width
        });
    }
    if let Ok(mut n) = nodes.p1().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    if let Ok(mut n) = nodes.p2().single_mut() {
        let pad = if state.collapsed { 4.0 } else { 12.0 };
        n.padding = UiRect::all(Val::Px(pad));
        n.justify_content = if state.collapsed {
            JustifyContent::FlexEnd
        } else {
            JustifyContent::SpaceBetween
        };
    }
    if let Ok(mut n) = nodes.p3().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    if let Ok(mut n) = nodes.p4().single_mut() {
        let s = if state.collapsed { 24.0 } else { 28.0 };
        n.width = Val::Px(s);
        n.height = Val::Px(s);
    }
    for mut t in &mut chevrons {
        *t = Text::new(if state.collapsed { ">" } else { "<" });
    }
}

// Mirrors gizmo mode and prop counts into the panel status line
pub fn reflect_status_label(
    gizmo: Res<GizmoState>,
    q_props: Query<(), With<Prop>>,
    mut q: Query<&mut Text, With<StatusLabel>>,
) {
    let Ok(mut text) = q.single_mut() else {
        return;
    };

    let selection = if gizmo.target.is_some() {
        "1 selected"
    } else {
        "none selected"
    };
    let label = format!(
        "Mode: {:?} | {} prop(s), {}",
        gizmo.mode,
        q_props.iter().count(),
        selection
    );

    if text.0 != label {
        *text = Text::new(label);
    }
}
