use bevy::prelude::*;

use crate::engine::scene::axes::AxesHelper;

#[derive(Component)]
pub struct DebugPanelRoot;

#[derive(Component)]
pub struct AxesToggleButton;

#[derive(Component)]
pub struct AxesToggleLabel;

// Spawns the debug panel with the axis helper toggle
pub fn spawn_debug_panel(commands: &mut Commands) {
    commands
        .spawn((
            DebugPanelRoot,
            Name::new("DebugPanel"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(160.0),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                padding: UiRect::all(Val::Px(8.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Title"),
                Text::new("Debug"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));

            parent
                .spawn((
                    AxesToggleButton,
                    Name::new("AxesToggleButton"),
                    Button,
                    BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(28.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|button| {
                    button.spawn((
                        AxesToggleLabel,
                        Text::new("Axes: off"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });
        });
}

// Flip axis helper visibility when the panel button is pressed
pub fn handle_axes_toggle(
    mut helper: ResMut<AxesHelper>,
    interactions: Query<&Interaction, (Changed<Interaction>, With<AxesToggleButton>)>,
    mut labels: Query<&mut Text, With<AxesToggleLabel>>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            helper.visible = !helper.visible;
            let state = if helper.visible { "on" } else { "off" };
            for mut label in &mut labels {
                label.0 = format!("Axes: {state}");
            }
        }
    }
}
