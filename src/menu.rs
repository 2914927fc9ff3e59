//! Game-over overlay: final score / phase summary and the restart control.
//!
//! The overlay is spawned once at startup and kept hidden; a sync system
//! flips its visibility off the session's running flag each frame. Restart
//! reaches the session two ways, matching the keyboard path in
//! [`crate::simulation::restart_control_system`]: the PLAY AGAIN button here,
//! or the R / Enter keys.

use crate::session::GameSession;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the overlay; visibility is toggled on this entity.
#[derive(Component)]
pub struct GameOverRoot;

/// The "Final score … / phase …" summary line.
#[derive(Component)]
pub struct GameOverSummaryText;

/// The PLAY AGAIN button.
#[derive(Component)]
pub struct RestartButton;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn title_color() -> Color {
    Color::srgb(1.0, 0.22, 0.22)
}
fn summary_color() -> Color {
    Color::srgb(0.78, 0.78, 0.85)
}
fn button_bg() -> Color {
    Color::srgb(0.08, 0.44, 0.12)
}
fn button_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
fn hint_color() -> Color {
    Color::srgb(0.42, 0.42, 0.52)
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn the game-over overlay, hidden, centred over the world.
pub fn setup_game_over_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.82)),
            ZIndex(300),
            Visibility::Hidden,
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.06, 0.02, 0.02)),
                    BorderColor::all(Color::srgb(0.55, 0.10, 0.10)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("GAME OVER"),
                        TextFont {
                            font_size: 46.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    card.spawn((
                        Text::new("Final score: 0   Final phase: 1"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(summary_color()),
                        GameOverSummaryText,
                    ));

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(button_bg()),
                        BorderColor::all(Color::srgb(0.5, 0.5, 0.5)),
                        RestartButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("PLAY AGAIN"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(button_text()),
                        ));
                    });

                    card.spawn((
                        Text::new("Press R or Enter to play again"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Show the overlay exactly while the session is stopped, refreshing the
/// terminal summary as it appears.
pub fn sync_game_over_overlay_system(
    session: Res<GameSession>,
    mut roots: Query<&mut Visibility, With<GameOverRoot>>,
    mut summaries: Query<&mut Text, With<GameOverSummaryText>>,
) {
    let target = if session.running {
        Visibility::Hidden
    } else {
        Visibility::Visible
    };
    for mut visibility in roots.iter_mut() {
        if *visibility != target {
            *visibility = target;
        }
    }

    if !session.running {
        for mut text in summaries.iter_mut() {
            *text = Text::new(format!(
                "Final score: {}   Final phase: {}",
                session.score, session.phase
            ));
        }
    }
}

/// Handle PLAY AGAIN presses (with a small hover highlight on the label).
pub fn restart_button_system(
    interactions: Query<(&Interaction, &Children), (Changed<Interaction>, With<RestartButton>)>,
    mut labels: Query<&mut TextColor>,
    mut session: ResMut<GameSession>,
) {
    for (interaction, children) in interactions.iter() {
        match interaction {
            Interaction::Pressed => {
                if !session.running {
                    session.restart();
                }
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = labels.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = labels.get_mut(child) {
                        *color = TextColor(button_text());
                    }
                }
            }
        }
    }
}
