//! Simulation plugin and systems for Bevy.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`keyboard_controls_system`]: rebuilds the [`ControlState`] snapshot
//!    from whatever keys are held.
//! 2. [`fire_control_system`]: edge-triggered fire.
//! 3. [`restart_control_system`]: edge-triggered restart, game-over only.
//! 4. [`session_step_system`]: steps [`GameSession`] once with the snapshot.
//!
//! The snapshot layer keeps the core device-free: the session only ever sees
//! a [`ControlState`], so tests can drive it without a window or keyboard.
//! Rendering systems are registered separately in `main.rs`; they read the
//! session immutably and are free to run before or after the step.

use crate::config::DisplayConfig;
use crate::player::ControlState;
use crate::session::GameSession;
use bevy::prelude::*;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlState>().add_systems(
            Update,
            (
                keyboard_controls_system,
                fire_control_system,
                restart_control_system,
                session_step_system,
            )
                .chain(),
        );
    }
}

/// Startup system: create the session from the configured field dimensions.
///
/// Must run after [`crate::config::load_display_config`] so a TOML override
/// of the field size is respected.
pub fn setup_session(mut commands: Commands, config: Res<DisplayConfig>) {
    commands.insert_resource(GameSession::new(config.field_width, config.field_height));
    info!(
        "[session] field {}x{}",
        config.field_width, config.field_height
    );
}

/// Rebuild the per-frame control snapshot from the keyboard.
///
/// - Left arrow / A: rotate left
/// - Right arrow / D: rotate right
/// - Up arrow / W: thrust
///
/// Unpressed (or unmapped) controls are plain `false`; there is no error
/// path for a missing binding.
pub fn keyboard_controls_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut controls: ResMut<ControlState>,
) {
    controls.rotate_left = keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA);
    controls.rotate_right = keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD);
    controls.thrust = keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::KeyW);
}

/// Fire on the Space edge. One press, one bullet; holding the key does not
/// auto-fire. The session itself drops the request once stopped.
pub fn fire_control_system(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<GameSession>) {
    if keys.just_pressed(KeyCode::Space) {
        session.shoot();
    }
}

/// Restart on the R / Enter edge, accepted only on the game-over screen.
/// (The overlay's button reaches [`GameSession::restart`] through
/// [`crate::menu::restart_button_system`].)
pub fn restart_control_system(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<GameSession>) {
    if session.running {
        return;
    }
    if keys.just_pressed(KeyCode::KeyR) || keys.just_pressed(KeyCode::Enter) {
        session.restart();
        info!("[session] restarted");
    }
}

/// Step the session once with this frame's control snapshot.
pub fn session_step_system(mut session: ResMut<GameSession>, controls: Res<ControlState>) {
    session.update(&controls);
}
