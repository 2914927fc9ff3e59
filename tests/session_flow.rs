//! Headless end-to-end tests for the simulation pipeline.
//!
//! These tests use [`MinimalPlugins`] (no window, no rendering) and drive
//! the real `Update` pipeline (keyboard snapshot, fire, restart, session
//! step) by mutating the `ButtonInput<KeyCode>` resource directly.
//!
//! `ButtonInput::clear` is called between frames where an edge matters: the
//! input plugin normally ticks the just-pressed set at the end of each frame,
//! and these tests stand in for it.

use bevy::prelude::*;
use rockfall::player::ControlState;
use rockfall::session::GameSession;
use rockfall::simulation::SimulationPlugin;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with an 800x600 session and the simulation
/// pipeline registered, skipping the window/config startup path.
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(GameSession::new(800.0, 600.0));
    app.add_plugins(SimulationPlugin);
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn end_frame(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
}

fn session(app: &App) -> &GameSession {
    app.world().resource::<GameSession>()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Holding thrust accelerates the ship through the full pipeline.
#[test]
fn held_thrust_reaches_the_ship() {
    let mut app = headless_app();
    press(&mut app, KeyCode::KeyW);

    for _ in 0..3 {
        app.update();
    }

    let session = session(&app);
    assert!(
        session.player.vel.length() > 0.0,
        "three thrusting frames must leave the ship moving"
    );
    assert!(session.player.vel.x > 0.0, "heading 0 thrust points along +x");
}

/// The arrow keys land in the control snapshot, and the snapshot steers.
#[test]
fn arrow_keys_map_into_the_control_snapshot() {
    let mut app = headless_app();
    press(&mut app, KeyCode::ArrowLeft);

    app.update();

    let controls = app.world().resource::<ControlState>();
    assert!(controls.rotate_left);
    assert!(!controls.rotate_right);
    assert!(!controls.thrust);
    assert!(
        session(&app).player.rotation < 0.0,
        "left rotation must decrease the heading"
    );
}

/// Space fires exactly one bullet per press, not one per held frame.
#[test]
fn fire_is_edge_triggered() {
    let mut app = headless_app();
    press(&mut app, KeyCode::Space);

    app.update();
    assert_eq!(session(&app).bullets.len(), 1);

    // Key still held on the next frame, but the edge has passed.
    end_frame(&mut app);
    app.update();
    assert_eq!(session(&app).bullets.len(), 1);
}

/// R restarts a stopped session and is ignored while the game runs.
#[test]
fn restart_key_applies_only_on_game_over() {
    let mut app = headless_app();

    // Ignored while running.
    {
        let mut session = app.world_mut().resource_mut::<GameSession>();
        session.score = 50;
    }
    press(&mut app, KeyCode::KeyR);
    app.update();
    assert_eq!(session(&app).score, 50, "restart must not fire mid-game");
    end_frame(&mut app);

    // Accepted once stopped.
    {
        let mut session = app.world_mut().resource_mut::<GameSession>();
        session.running = false;
        session.phase = 4;
    }
    press(&mut app, KeyCode::KeyR);
    app.update();

    let session = session(&app);
    assert!(session.running);
    assert_eq!(session.score, 0);
    assert_eq!(session.phase, 1);
    assert_eq!(session.asteroids.len(), 3);
}

/// A stopped session stays frozen frame after frame.
#[test]
fn stopped_session_is_inert_across_frames() {
    let mut app = headless_app();
    {
        let mut session = app.world_mut().resource_mut::<GameSession>();
        session.running = false;
    }

    let before: Vec<Vec2> = session(&app).asteroids.iter().map(|a| a.pos).collect();
    for _ in 0..5 {
        app.update();
    }
    let after: Vec<Vec2> = session(&app).asteroids.iter().map(|a| a.pos).collect();

    assert_eq!(before, after, "a stopped session must not drift");
}
