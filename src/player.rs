//! Player ship state and movement.
//!
//! The ship is a plain struct owned by the session, not an ECS entity. Input
//! reaches it as a [`ControlState`] snapshot built once per frame by
//! [`crate::simulation::keyboard_controls_system`]; the movement logic never
//! touches a device directly, which keeps it fully testable.

use crate::constants::{
    PLAYER_FRICTION, PLAYER_MAX_SPEED, PLAYER_RADIUS, PLAYER_THRUST, PLAYER_TURN_RATE,
};
use bevy::prelude::*;

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Which logical controls are held this frame.
///
/// Rebuilt from the keyboard every frame before the session steps. A control
/// with no mapped key pressed is simply `false`; there is no error state.
/// Tests can populate this directly to drive the ship without a real device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// Turn counter-clockwise (heading decreases).
    pub rotate_left: bool,
    /// Turn clockwise (heading increases).
    pub rotate_right: bool,
    /// Accelerate along the current heading. There is no reverse thrust.
    pub thrust: bool,
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player's ship.
///
/// Positions and velocities are in field units per frame, y-down with the
/// origin at the top-left of the field (the renderer converts to world space).
#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians; 0 points along +x.
    pub rotation: f32,
    /// Collision radius. Fixed for the life of the session.
    pub radius: f32,
}

impl PlayerShip {
    /// A stationary ship at `pos`, pointing along +x.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            radius: PLAYER_RADIUS,
        }
    }

    /// Unit vector along the current heading.
    #[inline]
    pub fn heading(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    /// Advance the ship one frame: steer, thrust, apply friction and the
    /// speed cap, integrate, and wrap at the field edges.
    ///
    /// Friction and the cap apply every frame regardless of input, so the
    /// ship coasts to a stop and can never exceed [`PLAYER_MAX_SPEED`] when
    /// this returns. Both rotation controls held at once cancel out.
    pub fn update(&mut self, controls: &ControlState, bounds: Vec2) {
        if controls.rotate_left {
            self.rotation -= PLAYER_TURN_RATE;
        }
        if controls.rotate_right {
            self.rotation += PLAYER_TURN_RATE;
        }

        if controls.thrust {
            self.vel += self.heading() * PLAYER_THRUST;
        }

        self.vel *= PLAYER_FRICTION;

        let speed = self.vel.length();
        if speed > PLAYER_MAX_SPEED {
            self.vel *= PLAYER_MAX_SPEED / speed;
        }

        self.pos += self.vel;

        // One-shot wrap: teleport to the far edge on exit. Assumes per-frame
        // speed never exceeds the field extent, which the cap guarantees for
        // any sane field.
        if self.pos.x < 0.0 {
            self.pos.x = bounds.x;
        }
        if self.pos.x > bounds.x {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = bounds.y;
        }
        if self.pos.y > bounds.y {
            self.pos.y = 0.0;
        }
    }

    /// Put the ship back at `pos` with no residual velocity. The heading is
    /// left as-is; only a full restart resets it.
    pub fn respawn_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn held(rotate_left: bool, rotate_right: bool, thrust: bool) -> ControlState {
        ControlState {
            rotate_left,
            rotate_right,
            thrust,
        }
    }

    #[test]
    fn both_rotation_controls_cancel() {
        let mut ship = PlayerShip::new(BOUNDS * 0.5);
        ship.update(&held(true, true, false), BOUNDS);
        assert_eq!(ship.rotation, 0.0);
    }

    #[test]
    fn thrust_accelerates_along_heading() {
        let mut ship = PlayerShip::new(BOUNDS * 0.5);
        ship.update(&held(false, false, true), BOUNDS);
        assert!(ship.vel.x > 0.0, "heading 0 thrust must push along +x");
        assert_eq!(ship.vel.y, 0.0);
    }

    #[test]
    fn coasting_ship_slows_down() {
        let mut ship = PlayerShip::new(BOUNDS * 0.5);
        ship.vel = Vec2::new(4.0, 0.0);
        ship.update(&ControlState::default(), BOUNDS);
        assert!(ship.vel.x < 4.0);
        assert!(ship.vel.x > 0.0, "friction decays, it does not reverse");
    }

    #[test]
    fn speed_never_exceeds_cap() {
        let mut ship = PlayerShip::new(BOUNDS * 0.5);
        for _ in 0..300 {
            ship.update(&held(false, true, true), BOUNDS);
            assert!(
                ship.vel.length() <= PLAYER_MAX_SPEED + 1e-3,
                "speed {} exceeded the cap",
                ship.vel.length()
            );
        }
    }

    #[test]
    fn wrap_teleports_to_opposite_edge() {
        let mut ship = PlayerShip::new(Vec2::new(1.0, 300.0));
        ship.vel = Vec2::new(-5.0, 0.0);
        ship.update(&ControlState::default(), BOUNDS);
        assert_eq!(ship.pos.x, BOUNDS.x);

        let mut ship = PlayerShip::new(Vec2::new(400.0, BOUNDS.y - 1.0));
        ship.vel = Vec2::new(0.0, 5.0);
        ship.update(&ControlState::default(), BOUNDS);
        assert_eq!(ship.pos.y, 0.0);
    }

    #[test]
    fn respawn_clears_velocity_but_keeps_heading() {
        let mut ship = PlayerShip::new(BOUNDS * 0.5);
        ship.rotation = 1.2;
        ship.vel = Vec2::new(3.0, -2.0);
        ship.respawn_at(BOUNDS * 0.5);
        assert_eq!(ship.vel, Vec2::ZERO);
        assert_eq!(ship.rotation, 1.2);
    }
}
