//! Projectile state.

use crate::constants::BULLET_RADIUS;
use bevy::prelude::*;

/// A fired round. Velocity is fixed at creation from the ship's heading;
/// there is no drag and no steering.
///
/// Bullets carry no lifetime of their own: the session removes any bullet
/// that is no longer strictly inside the field after its move.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BULLET_RADIUS,
        }
    }

    /// Straight-line flight, one frame.
    pub fn update(&mut self) {
        self.pos += self.vel;
    }
}
