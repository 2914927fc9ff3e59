//! Drifting asteroid bodies and the split rule.
//!
//! An asteroid's durability is a small hit-point counter; its drawn size is
//! derived from that counter at construction (`30 + 10 × hits`). Splitting
//! scales the drawn size down per generation while the fragment keeps the
//! tier-derived collision radius from its constructor, so the two values
//! diverge after the first split. Gameplay tuning depends on that divergence;
//! do not "fix" it by recomputing the radius.

use crate::constants::{
    ASTEROID_BASE_SIZE, ASTEROID_DRIFT_RANGE, ASTEROID_SIZE_PER_HIT, ASTEROID_SPIN_RANGE,
    SPLIT_OFFSET_DIST, SPLIT_SIZE_FACTOR, SPLIT_SPEED_MAX, SPLIT_SPEED_MIN,
};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

/// Fixed rock-brown palette; one entry is picked per asteroid at spawn.
fn drift_palette() -> [Color; 5] {
    [
        Color::srgb_u8(0x8b, 0x45, 0x13),
        Color::srgb_u8(0xa0, 0x52, 0x2d),
        Color::srgb_u8(0xcd, 0x85, 0x3f),
        Color::srgb_u8(0xd2, 0x69, 0x1e),
        Color::srgb_u8(0xb8, 0x86, 0x0b),
    ]
}

/// A drifting rock.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current facing (radians). Cosmetic; collision is a circle.
    pub rotation: f32,
    /// Rotation per frame (radians).
    pub spin: f32,
    /// Remaining hit points. The session removes the asteroid once this
    /// reaches zero; it never goes back up.
    pub hits: u32,
    /// Drawn diameter and wrap margin. Shrinks by 0.7× per split generation.
    pub size: f32,
    /// Collision radius, fixed at construction from the hit-point tier.
    pub radius: f32,
    /// Cosmetic fill colour, drawn once at creation.
    pub color: Color,
}

impl Asteroid {
    /// A fresh asteroid at `pos` with the given hit-point tier, drifting on a
    /// random course with a random slow spin.
    pub fn new(pos: Vec2, hits: u32) -> Self {
        let mut rng = rand::thread_rng();
        let size = ASTEROID_BASE_SIZE + hits as f32 * ASTEROID_SIZE_PER_HIT;
        let palette = drift_palette();
        Self {
            pos,
            vel: Vec2::new(
                rng.gen_range(-ASTEROID_DRIFT_RANGE..ASTEROID_DRIFT_RANGE),
                rng.gen_range(-ASTEROID_DRIFT_RANGE..ASTEROID_DRIFT_RANGE),
            ),
            rotation: 0.0,
            spin: rng.gen_range(-ASTEROID_SPIN_RANGE..ASTEROID_SPIN_RANGE),
            hits,
            size,
            radius: size / 2.0,
            color: palette[rng.gen_range(0..palette.len())],
        }
    }

    /// Drift and spin one frame, wrapping around the field edges.
    ///
    /// The wrap margin is the asteroid's own size, so the body fully leaves
    /// the field before re-entering on the far side (unlike the ship, which
    /// wraps at the exact edge).
    pub fn update(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        self.rotation += self.spin;

        if self.pos.x < -self.size {
            self.pos.x = bounds.x + self.size;
        }
        if self.pos.x > bounds.x + self.size {
            self.pos.x = -self.size;
        }
        if self.pos.y < -self.size {
            self.pos.y = bounds.y + self.size;
        }
        if self.pos.y > bounds.y + self.size {
            self.pos.y = -self.size;
        }
    }

    /// Break into two fragments. Called on an asteroid that survived a hit,
    /// after its counter was decremented; each fragment inherits the current
    /// hit-point count and will take that many further hits itself.
    ///
    /// Each fragment appears [`SPLIT_OFFSET_DIST`] units from the parent
    /// centre at a random angle and launches on its own independent random
    /// course at a speed in `[SPLIT_SPEED_MIN, SPLIT_SPEED_MAX)`.
    pub fn split(&self) -> [Asteroid; 2] {
        let mut rng = rand::thread_rng();
        [(); 2].map(|_| {
            let offset_angle = rng.gen_range(0.0..TAU);
            let mut fragment = Asteroid::new(
                self.pos + Vec2::from_angle(offset_angle) * SPLIT_OFFSET_DIST,
                self.hits,
            );
            let launch_angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(SPLIT_SPEED_MIN..SPLIT_SPEED_MAX);
            fragment.vel = Vec2::from_angle(launch_angle) * speed;
            // Drawn size shrinks per generation; the collision radius keeps
            // the tier value the constructor assigned.
            fragment.size = self.size * SPLIT_SIZE_FACTOR;
            fragment
        })
    }
}
