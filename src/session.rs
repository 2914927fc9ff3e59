//! Game session: the simulation core and its state machine.
//!
//! [`GameSession`] owns every entity collection and all score / lives / phase
//! state. A driver steps it exactly once per display refresh with the frame's
//! control snapshot; rendering reads the same struct immutably afterwards.
//! The only externally invokable operations are [`GameSession::new`],
//! [`GameSession::update`], [`GameSession::shoot`], and
//! [`GameSession::restart`]; everything else is internal to the frame step.
//!
//! ## Frame order
//!
//! 1. ship movement
//! 2. bullet movement + out-of-field compaction
//! 3. asteroid movement + dead-body compaction
//! 4. particle / explosion ageing + compaction
//! 5. collision pass (may split asteroids, spend a life, or end the game)
//! 6. phase advance if the asteroid field is clear
//!
//! Compaction runs at the top of the frame, so a body destroyed during the
//! collision pass stays in its collection until the next step. The phase
//! check and the ship-collision scan both observe those corpses for the rest
//! of the frame; keep that in mind when reasoning about same-frame effects.

use crate::asteroid::Asteroid;
use crate::bullet::Bullet;
use crate::constants::{
    ASTEROID_FULL_TIER, ASTEROID_HIT_SCORE, BULLET_MUZZLE_OFFSET, BULLET_SPEED, MIN_FIELD_EXTENT,
    PLAYER_EXPLOSION_SIZE, SPAWN_EXCLUSION_RADIUS, SPAWN_PLACEMENT_ATTEMPTS, STARTING_LIVES,
    WAVE_BASE_COUNT, WAVE_COUNT_CAP,
};
use crate::particles::{muzzle_flash, phase_burst, Explosion, Particle};
use crate::player::{ControlState, PlayerShip};
use bevy::prelude::*;
use rand::Rng;

/// Circle-circle overlap test shared by every collision rule.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// One run of the game, from the opening wave to game over and back through
/// restart. Registered as a Bevy resource so the shell systems can reach it,
/// but fully usable standalone (the tests construct it directly).
#[derive(Resource, Debug)]
pub struct GameSession {
    bounds: Vec2,
    pub player: PlayerShip,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub particles: Vec<Particle>,
    pub explosions: Vec<Explosion>,
    pub score: u32,
    pub lives: i32,
    /// Current phase, starting at 1. Advances each time the field is cleared.
    pub phase: u32,
    /// False once the last life is spent. A stopped session ignores
    /// everything except [`GameSession::restart`].
    pub running: bool,
}

impl GameSession {
    /// Create a session for a field of the given dimensions, with the ship at
    /// the centre and the opening asteroid wave in place.
    ///
    /// Dimensions are clamped to at least [`MIN_FIELD_EXTENT`] per axis, so a
    /// malformed display surface (zero, negative, NaN) degrades to a tiny
    /// field instead of corrupting the simulation.
    pub fn new(width: f32, height: f32) -> Self {
        let bounds = Vec2::new(
            width.max(MIN_FIELD_EXTENT),
            height.max(MIN_FIELD_EXTENT),
        );
        let mut session = Self {
            bounds,
            player: PlayerShip::new(bounds * 0.5),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            phase: 1,
            running: true,
        };
        session.spawn_wave();
        session
    }

    /// Field dimensions fixed at construction.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Advance the simulation by one frame. A stopped session is left
    /// completely untouched.
    pub fn update(&mut self, controls: &ControlState) {
        if !self.running {
            return;
        }

        let bounds = self.bounds;

        self.player.update(controls, bounds);

        // Bullets live only while strictly inside the field.
        self.bullets.retain_mut(|bullet| {
            bullet.update();
            bullet.pos.x > 0.0
                && bullet.pos.x < bounds.x
                && bullet.pos.y > 0.0
                && bullet.pos.y < bounds.y
        });

        self.asteroids.retain_mut(|asteroid| {
            asteroid.update(bounds);
            asteroid.hits > 0
        });

        self.particles.retain_mut(|particle| {
            particle.update();
            particle.is_alive()
        });

        self.explosions.retain_mut(|explosion| {
            explosion.update();
            explosion.is_alive()
        });

        self.resolve_collisions();

        if self.asteroids.is_empty() {
            self.advance_phase();
        }
    }

    /// Fire one bullet from the ship's nose, with a two-spark muzzle flash.
    /// Ignored once the session has stopped.
    pub fn shoot(&mut self) {
        if !self.running {
            return;
        }
        let heading = self.player.heading();
        let bullet = Bullet::new(
            self.player.pos + heading * BULLET_MUZZLE_OFFSET,
            heading * BULLET_SPEED,
        );
        self.particles.extend(muzzle_flash(bullet.pos));
        self.bullets.push(bullet);
    }

    /// Reset to a fresh session on the same field: zero score, full lives,
    /// phase 1, empty collections, ship centred and at rest, and a new
    /// opening wave. Valid from any state, running or stopped.
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = 1;
        self.running = true;
        self.bullets.clear();
        self.asteroids.clear();
        self.particles.clear();
        self.explosions.clear();
        self.player = PlayerShip::new(self.bounds * 0.5);
        self.spawn_wave();
    }

    // ── Collision pass ────────────────────────────────────────────────────────

    /// Circle tests over the post-movement positions.
    ///
    /// Bullets scan newest-first and each bullet damages at most one asteroid
    /// per frame; fragments pushed by a split are visible to the bullets that
    /// have not been scanned yet. The ship then checks the field in creation
    /// order and takes at most one hit per frame.
    fn resolve_collisions(&mut self) {
        let mut bullet_index = self.bullets.len();
        while bullet_index > 0 {
            bullet_index -= 1;

            let mut asteroid_index = self.asteroids.len();
            while asteroid_index > 0 {
                asteroid_index -= 1;

                let bullet = &self.bullets[bullet_index];
                let asteroid = &self.asteroids[asteroid_index];
                if !circles_overlap(bullet.pos, bullet.radius, asteroid.pos, asteroid.radius) {
                    continue;
                }

                self.bullets.remove(bullet_index);
                self.damage_asteroid(asteroid_index);
                break;
            }
        }

        let ship = &self.player;
        let ship_hit = self
            .asteroids
            .iter()
            .any(|asteroid| circles_overlap(ship.pos, ship.radius, asteroid.pos, asteroid.radius));
        if ship_hit {
            self.player_hit();
        }
    }

    /// Apply one bullet hit to the asteroid at `index`: score, explosion
    /// sized to the body, and a split when hit points remain.
    fn damage_asteroid(&mut self, index: usize) {
        let hit_pos = self.asteroids[index].pos;
        let hit_size = self.asteroids[index].size;

        self.asteroids[index].hits = self.asteroids[index].hits.saturating_sub(1);
        self.score += ASTEROID_HIT_SCORE;
        self.explosions.push(Explosion::new(hit_pos, hit_size));

        if self.asteroids[index].hits > 0 {
            let fragments = self.asteroids[index].split();
            self.asteroids.extend(fragments);
        }
    }

    /// Spend a life. Below one life the session stops where it stands (no
    /// respawn, ship left at the crash site); otherwise the ship returns to
    /// the field centre at rest, heading unchanged.
    fn player_hit(&mut self) {
        self.lives -= 1;
        self.explosions
            .push(Explosion::new(self.player.pos, PLAYER_EXPLOSION_SIZE));

        if self.lives <= 0 {
            self.running = false;
        } else {
            self.player.respawn_at(self.bounds * 0.5);
        }
    }

    // ── Phase progression ─────────────────────────────────────────────────────

    /// Move to the next phase: a bigger wave plus the ambient amber burst.
    fn advance_phase(&mut self) {
        self.phase += 1;
        self.spawn_wave();
        self.particles.extend(phase_burst(self.bounds));
    }

    /// Spawn the wave for the current phase: `min(2 + phase, 8)` full-tier
    /// asteroids, each placed by rejection sampling at least
    /// [`SPAWN_EXCLUSION_RADIUS`] from the ship. The retry loop is capped at
    /// [`SPAWN_PLACEMENT_ATTEMPTS`]; on a field too small to satisfy the rule
    /// the last sample is used as-is.
    fn spawn_wave(&mut self) {
        let mut rng = rand::thread_rng();
        let count = (WAVE_BASE_COUNT + self.phase).min(WAVE_COUNT_CAP);

        for _ in 0..count {
            let mut pos = Vec2::ZERO;
            for _ in 0..SPAWN_PLACEMENT_ATTEMPTS {
                pos = Vec2::new(
                    rng.gen_range(0.0..self.bounds.x),
                    rng.gen_range(0.0..self.bounds.y),
                );
                if pos.distance(self.player.pos) >= SPAWN_EXCLUSION_RADIUS {
                    break;
                }
            }
            self.asteroids.push(Asteroid::new(pos, ASTEROID_FULL_TIER));
        }
    }
}
