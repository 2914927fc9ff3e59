//! Short-lived cosmetic particles and explosion bursts.
//!
//! Particles are plain structs owned by the session (either directly, or
//! inside an [`Explosion`]). They carry no gameplay weight: nothing collides
//! with a particle and expiry only affects what gets drawn. The renderer
//! reads [`Particle::fade`] for alpha; the simulation never draws.

use crate::constants::{
    EXPLOSION_LIFE_MAX, EXPLOSION_LIFE_MIN, EXPLOSION_PARTICLES_PER_SIZE, EXPLOSION_PARTICLE_CAP,
    EXPLOSION_SPEED_MAX, EXPLOSION_SPEED_MIN, MUZZLE_FLASH_COUNT, MUZZLE_FLASH_LIFE,
    MUZZLE_FLASH_SPREAD, PARTICLE_DRAG, PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN, PHASE_BURST_COUNT,
    PHASE_BURST_LIFE, PHASE_BURST_SPREAD,
};
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

/// Warm palette for explosion debris; one entry per particle at random.
fn blast_palette() -> [Color; 4] {
    [
        Color::srgb_u8(0xff, 0x6b, 0x6b),
        Color::srgb_u8(0xff, 0xa5, 0x00),
        Color::srgb_u8(0xff, 0xff, 0x00),
        Color::srgb_u8(0xff, 0x45, 0x00),
    ]
}

/// Blue tint of muzzle sparks, matching the ship and its bullets.
fn muzzle_color() -> Color {
    Color::srgb_u8(0x4a, 0x90, 0xe2)
}

/// Amber tint of the phase-transition burst.
fn phase_color() -> Color {
    Color::srgb_u8(0xf3, 0x9c, 0x12)
}

// ── Particle ──────────────────────────────────────────────────────────────────

/// One decorative point with a fading tail-off.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Frames remaining; decremented once per update.
    pub life: f32,
    /// Lifetime at creation, kept for the fade ratio.
    pub max_life: f32,
    /// Drawn radius, fixed at creation.
    pub size: f32,
}

impl Particle {
    /// A particle with a random cosmetic size in
    /// `[PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX)`.
    pub fn new(pos: Vec2, vel: Vec2, color: Color, life: f32) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            pos,
            vel,
            color,
            life,
            max_life: life,
            size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
        }
    }

    /// Drift, decelerate, and age one frame.
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel *= PARTICLE_DRAG;
        self.life -= 1.0;
    }

    /// Remaining-life fraction: 1 at birth, linearly down to 0 at expiry.
    /// Used by the renderer as alpha.
    #[inline]
    pub fn fade(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

// ── Explosion ─────────────────────────────────────────────────────────────────

/// A radial burst of particles created at a point and aged together.
///
/// The burst size scales with the exploding body: one particle per
/// [`EXPLOSION_PARTICLES_PER_SIZE`] units of size, capped at
/// [`EXPLOSION_PARTICLE_CAP`]. Particles leave on evenly spaced angles with
/// individually randomised speed, colour, and lifetime.
#[derive(Debug, Clone)]
pub struct Explosion {
    /// Spawn-time origin; the particles drift away from it on their own.
    pub origin: Vec2,
    pub particles: Vec<Particle>,
}

impl Explosion {
    pub fn new(origin: Vec2, size: f32) -> Self {
        let mut rng = rand::thread_rng();
        let palette = blast_palette();
        let count = ((size / EXPLOSION_PARTICLES_PER_SIZE) as usize).min(EXPLOSION_PARTICLE_CAP);

        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            let speed = rng.gen_range(EXPLOSION_SPEED_MIN..EXPLOSION_SPEED_MAX);
            let color = palette[rng.gen_range(0..palette.len())];
            let life = rng.gen_range(EXPLOSION_LIFE_MIN..EXPLOSION_LIFE_MAX);
            particles.push(Particle::new(
                origin,
                Vec2::from_angle(angle) * speed,
                color,
                life,
            ));
        }

        Self { origin, particles }
    }

    /// Age every constituent particle and drop the expired ones.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    /// An explosion lives exactly as long as any of its particles.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.particles.is_empty()
    }
}

// ── Spawn helpers ─────────────────────────────────────────────────────────────

/// Two short blue sparks at the muzzle when a shot is fired.
pub fn muzzle_flash(pos: Vec2) -> Vec<Particle> {
    let mut rng = rand::thread_rng();
    (0..MUZZLE_FLASH_COUNT)
        .map(|_| {
            let vel = Vec2::new(
                rng.gen_range(-MUZZLE_FLASH_SPREAD..MUZZLE_FLASH_SPREAD),
                rng.gen_range(-MUZZLE_FLASH_SPREAD..MUZZLE_FLASH_SPREAD),
            );
            Particle::new(pos, vel, muzzle_color(), MUZZLE_FLASH_LIFE)
        })
        .collect()
}

/// Amber sparks scattered across the whole field, used as the phase
/// transition cue.
pub fn phase_burst(bounds: Vec2) -> Vec<Particle> {
    let mut rng = rand::thread_rng();
    (0..PHASE_BURST_COUNT)
        .map(|_| {
            let pos = Vec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y));
            let vel = Vec2::new(
                rng.gen_range(-PHASE_BURST_SPREAD..PHASE_BURST_SPREAD),
                rng.gen_range(-PHASE_BURST_SPREAD..PHASE_BURST_SPREAD),
            );
            Particle::new(pos, vel, phase_color(), PHASE_BURST_LIFE)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_ages_and_fades_linearly() {
        let mut particle = Particle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), muzzle_color(), 10.0);
        assert_eq!(particle.fade(), 1.0);

        particle.update();
        assert_eq!(particle.life, 9.0);
        assert!((particle.fade() - 0.9).abs() < 1e-6);
        assert!(particle.vel.x < 1.0, "drag must slow the particle");

        for _ in 0..9 {
            particle.update();
        }
        assert!(!particle.is_alive());
        assert_eq!(particle.fade(), 0.0);
    }

    #[test]
    fn burst_count_scales_with_size_and_caps() {
        assert_eq!(Explosion::new(Vec2::ZERO, 30.0).particles.len(), 10);
        assert_eq!(Explosion::new(Vec2::ZERO, 60.0).particles.len(), 15);
        assert_eq!(Explosion::new(Vec2::ZERO, 2.0).particles.len(), 0);
    }

    #[test]
    fn burst_particles_leave_on_even_angles() {
        let explosion = Explosion::new(Vec2::ZERO, 30.0);
        let count = explosion.particles.len() as f32;
        for (i, particle) in explosion.particles.iter().enumerate() {
            let expected = Vec2::from_angle(TAU * i as f32 / count);
            let actual = particle.vel.normalize();
            assert!((expected - actual).length() < 1e-4);
            let speed = particle.vel.length();
            assert!((EXPLOSION_SPEED_MIN..EXPLOSION_SPEED_MAX).contains(&speed));
        }
    }

    #[test]
    fn explosion_dies_with_its_last_particle() {
        let mut explosion = Explosion::new(Vec2::new(10.0, 10.0), 45.0);
        assert!(explosion.is_alive());
        assert_eq!(explosion.origin, Vec2::new(10.0, 10.0));

        // Lifetimes are bounded by EXPLOSION_LIFE_MAX frames.
        for _ in 0..EXPLOSION_LIFE_MAX as usize + 1 {
            explosion.update();
        }
        assert!(!explosion.is_alive());
    }

    #[test]
    fn muzzle_flash_and_phase_burst_have_fixed_counts() {
        assert_eq!(muzzle_flash(Vec2::ZERO).len(), MUZZLE_FLASH_COUNT);

        let bounds = Vec2::new(800.0, 600.0);
        let burst = phase_burst(bounds);
        assert_eq!(burst.len(), PHASE_BURST_COUNT);
        for particle in &burst {
            assert!(particle.pos.x >= 0.0 && particle.pos.x <= bounds.x);
            assert!(particle.pos.y >= 0.0 && particle.pos.y <= bounds.y);
            assert_eq!(particle.life, PHASE_BURST_LIFE);
        }
    }
}
