//! Centralised gameplay and presentation constants.
//!
//! All tuneable values live here so they can be found and reasoned-about in
//! one place without source-diving across multiple modules. Presentation
//! values (field dimensions, HUD font, star count) can additionally be
//! overridden at runtime through `assets/display.toml`; see [`crate::config`].

// ── Field ─────────────────────────────────────────────────────────────────────

/// Default play-field width in field units (one unit = one pixel at 1:1 zoom).
pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;

/// Default play-field height in field units.
pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

/// Floor applied to the field dimensions at session construction. Zero,
/// negative, or NaN dimensions from a misconfigured display surface collapse
/// to this instead of producing a degenerate simulation.
pub const MIN_FIELD_EXTENT: f32 = 1.0;

// ── Player ────────────────────────────────────────────────────────────────────

/// Collision radius of the ship (field units).
pub const PLAYER_RADIUS: f32 = 20.0;

/// Heading change per frame (radians) while a rotation control is held.
pub const PLAYER_TURN_RATE: f32 = 0.1;

/// Velocity gained per frame along the heading while thrust is held.
pub const PLAYER_THRUST: f32 = 0.5;

/// Hard cap on the ship's speed (units/frame). Enforced by uniform rescale
/// after friction, so the travel direction is preserved.
pub const PLAYER_MAX_SPEED: f32 = 8.0;

/// Per-frame velocity multiplier. Applied every frame whether or not thrust
/// is held, so a coasting ship drifts to a stop.
pub const PLAYER_FRICTION: f32 = 0.98;

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Bullet speed (units/frame), fixed at the moment of firing.
pub const BULLET_SPEED: f32 = 10.0;

/// Bullet collision radius.
pub const BULLET_RADIUS: f32 = 3.0;

/// Distance from the ship centre to the muzzle, along the heading.
pub const BULLET_MUZZLE_OFFSET: f32 = 30.0;

/// Sparks emitted at the muzzle per shot.
pub const MUZZLE_FLASH_COUNT: usize = 2;

/// Per-axis velocity range of muzzle sparks (each axis in ± this value).
pub const MUZZLE_FLASH_SPREAD: f32 = 1.5;

/// Lifetime of muzzle sparks (frames).
pub const MUZZLE_FLASH_LIFE: f32 = 15.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Hit points of a freshly spawned wave asteroid. Each bullet hit removes
/// one; the asteroid is gone once the counter reaches zero.
pub const ASTEROID_FULL_TIER: u32 = 3;

/// Base drawn diameter of an asteroid with zero hit points.
pub const ASTEROID_BASE_SIZE: f32 = 30.0;

/// Additional drawn diameter per hit point.
pub const ASTEROID_SIZE_PER_HIT: f32 = 10.0;

/// Per-axis drift velocity range at spawn (each axis in ± this value).
pub const ASTEROID_DRIFT_RANGE: f32 = 2.0;

/// Rotation speed range at spawn (± radians/frame). Cosmetic only.
pub const ASTEROID_SPIN_RANGE: f32 = 0.05;

/// Drawn-size multiplier applied to each fragment of a split.
pub const SPLIT_SIZE_FACTOR: f32 = 0.7;

/// Distance from the parent centre at which each fragment appears.
pub const SPLIT_OFFSET_DIST: f32 = 20.0;

/// Fragment launch speed range (units/frame), uniform in [min, max).
pub const SPLIT_SPEED_MIN: f32 = 2.0;
pub const SPLIT_SPEED_MAX: f32 = 4.0;

// ── Waves ─────────────────────────────────────────────────────────────────────

/// Wave size is `WAVE_BASE_COUNT + phase`, capped at [`WAVE_COUNT_CAP`].
pub const WAVE_BASE_COUNT: u32 = 2;

/// Upper bound on asteroids per wave, regardless of phase.
pub const WAVE_COUNT_CAP: u32 = 8;

/// Minimum distance between a wave spawn point and the player. Positions
/// closer than this are resampled.
pub const SPAWN_EXCLUSION_RADIUS: f32 = 100.0;

/// Retry cap for the rejection-sampled spawn placement. On a field smaller
/// than the exclusion radius every sample is rejected; after this many
/// attempts the last sample is used as-is rather than looping forever.
pub const SPAWN_PLACEMENT_ATTEMPTS: usize = 32;

// ── Scoring / lives ───────────────────────────────────────────────────────────

/// Points awarded per bullet hit on an asteroid.
pub const ASTEROID_HIT_SCORE: u32 = 10;

/// Lives at session start and after a restart.
pub const STARTING_LIVES: i32 = 3;

/// Fixed explosion size used when the ship is destroyed (the ship has no
/// asteroid-style size of its own).
pub const PLAYER_EXPLOSION_SIZE: f32 = 30.0;

// ── Particles ─────────────────────────────────────────────────────────────────

/// Per-frame velocity multiplier for every particle.
pub const PARTICLE_DRAG: f32 = 0.98;

/// Cosmetic particle size range (uniform in [min, max)).
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 4.0;

// ── Explosions ────────────────────────────────────────────────────────────────

/// One explosion particle per this many units of the exploding body's size.
pub const EXPLOSION_PARTICLES_PER_SIZE: f32 = 3.0;

/// Upper bound on particles per explosion.
pub const EXPLOSION_PARTICLE_CAP: usize = 15;

/// Radial speed range of explosion particles (units/frame).
pub const EXPLOSION_SPEED_MIN: f32 = 2.0;
pub const EXPLOSION_SPEED_MAX: f32 = 6.0;

/// Lifetime range of explosion particles (frames).
pub const EXPLOSION_LIFE_MIN: f32 = 20.0;
pub const EXPLOSION_LIFE_MAX: f32 = 40.0;

// ── Phase transition ──────────────────────────────────────────────────────────

/// Ambient sparks scattered across the field when a new phase begins.
pub const PHASE_BURST_COUNT: usize = 20;

/// Per-axis velocity range of phase-transition sparks (± this value).
pub const PHASE_BURST_SPREAD: f32 = 4.0;

/// Lifetime of phase-transition sparks (frames).
pub const PHASE_BURST_LIFE: f32 = 40.0;

// ── HUD / backdrop ────────────────────────────────────────────────────────────

/// Font size of the score / lives / phase HUD lines.
pub const HUD_FONT_SIZE: f32 = 20.0;

/// Number of backdrop stars. Purely decorative.
pub const STAR_COUNT: usize = 50;
