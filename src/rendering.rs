//! Rendering systems: star-field backdrop, gizmo world pass, and the HUD.
//!
//! Everything here is a pure read of [`GameSession`]; drawing never mutates
//! simulation state. The world pass is immediate-mode gizmos, so there are no
//! retained entities to keep in sync with the session's collections.
//!
//! | System                 | Schedule | Purpose                             |
//! |------------------------|----------|-------------------------------------|
//! | `setup_hud`            | Startup  | Spawn score / lives / phase text    |
//! | `hud_display_system`   | Update   | Refresh the HUD lines               |
//! | `draw_world_system`    | Update   | Stars, ship, bullets, rocks, sparks |

use crate::config::DisplayConfig;
use crate::session::GameSession;
use bevy::prelude::*;

/// Blue used for the ship, its bullets, and the aim of the whole kit.
fn ship_color() -> Color {
    Color::srgb_u8(0x4a, 0x90, 0xe2)
}

/// Dark outline drawn inside each asteroid as surface detail.
fn crater_ring_color() -> Color {
    Color::srgb_u8(0x65, 0x43, 0x21)
}

/// Convert a field-space point (y-down, origin top-left) to Bevy world space
/// (y-up, origin at the field centre).
fn to_world(p: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(p.x - bounds.x * 0.5, bounds.y * 0.5 - p.y)
}

/// Rotate a ship-local point by `heading` and flip into world orientation.
fn ship_point(local: Vec2, heading: Vec2) -> Vec2 {
    let rotated = heading.rotate(local);
    Vec2::new(rotated.x, -rotated.y)
}

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Which session figure a HUD text line shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudLine {
    Score,
    Lives,
    Phase,
}

/// Spawn the three fixed HUD lines in the top-left corner.
pub fn setup_hud(mut commands: Commands, config: Res<DisplayConfig>) {
    let lines = [
        (HudLine::Score, "Score: 0"),
        (HudLine::Lives, "Lives: 3"),
        (HudLine::Phase, "Phase: 1"),
    ];
    let row_height = config.hud_font_size + 6.0;

    for (row, (line, initial)) in lines.into_iter().enumerate() {
        commands.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0 + row as f32 * row_height),
                ..default()
            },
            Text::new(initial),
            TextFont {
                font_size: config.hud_font_size,
                ..default()
            },
            TextColor(Color::srgb(0.95, 0.88, 0.45)),
            line,
        ));
    }
}

/// Refresh the HUD lines from the session.
pub fn hud_display_system(
    session: Res<GameSession>,
    mut query: Query<(&mut Text, &HudLine)>,
) {
    if !session.is_changed() {
        return;
    }
    for (mut text, line) in query.iter_mut() {
        *text = Text::new(match line {
            HudLine::Score => format!("Score: {}", session.score),
            HudLine::Lives => format!("Lives: {}", session.lives),
            HudLine::Phase => format!("Phase: {}", session.phase),
        });
    }
}

// ── World pass ────────────────────────────────────────────────────────────────

/// Draw the whole field for this frame: backdrop stars, the ship as a vector
/// triangle, bullets, asteroids with a crater ring, and every particle with
/// its fade ratio as alpha. Runs whether or not the session is running, so a
/// game-over screen shows the frozen field under the overlay.
pub fn draw_world_system(
    mut gizmos: Gizmos,
    session: Res<GameSession>,
    config: Res<DisplayConfig>,
    time: Res<Time>,
) {
    let bounds = session.bounds();

    draw_star_field(&mut gizmos, bounds, config.star_count, time.elapsed_secs());

    // Ship: nose at +20 local, rear corners swept back.
    let ship = &session.player;
    let center = to_world(ship.pos, bounds);
    let heading = ship.heading();
    let hull = [
        Vec2::new(20.0, 0.0),
        Vec2::new(-10.0, -10.0),
        Vec2::new(-10.0, 10.0),
    ];
    let [nose, port, starboard] = hull.map(|p| center + ship_point(p, heading));
    gizmos.linestrip_2d([nose, port, starboard, nose], ship_color());

    for bullet in &session.bullets {
        gizmos.circle_2d(to_world(bullet.pos, bounds), bullet.radius, ship_color());
    }

    for asteroid in &session.asteroids {
        let at = to_world(asteroid.pos, bounds);
        gizmos.circle_2d(at, asteroid.radius, asteroid.color);
        gizmos.circle_2d(at, asteroid.radius * 0.7, crater_ring_color());
    }

    let loose = session.particles.iter();
    let burst = session.explosions.iter().flat_map(|e| e.particles.iter());
    for particle in loose.chain(burst) {
        gizmos.circle_2d(
            to_world(particle.pos, bounds),
            particle.size,
            particle.color.with_alpha(particle.fade()),
        );
    }
}

/// Fixed pseudo-random star pattern with a per-star sine twinkle. The layout
/// depends only on the index, so the backdrop is stable across frames.
fn draw_star_field(gizmos: &mut Gizmos, bounds: Vec2, count: usize, elapsed: f32) {
    for i in 0..count {
        let pos = Vec2::new(
            (i as f32 * 37.0) % bounds.x,
            (i as f32 * 73.0) % bounds.y,
        );
        let twinkle = (elapsed + i as f32).sin() * 0.5 + 0.5;
        gizmos.circle_2d(
            to_world(pos, bounds),
            0.7,
            Color::WHITE.with_alpha(twinkle),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_transform_centres_and_flips_y() {
        let bounds = Vec2::new(800.0, 600.0);
        assert_eq!(to_world(Vec2::new(400.0, 300.0), bounds), Vec2::ZERO);
        assert_eq!(to_world(Vec2::ZERO, bounds), Vec2::new(-400.0, 300.0));
        assert_eq!(
            to_world(Vec2::new(800.0, 600.0), bounds),
            Vec2::new(400.0, -300.0)
        );
    }

    #[test]
    fn ship_nose_tracks_the_heading() {
        // Heading 0 points along +x in field space, which is +x in world space.
        let nose = ship_point(Vec2::new(20.0, 0.0), Vec2::from_angle(0.0));
        assert!((nose - Vec2::new(20.0, 0.0)).length() < 1e-5);

        // Field space is y-down, so a +90° heading points down the screen.
        let nose = ship_point(Vec2::new(20.0, 0.0), Vec2::from_angle(std::f32::consts::FRAC_PI_2));
        assert!((nose - Vec2::new(0.0, -20.0)).length() < 1e-4);
    }
}
