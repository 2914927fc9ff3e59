use bevy::prelude::*;
use bevy::window::WindowResolution;

use rockfall::config::{load_display_config, DisplayConfig};
use rockfall::constants::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use rockfall::simulation::SimulationPlugin;
use rockfall::{graphics, menu, rendering, simulation};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rockfall".into(),
                resolution: WindowResolution::new(
                    DEFAULT_FIELD_WIDTH as u32,
                    DEFAULT_FIELD_HEIGHT as u32,
                ),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert DisplayConfig with compiled defaults; load_display_config
        // overwrites it from assets/display.toml (if present) in Startup.
        .insert_resource(DisplayConfig::default())
        .add_plugins(SimulationPlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                load_display_config,
                graphics::setup_camera.after(load_display_config),
                simulation::setup_session.after(load_display_config),
                rendering::setup_hud.after(load_display_config),
                menu::setup_game_over_overlay.after(load_display_config),
            ),
        )
        .add_systems(
            Update,
            (
                rendering::draw_world_system,
                rendering::hud_display_system,
                menu::sync_game_over_overlay_system,
                menu::restart_button_system,
            ),
        )
        .run();
}
