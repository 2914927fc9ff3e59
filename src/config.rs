//! Runtime display configuration loaded from `assets/display.toml`.
//!
//! [`DisplayConfig`] is a Bevy [`Resource`] mirroring the presentation
//! constants in [`crate::constants`]. At startup, [`load_display_config`]
//! reads `assets/display.toml` and overwrites the defaults with any values
//! present in the file. Missing keys fall back to the compile-time defaults,
//! so a minimal TOML can override just the values you care about.
//!
//! Gameplay tuning (speeds, wave sizes, scoring) is deliberately not exposed
//! here; only the display surface and HUD are configurable.

use crate::constants::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, HUD_FONT_SIZE, STAR_COUNT,
};
use crate::error::{validate_dimension, GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable presentation configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset by setting the value in
/// `assets/display.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Play-field width; also used for the window at startup.
    pub field_width: f32,
    /// Play-field height; also used for the window at startup.
    pub field_height: f32,
    /// Font size of the score / lives / phase HUD lines.
    pub hud_font_size: f32,
    /// Number of backdrop stars.
    pub star_count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            hud_font_size: HUD_FONT_SIZE,
            star_count: STAR_COUNT,
        }
    }
}

impl DisplayConfig {
    /// Parse a TOML document. Missing keys take their compiled defaults.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        toml::from_str::<DisplayConfig>(contents).map_err(|e| GameError::ConfigParse {
            reason: e.to_string(),
        })
    }

    /// Replace values that would break the simulation or renderer with their
    /// compiled defaults, reporting each replacement to stderr.
    pub fn sanitized(mut self) -> Self {
        if let Err(e) = validate_dimension("field_width", self.field_width) {
            eprintln!("⚠ {e}; using default");
            self.field_width = DEFAULT_FIELD_WIDTH;
        }
        if let Err(e) = validate_dimension("field_height", self.field_height) {
            eprintln!("⚠ {e}; using default");
            self.field_height = DEFAULT_FIELD_HEIGHT;
        }
        if !(self.hud_font_size.is_finite() && self.hud_font_size > 0.0) {
            self.hud_font_size = HUD_FONT_SIZE;
        }
        self
    }
}

/// Startup system: attempt to load `assets/display.toml` and overwrite the
/// `DisplayConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults. TOML parse errors are printed
/// to stderr but do not abort the game. A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).
pub fn load_display_config(mut config: ResMut<DisplayConfig>) {
    let path = "assets/display.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match DisplayConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded.sanitized();
                println!("✓ Loaded display config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present; defaults are already in place, not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DisplayConfig::from_toml_str("").unwrap();
        assert_eq!(config.field_width, DEFAULT_FIELD_WIDTH);
        assert_eq!(config.field_height, DEFAULT_FIELD_HEIGHT);
        assert_eq!(config.star_count, STAR_COUNT);
    }

    #[test]
    fn partial_document_overrides_named_keys_only() {
        let config = DisplayConfig::from_toml_str("field_width = 1024.0\nstar_count = 80").unwrap();
        assert_eq!(config.field_width, 1024.0);
        assert_eq!(config.field_height, DEFAULT_FIELD_HEIGHT);
        assert_eq!(config.star_count, 80);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = DisplayConfig::from_toml_str("field_width = \"wide\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse { .. }));
    }

    #[test]
    fn sanitize_replaces_unusable_dimensions() {
        let config = DisplayConfig {
            field_width: -100.0,
            field_height: 0.0,
            hud_font_size: f32::NAN,
            star_count: 10,
        }
        .sanitized();
        assert_eq!(config.field_width, DEFAULT_FIELD_WIDTH);
        assert_eq!(config.field_height, DEFAULT_FIELD_HEIGHT);
        assert_eq!(config.hud_font_size, HUD_FONT_SIZE);
        assert_eq!(config.star_count, 10);
    }
}
