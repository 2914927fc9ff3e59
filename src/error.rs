//! Game-level error types.
//!
//! The simulation itself has no failure modes: controls are booleans and the
//! geometry has no invalid range. Errors only arise at the edges, when the
//! display configuration is malformed. Those paths report through these types
//! instead of panicking so the game can fall back to compiled defaults.

use std::fmt;

/// Top-level error enum for the rockfall shell.
#[derive(Debug)]
pub enum GameError {
    /// `assets/display.toml` existed but could not be parsed.
    ConfigParse {
        /// Parser message, already formatted for display.
        reason: String,
    },

    /// A configured dimension is unusable (non-positive or non-finite).
    UnsafeDimension {
        /// Name of the offending field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigParse { reason } => {
                write!(f, "display config parse failed: {}", reason)
            }
            GameError::UnsafeDimension { name, value } => write!(
                f,
                "dimension '{}' = {} is unusable (must be finite and > 0)",
                name, value
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is a finite, strictly positive dimension.
pub fn validate_dimension(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::UnsafeDimension { name, value })
    }
}
