//! Rockfall, an Asteroids-style arcade shooter.
//!
//! The simulation core is [`session::GameSession`]: a plain owned state
//! machine stepped once per display refresh with a [`player::ControlState`]
//! snapshot. Bevy supplies the shell around it: window, keyboard capture,
//! gizmo rendering, and UI text. Nothing in the shell mutates simulation
//! state except through the session's four public operations.

pub mod asteroid;
pub mod bullet;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod menu;
pub mod particles;
pub mod player;
pub mod rendering;
pub mod session;
pub mod simulation;
