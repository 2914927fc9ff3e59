use bevy::prelude::*;

/// Setup camera for 2D rendering.
///
/// A default `Camera2d` at the origin sees the whole field: the renderer maps
/// field coordinates into a centred world space, and the window is created at
/// the field's dimensions.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}
