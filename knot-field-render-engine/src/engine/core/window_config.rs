use bevy::prelude::*;
use bevy::window::PresentMode;

use constants::render_settings::WINDOW_TITLE;

/// Primary window, vsync'd so the drift pass runs once per displayed frame.
pub fn create_window_config() -> Window {
    Window {
        title: WINDOW_TITLE.to_string(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
