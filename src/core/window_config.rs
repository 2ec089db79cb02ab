//! Window configuration
//!
//! The window is sized to fit the board exactly (plus the side panel), so it
//! is not resizable: the mapping from cursor to square assumes the board sits
//! at a fixed place in the window.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

use super::GameSettings;

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
}

impl WindowConfig {
    pub fn from_settings(settings: &GameSettings) -> Self {
        let (width, height) = settings.window_size();
        Self {
            title: "duelchess".to_string(),
            width,
            height,
        }
    }

    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
