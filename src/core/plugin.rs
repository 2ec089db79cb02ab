//! Core plugin for duelchess
//!
//! Inserts the settings loaded in `main` and the derived window configuration,
//! sets the clear color, and reports the settings source at startup.
//!
//! # Plugin Order
//!
//! 1. [`bevy::DefaultPlugins`] - with the window from [`WindowConfig`]
//! 2. [`CorePlugin`] - settings resources
//! 3. [`bevy_egui::EguiPlugin`] - UI framework
//! 4. [`crate::rendering::RenderingPlugin`] and [`crate::game::GamePlugin`]
//! 5. [`crate::ui::UiPlugin`]

use bevy::prelude::*;

use super::settings_persistence::{log_settings_source, SettingsSource};
use super::{GameSettings, WindowConfig};

/// Core plugin for the application
pub struct CorePlugin {
    pub settings: GameSettings,
    pub source: SettingsSource,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(WindowConfig::from_settings(&self.settings))
            .insert_resource(self.source.clone())
            .insert_resource(ClearColor(self.settings.dark_square_color()))
            .add_systems(Startup, log_settings_source);
    }
}
