//! UI module - egui side panel
//!
//! - **game_ui**: turn / check / result, move log, undo and new game buttons
//! - **styles**: panel colors
//! - **system_params**: resources the panel reads, grouped
//!
//! The panel is optional (`show_side_panel` in the settings); when it is off
//! the window is exactly the size of the board.

pub mod game_ui;
pub mod styles;
pub mod system_params;

pub use game_ui::*;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::core::GameSettings;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            game_panel_ui.run_if(side_panel_enabled),
        );
    }
}

fn side_panel_enabled(settings: Res<GameSettings>) -> bool {
    settings.show_side_panel
}
