//! System parameter groups for UI systems

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::core::GameSettings;
use crate::game::resources::ActiveGame;
use crate::game::GameCommand;

/// Everything the side panel reads, plus the command writer for its buttons
#[derive(SystemParam)]
pub struct GamePanelParams<'w, 's> {
    pub contexts: EguiContexts<'w, 's>,
    pub game: Res<'w, ActiveGame>,
    pub settings: Res<'w, GameSettings>,
    pub commands: MessageWriter<'w, GameCommand>,
}
