//! Game plugin - game flow and input
//!
//! # Plugin Dependencies
//!
//! This plugin depends on:
//! - [`crate::core::CorePlugin`] - provides [`crate::core::GameSettings`]
//! - [`crate::rendering::RenderingPlugin`] - provides the board layout and
//!   registers the visual systems in [`GameSystems::Visual`]
//!
//! # System Organization
//!
//! Systems are organized into sets with explicit ordering:
//! - `Input` - board clicks and Z / R keys
//! - `Execution` - apply [`GameCommand`]s
//! - `Visual` - rendering systems (registered by the rendering plugin)

use bevy::prelude::*;

use super::events::GameCommand;
use super::resources::*;
use super::system_sets::GameSystems;
use super::systems::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveGame>()
            .init_resource::<Selection>()
            .init_resource::<MoveAnimation>()
            .add_message::<GameCommand>();

        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (handle_board_clicks, handle_keyboard).in_set(GameSystems::Input),
        )
        .add_systems(Update, apply_game_commands.in_set(GameSystems::Execution));
    }
}
