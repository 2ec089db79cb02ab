//! Game module - the running game inside the Bevy app
//!
//! Rules live in the `chess_engine` crate; this module keeps one
//! [`resources::ActiveGame`] and feeds it from the mouse, the keyboard and
//! the side panel.
//!
//! # Module Organization
//!
//! - `resources` - ActiveGame, Selection, MoveAnimation
//! - `events` - [`GameCommand`] messages
//! - `systems` - input and command application
//! - `plugin` - GamePlugin that registers everything
//!
//! # Data Flow
//!
//! ```text
//! click / key / button -> GameCommand -> apply_game_commands -> ActiveGame
//! ActiveGame (changed) -> piece sprites, highlights, banner, side panel
//! ```

pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use error::{GameError, GameResult};
pub use events::GameCommand;
pub use plugin::GamePlugin;
pub use system_sets::GameSystems;
