//! Game systems - input handling and game flow

pub mod game_logic;
pub mod input;

pub use game_logic::apply_game_commands;
pub use input::{handle_board_clicks, handle_keyboard};
