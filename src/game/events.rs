//! Messages driving the running game
//!
//! Board clicks, keyboard shortcuts and side panel buttons all end up as a
//! [`GameCommand`]; a single system in [`super::GameSystems::Execution`]
//! applies them to the [`super::resources::ActiveGame`].

use bevy::prelude::*;
use chess_engine::Move;

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Play a move chosen on the board
    PlayMove(Move),
    /// Take back the last move (Z)
    Undo,
    /// Start a new game (R)
    Reset,
}
