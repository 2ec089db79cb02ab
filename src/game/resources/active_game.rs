//! The running game
//!
//! Wraps the engine's [`GameState`] together with the valid moves of the
//! current position. The valid-move list is recomputed after every change
//! (move, undo, reset), which also refreshes the engine's checkmate and
//! stalemate flags, so [`ActiveGame::status`] is always current.
//!
//! Systems that render the position watch this resource with change
//! detection; anything that mutates it should go through the methods here so
//! the cached moves never go stale.

use bevy::prelude::*;
use chess_engine::{ChessEngineError, GameState, GameStatus, Move, Square};

use crate::game::error::{GameError, GameResult};

#[derive(Resource, Debug, Clone)]
pub struct ActiveGame {
    state: GameState,
    valid_moves: Vec<Move>,
    in_check: bool,
}

impl Default for ActiveGame {
    fn default() -> Self {
        Self::from_state(GameState::new())
    }
}

impl ActiveGame {
    /// Wrap an engine state and compute its valid moves
    pub fn from_state(state: GameState) -> Self {
        let mut game = Self {
            state,
            valid_moves: Vec::new(),
            in_check: false,
        };
        game.refresh();
        game
    }

    fn refresh(&mut self) {
        self.valid_moves = self.state.valid_moves();
        self.in_check = self.state.in_check();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn valid_moves(&self) -> &[Move] {
        &self.valid_moves
    }

    /// Valid moves starting on `square`
    pub fn valid_moves_from(&self, square: Square) -> impl Iterator<Item = &Move> + '_ {
        self.valid_moves.iter().filter(move |mv| mv.from == square)
    }

    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Play a move if it is valid in the current position
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] - the game has already ended
    /// - [`GameError::Engine`] - the move is not valid here
    pub fn play(&mut self, mv: Move) -> GameResult<Move> {
        if let Some(message) = self.status().message() {
            return Err(GameError::GameOver { message });
        }
        let Some(valid) = self.valid_moves.iter().find(|candidate| **candidate == mv).copied()
        else {
            return Err(ChessEngineError::IllegalMove {
                notation: mv.notation(),
            }
            .into());
        };

        self.state.make_move(valid);
        self.refresh();
        Ok(valid)
    }

    /// Take back the last move; allowed after the game has ended
    pub fn undo(&mut self) -> Option<Move> {
        let undone = self.state.undo_move()?;
        self.refresh();
        Some(undone)
    }

    /// Start over from the initial position
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
