//! Selection resource for the two-click move protocol
//!
//! A move is entered as two clicks: the piece's square, then its destination.
//!
//! - Clicking the selected square again deselects it.
//! - A first click on an empty square does nothing.
//! - If the second click does not complete a valid move it becomes the new
//!   first click (so clicking another piece switches to it). When it landed on
//!   an empty square nothing stays selected.

use bevy::prelude::*;
use chess_engine::{Board, Move, Square};

/// What a click did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A square is now selected
    Selected(Square),
    /// The selection was dropped
    Deselected,
    /// Click had no effect
    Ignored,
    /// The two clicks formed this valid move; selection is cleared
    Move(Move),
}

/// Resource to store the currently selected square
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    selected: Option<Square>,
}

impl Selection {
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Feed one board click into the protocol
    ///
    /// `valid_moves` are the moves of the current position; a completed pair
    /// of clicks is only returned as [`ClickOutcome::Move`] when it matches one
    /// of them, and the matching entry (with its capture and promotion details)
    /// is what gets returned.
    pub fn click(&mut self, square: Square, board: &Board, valid_moves: &[Move]) -> ClickOutcome {
        if self.selected == Some(square) {
            self.clear();
            return ClickOutcome::Deselected;
        }

        let Some(from) = self.selected else {
            return self.select_if_occupied(square, board);
        };

        let attempted = Move::new(from, square, board)
            .ok()
            .and_then(|mv| valid_moves.iter().find(|valid| **valid == mv).copied());
        if let Some(mv) = attempted {
            self.clear();
            return ClickOutcome::Move(mv);
        }

        self.clear();
        match self.select_if_occupied(square, board) {
            ClickOutcome::Ignored => ClickOutcome::Deselected,
            outcome => outcome,
        }
    }

    fn select_if_occupied(&mut self, square: Square, board: &Board) -> ClickOutcome {
        if board.is_empty(square) {
            return ClickOutcome::Ignored;
        }
        self.selected = Some(square);
        ClickOutcome::Selected(square)
    }
}
