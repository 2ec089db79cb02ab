//! Game state - position, turn, move log and end-of-game detection
//!
//! [`GameState`] is the single owner of a running game. It knows whose turn it
//! is, remembers every move so it can be undone, keeps both king locations
//! cached for fast check detection, and records whether the side to move has
//! been checkmated or stalemated.
//!
//! # Legality
//!
//! Move generation in [`crate::move_gen`] is pseudo-legal. [`GameState::valid_moves`]
//! filters it by playing each candidate, asking whether the mover's king is now
//! attacked, and taking the move back. The end-of-game flags are refreshed as a
//! side effect of that filter, so callers re-run it after every change to the
//! position.
//!
//! # Example
//!
//! ```rust
//! use chess_engine::{GameState, GameStatus, Square};
//!
//! let mut game = GameState::new();
//! let e2 = Square::from_notation("e2").unwrap();
//! let e4 = Square::from_notation("e4").unwrap();
//! game.try_move(e2, e4).unwrap();
//! assert_eq!(game.move_log.len(), 1);
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

#[cfg(test)]
mod tests;

use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::{self, all_possible_moves};
use crate::moves::Move;
use crate::types::{Color, Piece, PieceKind, Square};

/// Outcome of the position as seen by the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Banner text shown when the game has ended
    pub fn message(self) -> Option<String> {
        match self {
            GameStatus::Playing => None,
            GameStatus::Checkmate { winner } => Some(format!("{winner} wins by checkmate")),
            GameStatus::Stalemate => Some("Stalemate".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub move_log: Vec<Move>,
    pub white_king_location: Square,
    pub black_king_location: Square,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::White,
            move_log: Vec::new(),
            white_king_location: Square::new(7, 4),
            black_king_location: Square::new(0, 4),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Start from an arbitrary position
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::MissingKing`] if either side has no king.
    pub fn from_board(board: Board, side_to_move: Color) -> ChessEngineResult<Self> {
        let white_king_location = board
            .find_king(Color::White)
            .ok_or(ChessEngineError::MissingKing {
                color: Color::White,
            })?;
        let black_king_location = board
            .find_king(Color::Black)
            .ok_or(ChessEngineError::MissingKing {
                color: Color::Black,
            })?;
        Ok(Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            white_king_location,
            black_king_location,
            checkmate: false,
            stalemate: false,
        })
    }

    pub fn king_location(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }

    fn set_king_location(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king_location = square,
            Color::Black => self.black_king_location = square,
        }
    }

    /// Play a move without checking it
    ///
    /// The move is appended to the log and the turn passes to the other side.
    /// A pawn reaching its last row becomes a queen. Use [`GameState::try_move`]
    /// for input that has not been validated.
    pub fn make_move(&mut self, mv: Move) {
        self.apply(mv);
        debug!(notation = %mv, piece = %mv.piece_moved, "move played");
    }

    /// Take back the last move
    ///
    /// Returns the move that was undone, or `None` when nothing has been played.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.revert()?;
        debug!(notation = %mv, piece = %mv.piece_moved, "move undone");
        Some(mv)
    }

    // The legality filter plays every candidate through these two, so they
    // stay silent.
    fn apply(&mut self, mv: Move) {
        self.board.set(mv.from, None);
        self.board.set(mv.to, Some(mv.piece_moved));
        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_location(mv.piece_moved.color, mv.to);
        }
        if mv.is_pawn_promotion {
            self.board
                .set(mv.to, Some(Piece::new(mv.piece_moved.color, PieceKind::Queen)));
        }
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opponent();
    }

    fn revert(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        self.board.set(mv.from, Some(mv.piece_moved));
        self.board.set(mv.to, mv.piece_captured);
        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_location(mv.piece_moved.color, mv.from);
        }
        self.side_to_move = self.side_to_move.opponent();
        Some(mv)
    }

    /// Pseudo-legal moves for the side to move
    pub fn all_possible_moves(&self) -> Vec<Move> {
        all_possible_moves(&self.board, self.side_to_move)
    }

    /// Pseudo-legal moves of the piece on `square` for the side to move
    pub fn piece_moves(&self, square: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        move_gen::piece_moves(&self.board, square, self.side_to_move, &mut moves);
        moves
    }

    /// Moves the side to move may actually play
    ///
    /// Also refreshes [`GameState::checkmate`] and [`GameState::stalemate`].
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let candidates = self.all_possible_moves();
        let mut valid = Vec::with_capacity(candidates.len());

        for mv in candidates {
            self.apply(mv);
            let exposes_king = move_gen::is_attacked_by(
                &self.board,
                self.king_location(mover),
                mover.opponent(),
            );
            self.revert();

            if exposes_king {
                trace!(notation = %mv, "rejected: leaves own king attacked");
            } else {
                valid.push(mv);
            }
        }

        if valid.is_empty() {
            if self.in_check() {
                self.checkmate = true;
                self.stalemate = false;
            } else {
                self.checkmate = false;
                self.stalemate = true;
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        valid
    }

    /// Whether the side to move is in check
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_location(self.side_to_move))
    }

    /// Whether the opponent of the side to move has a move ending on `square`
    pub fn square_under_attack(&self, square: Square) -> bool {
        move_gen::is_attacked_by(&self.board, square, self.side_to_move.opponent())
    }

    /// Validate and play a move given by its squares
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::NoPieceAtSquare`] - `from` is empty
    /// - [`ChessEngineError::WrongPieceColor`] - `from` holds the opponent's piece
    /// - [`ChessEngineError::IllegalMove`] - the move is not among the valid moves
    pub fn try_move(&mut self, from: Square, to: Square) -> ChessEngineResult<Move> {
        let candidate = Move::new(from, to, &self.board)?;
        if candidate.piece_moved.color != self.side_to_move {
            return Err(ChessEngineError::WrongPieceColor {
                square: from.notation(),
                color: self.side_to_move,
            });
        }
        if !self.valid_moves().contains(&candidate) {
            return Err(ChessEngineError::IllegalMove {
                notation: candidate.notation(),
            });
        }

        self.make_move(candidate);
        Ok(candidate)
    }

    /// Play a move written in coordinate notation (`"e2e4"`)
    pub fn try_move_notation(&mut self, notation: &str) -> ChessEngineResult<Move> {
        let mv = Move::from_notation(notation, &self.board)?;
        self.try_move(mv.from, mv.to)
    }

    /// Status derived from the flags set by the last [`GameState::valid_moves`] call
    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opponent(),
            }
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Playing
        }
    }

    /// Full-move number in the usual sense (starts at 1, increments after Black)
    pub fn move_number(&self) -> usize {
        self.move_log.len() / 2 + 1
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move)
    }
}
