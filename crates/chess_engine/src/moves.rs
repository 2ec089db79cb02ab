//! Move representation
//!
//! A [`Move`] snapshots what stood on its start and end squares at the time it
//! was created, so the game can undo it without keeping board copies.
//! Two moves are equal when they share a move id (start and end squares); the
//! pieces carried along are bookkeeping and take no part in comparison.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_pawn_promotion: bool,
}

impl Move {
    /// Build a move from the pieces currently on `board`
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::NoPieceAtSquare`] when `from` is empty.
    pub fn new(from: Square, to: Square, board: &Board) -> ChessEngineResult<Self> {
        let piece_moved = board
            .get(from)
            .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
                square: from.notation(),
            })?;
        Ok(Self::with_piece(from, to, piece_moved, board.get(to)))
    }

    /// Build a move when the moving piece is already known (move generation)
    pub(crate) fn with_piece(
        from: Square,
        to: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        let is_pawn_promotion =
            piece_moved.kind == PieceKind::Pawn && to.row() == piece_moved.color.promotion_row();
        Self {
            from,
            to,
            piece_moved,
            piece_captured,
            is_pawn_promotion,
        }
    }

    /// `(start row, start col, end row, end col)`
    pub fn move_id(&self) -> (u8, u8, u8, u8) {
        (self.from.row(), self.from.col(), self.to.row(), self.to.col())
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Coordinate notation: start square followed by end square (`"e2e4"`)
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parse coordinate notation against the pieces on `board`
    pub fn from_notation(notation: &str, board: &Board) -> ChessEngineResult<Self> {
        let invalid = || ChessEngineError::InvalidNotation {
            notation: notation.to_string(),
        };
        if notation.len() != 4 || !notation.is_ascii() {
            return Err(invalid());
        }
        let from = Square::from_notation(&notation[..2]).ok_or_else(invalid)?;
        let to = Square::from_notation(&notation[2..]).ok_or_else(invalid)?;
        Move::new(from, to, board)
    }

    /// Number of squares travelled along rows plus columns
    pub fn manhattan_distance(&self) -> u8 {
        self.from.row().abs_diff(self.to.row()) + self.from.col().abs_diff(self.to.col())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn sq(name: &str) -> Square {
        Square::from_notation(name).unwrap()
    }

    #[test]
    fn test_move_reads_pieces_from_board() {
        let board = Board::starting();
        let mv = Move::new(sq("e2"), sq("e4"), &board).unwrap();
        assert_eq!(mv.piece_moved, Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(mv.piece_captured, None);
        assert!(!mv.is_pawn_promotion);
        assert_eq!(mv.move_id(), (6, 4, 4, 4));
        assert_eq!(mv.notation(), "e2e4");
    }

    #[test]
    fn test_move_from_empty_square_is_an_error() {
        let board = Board::starting();
        let err = Move::new(sq("e4"), sq("e5"), &board).unwrap_err();
        assert_eq!(
            err,
            ChessEngineError::NoPieceAtSquare {
                square: "e4".into()
            }
        );
    }

    #[test]
    fn test_equality_ignores_captured_piece() {
        let mut board = Board::starting();
        let quiet = Move::new(sq("d1"), sq("d7"), &board).unwrap();
        board.set(sq("d7"), None);
        let other = Move::new(sq("d1"), sq("d7"), &board).unwrap();
        assert_ne!(quiet.piece_captured, other.piece_captured);
        assert_eq!(quiet, other);
    }

    #[test]
    fn test_promotion_flag_per_color() {
        let mut board = Board::empty();
        board.set(sq("a7"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.set(sq("h2"), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.set(sq("c7"), Some(Piece::new(Color::White, PieceKind::Rook)));

        assert!(Move::new(sq("a7"), sq("a8"), &board).unwrap().is_pawn_promotion);
        assert!(Move::new(sq("h2"), sq("h1"), &board).unwrap().is_pawn_promotion);
        assert!(!Move::new(sq("c7"), sq("c8"), &board).unwrap().is_pawn_promotion);
    }

    #[test]
    fn test_from_notation() {
        let board = Board::starting();
        let mv = Move::from_notation("g1f3", &board).unwrap();
        assert_eq!(mv.piece_moved.kind, PieceKind::Knight);
        assert!(Move::from_notation("g1", &board).is_err());
        assert!(Move::from_notation("g1z3", &board).is_err());
    }

    #[test]
    fn test_manhattan_distance() {
        let board = Board::starting();
        assert_eq!(Move::from_notation("e2e4", &board).unwrap().manhattan_distance(), 2);
        assert_eq!(Move::from_notation("g1f3", &board).unwrap().manhattan_distance(), 3);
    }
}
