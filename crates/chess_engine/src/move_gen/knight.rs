//! Knight move generation
//!
//! Knights move in an L-shape: two squares in one direction, then one square
//! perpendicular. They jump over pieces, so only the destination matters.

use crate::board::Board;
use crate::moves::Move;
use crate::types::{Color, Square};

use super::push_if_open;

pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate knight moves from a given square
///
/// # Examples
///
/// ```rust
/// use chess_engine::{move_gen::generate_knight_moves, Board, Color, Square};
///
/// let board = Board::starting();
/// let mut moves = Vec::new();
/// generate_knight_moves(&board, Square::new(7, 1), Color::White, &mut moves);
/// assert_eq!(moves.len(), 2); // Na3, Nc3
/// ```
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_JUMPS {
        if let Some(to) = from.offset(d_row, d_col) {
            push_if_open(board, from, to, color, moves);
        }
    }
}
