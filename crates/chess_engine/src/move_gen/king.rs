//! King move generation
//!
//! One step in any of the eight directions onto an empty or enemy square.
//! Whether the destination is attacked is decided by the legality filter, and
//! castling is not part of this rule set.

use crate::board::Board;
use crate::moves::Move;
use crate::types::{Color, Square};

use super::push_if_open;

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for (d_row, d_col) in KING_STEPS {
        if let Some(to) = from.offset(d_row, d_col) {
            push_if_open(board, from, to, color, moves);
        }
    }
}
