//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - One square forward onto an empty square
//! - Two squares forward from the starting row when both squares are empty
//! - One square diagonally forward, only when capturing an enemy piece
//! - A pawn reaching the far row promotes (handled when the move is made)
//!
//! En passant is not part of this rule set.

use crate::board::Board;
use crate::moves::Move;
use crate::types::{Color, Square};

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - The current position
/// * `from` - Square the pawn stands on
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append moves to
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let Some(pawn) = board.get(from) else {
        return;
    };
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            moves.push(Move::with_piece(from, one, pawn, None));

            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        moves.push(Move::with_piece(from, two, pawn, None));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(victim) = board.get(target) {
            if victim.color != color {
                moves.push(Move::with_piece(from, target, pawn, Some(victim)));
            }
        }
    }
}
