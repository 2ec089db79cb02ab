//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move any number of squares along a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction, step outward one square at a time:
//! 1. Empty square: emit the move and keep going
//! 2. Enemy piece: emit the capture and stop
//! 3. Own piece or board edge: stop without emitting

use crate::board::Board;
use crate::moves::Move;
use crate::types::{Color, Square};

use super::push_if_open;

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walk each ray from `from` and append the reachable squares
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            if !push_if_open(board, from, next, color, moves) {
                break;
            }
            current = next;
        }
    }
}

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(board, from, color, &ROOK_DIRECTIONS, moves);
}

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, moves);
}

/// Queens combine rook and bishop rays (rook rays first)
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_rook_moves(board, from, color, moves);
    generate_bishop_moves(board, from, color, moves);
}
