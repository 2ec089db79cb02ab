//! Pseudo-legal move generation
//!
//! Generates every move that obeys the movement rules of each piece, without
//! checking whether the mover's own king ends up attacked. The legality filter
//! lives in [`crate::game::GameState::valid_moves`].
//!
//! ## Module Layout
//!
//! - [`pawn`] - pushes, double pushes, diagonal captures
//! - [`knight`] - L-shaped jumps
//! - [`sliding`] - rays shared by bishop, rook and queen
//! - [`king`] - single steps
//!
//! Moves are emitted in board scan order (row by row from the top, then column),
//! and within a piece in the fixed direction order of its generator. Callers
//! that compare move lists rely on this being deterministic.

pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;


use crate::board::Board;
use crate::moves::Move;
use crate::types::{Color, PieceKind, Square};

pub use king::generate_king_moves;
pub use knight::generate_knight_moves;
pub use pawn::generate_pawn_moves;
pub use sliding::{generate_bishop_moves, generate_queen_moves, generate_rook_moves};

/// Generate the pseudo-legal moves of the piece on `from`
///
/// Does nothing when the square is empty or holds a piece of the other color.
pub fn piece_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let Some(piece) = board.get(from) else {
        return;
    };
    if piece.color != color {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, color, moves),
        PieceKind::Knight => generate_knight_moves(board, from, color, moves),
        PieceKind::Bishop => generate_bishop_moves(board, from, color, moves),
        PieceKind::Rook => generate_rook_moves(board, from, color, moves),
        PieceKind::Queen => generate_queen_moves(board, from, color, moves),
        PieceKind::King => generate_king_moves(board, from, color, moves),
    }
}

/// Every pseudo-legal move for `color`
pub fn all_possible_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    for (square, piece) in board.pieces() {
        if piece.color == color {
            piece_moves(board, square, color, &mut moves);
        }
    }
    moves
}

/// Whether any pseudo-legal move of `attacker` ends on `target`
pub fn is_attacked_by(board: &Board, target: Square, attacker: Color) -> bool {
    all_possible_moves(board, attacker)
        .iter()
        .any(|mv| mv.to == target)
}

/// Push a move onto an empty or enemy-occupied square
///
/// Returns `true` when the square was empty, which is what the sliding
/// generators use to decide whether a ray continues.
#[inline]
pub(crate) fn push_if_open(
    board: &Board,
    from: Square,
    to: Square,
    color: Color,
    moves: &mut Vec<Move>,
) -> bool {
    let Some(piece_moved) = board.get(from) else {
        return false;
    };
    match board.get(to) {
        None => {
            moves.push(Move::with_piece(from, to, piece_moved, None));
            true
        }
        Some(target) if target.color != color => {
            moves.push(Move::with_piece(from, to, piece_moved, Some(target)));
            false
        }
        Some(_) => false,
    }
}
