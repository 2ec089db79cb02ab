//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! move validation, notation parsing and board construction.

use thiserror::Error;

use crate::types::Color;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Row/column pair outside the board
    #[error("Invalid square ({row}, {col}) (must be 0-7)")]
    InvalidSquare { row: i8, col: i8 },

    /// Square or move notation that could not be parsed
    #[error("Invalid notation: {notation:?}")]
    InvalidNotation { notation: String },

    /// Board text that could not be parsed
    #[error("Invalid board: {message}")]
    InvalidBoard { message: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: String },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: String, color: Color },

    /// Move is not among the valid moves of the position
    #[error("Illegal move: {notation}")]
    IllegalMove { notation: String },

    /// A position without a king cannot be played
    #[error("No {color} king on the board")]
    MissingKing { color: Color },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
