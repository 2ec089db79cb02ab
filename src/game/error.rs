//! Error types for game module
//!
//! Provides custom error types for game flow: applying moves chosen through
//! the board or the panel to the running game.

use chess_engine::ChessEngineError;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The engine rejected the move or position
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// Move input while the game has already ended
    #[error("Game is over: {message}")]
    GameOver { message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
