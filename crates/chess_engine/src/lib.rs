//! Chess rules engine for two-player games
//!
//! Board model, pseudo-legal move generation, a legality filter, make/undo and
//! end-of-game detection. No rendering or input concerns live here; the
//! `duelchess` front end drives this crate through [`GameState`].
//!
//! # Module Organization
//!
//! - [`types`] - colors, piece kinds, squares and their notation
//! - [`board`] - 8x8 grid and its text form
//! - [`moves`] - the [`Move`] record and coordinate notation
//! - [`move_gen`] - per-piece pseudo-legal generators
//! - [`game`] - [`GameState`], legality and game status
//! - [`error`] - [`ChessEngineError`]
//!
//! # Rule Set
//!
//! Standard piece movement with pawn double steps and automatic promotion to a
//! queen. Castling, en passant and draw rules other than stalemate are not
//! implemented.

pub mod board;
pub mod error;
pub mod game;
pub mod move_gen;
pub mod moves;
pub mod types;

pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use game::{GameState, GameStatus};
pub use moves::Move;
pub use types::{Color, Piece, PieceKind, Square};
