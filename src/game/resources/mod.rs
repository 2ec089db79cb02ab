//! Game resources
//!
//! - [`ActiveGame`] - engine state plus the valid moves of the position
//! - [`Selection`] - two-click move entry
//! - [`MoveAnimation`] - move waiting for / playing its animation

pub mod active_game;
pub mod animation;
pub mod selection;

pub use active_game::ActiveGame;
pub use animation::MoveAnimation;
pub use selection::{ClickOutcome, Selection};
