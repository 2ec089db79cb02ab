//! Rendering module - 2D board, pieces and overlays
//!
//! Everything on screen is derived from [`crate::game::resources::ActiveGame`]
//! and [`crate::game::resources::Selection`]; rendering systems never change
//! the game.
//!
//! # Architecture
//!
//! - `board` - [`BoardLayout`] geometry, camera and square sprites
//! - `pieces` - piece entities rebuilt on every game change
//! - `animation` - sliding the moved piece
//! - `highlights` - selected square and its destinations
//! - `banner` - checkmate / stalemate text
//!
//! # Z Layers
//!
//! | Layer | Z |
//! |-------|---|
//! | squares | [`board::SQUARE_Z`] |
//! | highlights | [`highlights::HIGHLIGHT_Z`] |
//! | pieces | [`pieces::PIECE_Z`] |
//! | moving piece | [`pieces::MOVING_PIECE_Z`] |
//! | banner | [`banner::BANNER_Z`] |

pub mod animation;
pub mod banner;
pub mod board;
pub mod highlights;
pub mod pieces;

pub use board::BoardLayout;

use bevy::prelude::*;

use crate::game::GameSystems;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardLayout>()
            .add_systems(Startup, (board::spawn_board, pieces::load_piece_assets))
            .add_systems(
                Update,
                (
                    pieces::sync_piece_sprites,
                    animation::animate_pieces,
                    highlights::update_highlights,
                    banner::update_game_over_banner,
                )
                    .chain()
                    .in_set(GameSystems::Visual),
            );
    }
}
