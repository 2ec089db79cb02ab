//! Board geometry and square sprites
//!
//! The 2D camera sits at the world origin, so the window spans
//! `-width/2..width/2` horizontally. The board is drawn flush with the left
//! and top edges of the window; the side panel (if any) covers the rest.
//! Row 0 (rank 8) is the top row.

use bevy::prelude::*;
use chess_engine::Square;

use crate::core::{GameSettings, BOARD_DIMENSION};

/// Z layer of the square sprites
pub const SQUARE_Z: f32 = 0.0;

/// Marker for the 64 board squares
#[derive(Component, Debug, Clone, Copy)]
pub struct BoardSquare {
    pub square: Square,
}

/// Maps between board squares and world coordinates
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Edge length of one square
    pub square_size: f32,
    /// World position of the board's top-left corner
    pub origin: Vec2,
}

impl BoardLayout {
    pub fn from_settings(settings: &GameSettings) -> Self {
        let (window_width, _) = settings.window_size();
        Self {
            square_size: settings.square_size as f32,
            origin: Vec2::new(
                -(window_width as f32) / 2.0,
                settings.board_pixels() as f32 / 2.0,
            ),
        }
    }

    pub fn board_size(&self) -> f32 {
        self.square_size * BOARD_DIMENSION as f32
    }

    pub fn board_center(&self) -> Vec2 {
        let half = self.board_size() / 2.0;
        self.origin + Vec2::new(half, -half)
    }

    pub fn square_center(&self, square: Square) -> Vec2 {
        Vec2::new(
            self.origin.x + (square.col() as f32 + 0.5) * self.square_size,
            self.origin.y - (square.row() as f32 + 0.5) * self.square_size,
        )
    }

    /// Square under a world position, `None` when off the board
    pub fn square_at(&self, world: Vec2) -> Option<Square> {
        let col = ((world.x - self.origin.x) / self.square_size).floor();
        let row = ((self.origin.y - world.y) / self.square_size).floor();
        let limit = BOARD_DIMENSION as f32;
        if !(0.0..limit).contains(&col) || !(0.0..limit).contains(&row) {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }
}

impl FromWorld for BoardLayout {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<GameSettings>() {
            Some(settings) => Self::from_settings(settings),
            None => Self::from_settings(&GameSettings::default()),
        }
    }
}

/// Spawn the 2D camera and the board squares
pub fn spawn_board(mut commands: Commands, settings: Res<GameSettings>, layout: Res<BoardLayout>) {
    commands.spawn(Camera2d);

    let light = settings.light_square_color();
    let dark = settings.dark_square_color();
    let size = Vec2::splat(layout.square_size);

    for square in Square::all() {
        let color = if square.is_light() { light } else { dark };
        commands.spawn((
            Sprite::from_color(color, size),
            Transform::from_translation(layout.square_center(square).extend(SQUARE_Z)),
            BoardSquare { square },
            Name::new(format!("Square {square}")),
        ));
    }

    info!(
        "[BOARD] Spawned {}x{} board, {} px squares",
        BOARD_DIMENSION, BOARD_DIMENSION, layout.square_size
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoardLayout {
        BoardLayout::from_settings(&GameSettings::default())
    }

    #[test]
    fn test_origin_is_top_left_of_window() {
        let layout = layout();
        // 512 px board plus a 220 px panel
        assert_eq!(layout.origin, Vec2::new(-366.0, 256.0));
        assert_eq!(layout.board_size(), 512.0);
    }

    #[test]
    fn test_square_center() {
        let layout = layout();
        assert_eq!(layout.square_center(Square::new(0, 0)), Vec2::new(-334.0, 224.0));
        assert_eq!(layout.square_center(Square::new(7, 7)), Vec2::new(114.0, -224.0));
    }

    #[test]
    fn test_square_at_round_trips_centers() {
        let layout = layout();
        for square in Square::all() {
            assert_eq!(layout.square_at(layout.square_center(square)), Some(square));
        }
    }

    #[test]
    fn test_square_at_off_board() {
        let layout = layout();
        // Inside the side panel
        assert_eq!(layout.square_at(Vec2::new(200.0, 0.0)), None);
        assert_eq!(layout.square_at(Vec2::new(-300.0, 300.0)), None);
        assert_eq!(layout.square_at(Vec2::new(-400.0, 0.0)), None);
    }

    #[test]
    fn test_light_corner() {
        // a8 is light
        assert!(Square::new(0, 0).is_light());
        assert!(!Square::new(0, 1).is_light());
    }
}
