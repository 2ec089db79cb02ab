//! Core resources for game-wide configuration
//!
//! [`GameSettings`] is loaded once before the app starts (the window size
//! depends on it) and inserted as a resource for every plugin to read.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use super::error_handling::parse_hex_color_or;

/// Number of squares along each side of the board
pub const BOARD_DIMENSION: u8 = 8;

/// Accepted `square_size` values; the largest gives a 4096 pixel board
pub const SQUARE_SIZE_RANGE: RangeInclusive<u32> = 8..=512;

/// Accepted `side_panel_width` values
pub const SIDE_PANEL_WIDTH_RANGE: RangeInclusive<u32> = 100..=1024;

/// Accepted `animation_fps` values
pub const ANIMATION_FPS_RANGE: RangeInclusive<u32> = 1..=240;

/// Accepted `frames_per_square` values (0 disables the slide)
pub const FRAMES_PER_SQUARE_RANGE: RangeInclusive<u32> = 0..=60;

/// User-tunable presentation settings
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Edge length of one square in logical pixels
    pub square_size: u32,

    /// Light square color (hex)
    pub light_square: String,

    /// Dark square color (hex)
    pub dark_square: String,

    /// Tint for the selected square (hex, alpha taken from `highlight_alpha`)
    pub selected_highlight: String,

    /// Tint for the destinations of the selected piece
    pub move_highlight: String,

    /// Opacity of both highlight tints (0-255)
    pub highlight_alpha: u8,

    /// Whether moves slide across the board
    pub animate_moves: bool,

    /// Animation frames spent per square travelled
    pub frames_per_square: u32,

    /// Frame rate the animation length is measured in
    pub animation_fps: u32,

    /// How pieces are drawn
    pub piece_style: PieceStyle,

    /// Whether the status / move log panel is shown next to the board
    pub show_side_panel: bool,

    /// Width of the side panel in logical pixels
    pub side_panel_width: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            square_size: 64,
            light_square: "#ffffff".to_string(),
            dark_square: "#bebebe".to_string(),
            selected_highlight: "#0000ff".to_string(),
            move_highlight: "#ffff00".to_string(),
            highlight_alpha: 100,
            animate_moves: true,
            frames_per_square: 5,
            animation_fps: 60,
            piece_style: PieceStyle::default(),
            show_side_panel: true,
            side_panel_width: 220,
        }
    }
}

impl GameSettings {
    /// Check every numeric field against its accepted range
    ///
    /// # Errors
    ///
    /// [`CoreError::SettingOutOfRange`] for the first field outside its range.
    pub fn validate(&self) -> CoreResult<()> {
        check_range("square_size", self.square_size, SQUARE_SIZE_RANGE)?;
        check_range("side_panel_width", self.side_panel_width, SIDE_PANEL_WIDTH_RANGE)?;
        check_range("animation_fps", self.animation_fps, ANIMATION_FPS_RANGE)?;
        check_range("frames_per_square", self.frames_per_square, FRAMES_PER_SQUARE_RANGE)
    }

    /// Edge length of the whole board in logical pixels
    pub fn board_pixels(&self) -> u32 {
        self.square_size.saturating_mul(BOARD_DIMENSION as u32)
    }

    /// Window size needed for the board plus the optional side panel
    pub fn window_size(&self) -> (u32, u32) {
        let panel = if self.show_side_panel {
            self.side_panel_width
        } else {
            0
        };
        (self.board_pixels().saturating_add(panel), self.board_pixels())
    }

    /// Seconds a move across `squares` squares takes to animate
    ///
    /// Zero when animation is disabled or the move does not travel.
    pub fn animation_seconds(&self, squares: u8) -> f32 {
        if !self.animate_moves || self.animation_fps == 0 {
            return 0.0;
        }
        let frames = (squares as u32).saturating_mul(self.frames_per_square);
        frames as f32 / self.animation_fps as f32
    }

    pub fn light_square_color(&self) -> Color {
        parse_hex_color_or(&self.light_square, Color::WHITE, "light_square")
    }

    pub fn dark_square_color(&self) -> Color {
        parse_hex_color_or(&self.dark_square, Color::srgb_u8(190, 190, 190), "dark_square")
    }

    pub fn selected_highlight_color(&self) -> Color {
        self.highlight(&self.selected_highlight, Color::srgb(0.0, 0.0, 1.0), "selected_highlight")
    }

    pub fn move_highlight_color(&self) -> Color {
        self.highlight(&self.move_highlight, Color::srgb(1.0, 1.0, 0.0), "move_highlight")
    }

    fn highlight(&self, hex: &str, fallback: Color, context: &str) -> Color {
        parse_hex_color_or(hex, fallback, context).with_alpha(self.highlight_alpha as f32 / 255.0)
    }
}

fn check_range(field: &'static str, value: u32, range: RangeInclusive<u32>) -> CoreResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::SettingOutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Piece drawing style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PieceStyle {
    /// Colored discs with the piece letter
    #[default]
    Discs,
    /// Image sprites named by piece code (`wK.png`, `bp.png`, ...) under `dir`,
    /// relative to the asset folder
    Images { dir: PathBuf },
}
