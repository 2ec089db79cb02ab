//! Error handling helpers
//!
//! Recoverable problems (a bad color in the settings file, an unreadable
//! image directory) are logged and replaced with a fallback so the game keeps
//! running.

use bevy::color::Srgba;
use bevy::prelude::*;

use super::error::{CoreError, CoreResult};

/// Parse a `#rrggbb` / `#rrggbbaa` color string
pub fn parse_hex_color(hex: &str) -> CoreResult<Color> {
    Srgba::hex(hex)
        .map(Color::from)
        .map_err(|e| CoreError::InvalidColor {
            value: hex.to_string(),
            message: e.to_string(),
        })
}

/// Parse a hex color, logging and returning `fallback` if it is invalid
pub fn parse_hex_color_or(hex: &str, fallback: Color, context: &str) -> Color {
    match parse_hex_color(hex) {
        Ok(color) => color,
        Err(e) => {
            error!("[ERROR_HANDLER] {} in {}", e, context);
            warn!("[ERROR_HANDLER] Using fallback color: {:?}", fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_accepts_with_and_without_hash() {
        assert_eq!(parse_hex_color("#ffffff").unwrap(), Color::from(Srgba::WHITE));
        assert_eq!(parse_hex_color("000000").unwrap(), Color::from(Srgba::BLACK));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        let err = parse_hex_color("not-a-color").unwrap_err();
        assert!(matches!(err, CoreError::InvalidColor { .. }));
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_parse_hex_color_or_falls_back() {
        let fallback = Color::srgb(0.1, 0.2, 0.3);
        assert_eq!(parse_hex_color_or("#zzzzzz", fallback, "test"), fallback);
    }
}
