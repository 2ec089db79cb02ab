//! Color palette for the side panel
//!
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

pub struct UiColors;

impl UiColors {
    /// Panel background
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(28, 28, 32);

    /// Headings and the side to move
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Move log entries
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(200, 200, 205);

    /// Move numbers, hints
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);

    /// Check
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    /// Game result
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);
}
