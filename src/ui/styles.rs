//! Color palette for the SolMate UI
//!
//! A consistent scheme across all screens: dark backgrounds, teal and blue
//! accents matching the board theme, and clean text colors for readability.
//!
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    // === Background Colors ===

    /// Primary dark background (main panels)
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(13, 17, 23);

    /// Secondary background (nested panels, cards)
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(22, 27, 34);

    /// Overlay background (semi-transparent)
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(220);

    // === Accent Colors ===

    /// Primary accent (teal - board squares, call-to-action buttons)
    pub const ACCENT_TEAL: egui::Color32 = egui::Color32::from_rgb(0, 142, 144);

    /// Secondary accent (blue - frames, links, selection)
    pub const ACCENT_BLUE: egui::Color32 = egui::Color32::from_rgb(0, 93, 173);

    /// Success color (green)
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(40, 180, 40);

    /// Error/danger color (red)
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    // === Text Colors ===

    /// Primary text (headings, important text)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Secondary text (body text)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(160, 165, 175);

    /// Border/stroke color
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);
}
