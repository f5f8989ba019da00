//! Board color theme
//!
//! The palette mirrors the product's web styling: teal and white squares
//! inside a blue frame, with a blue inset marking the selected square.

use bevy::prelude::*;

/// Colors used to draw the board.
#[derive(Resource, Debug, Clone)]
pub struct BoardTheme {
    /// Light squares (teal).
    pub light: Color,
    /// Dark squares (white; the board is teal-on-white).
    pub dark: Color,
    /// Selected-square highlight.
    pub selected: Color,
    /// Board frame behind the squares.
    pub frame: Color,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            light: Color::srgb_u8(0, 142, 144),
            dark: Color::srgb_u8(255, 255, 255),
            selected: Color::srgb_u8(0, 93, 173),
            frame: Color::srgb_u8(0, 93, 173),
        }
    }
}

impl BoardTheme {
    /// Base color for a square, before any highlight.
    pub fn square_color(&self, light: bool) -> Color {
        if light {
            self.light
        } else {
            self.dark
        }
    }
}
