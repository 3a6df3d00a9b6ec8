use std::str::FromStr;

use ratatui::style::Color;

use crate::domain::{Theme, ThemeMode};

const THEATRICAL_GOLD: Color = Color::Rgb(0xFF, 0xD7, 0x00);
const THEATRICAL_CRIMSON: Color = Color::Rgb(0xDC, 0x14, 0x3C);
const THEATRICAL_CORNSILK: Color = Color::Rgb(0xFF, 0xF8, 0xDC);
const TECH_CYAN: Color = Color::Rgb(0x00, 0xFF, 0xFF);
const TECH_VIOLET: Color = Color::Rgb(0x8A, 0x2B, 0xE2);
const TECH_NEON: Color = Color::Rgb(0x39, 0xFF, 0x14);

/// Terminal colors derived from the current [`Theme`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub highlight: Color,
    pub muted: Color,
}

impl Palette {
    pub fn from_theme(theme: &Theme) -> Self {
        let (fallback, secondary, highlight) = match theme.mode {
            ThemeMode::Theatrical => (THEATRICAL_GOLD, THEATRICAL_CRIMSON, THEATRICAL_CORNSILK),
            ThemeMode::Tech => (TECH_CYAN, TECH_VIOLET, TECH_NEON),
        };
        // Configured colors are validated when the config loads
        let primary = Color::from_str(&theme.primary_color).unwrap_or(fallback);
        Self {
            primary,
            secondary,
            highlight,
            muted: Color::Gray,
        }
    }
}
