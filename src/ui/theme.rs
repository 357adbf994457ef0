//! UI theme definitions.
//!
//! Green-on-white is the app's identity; the dark variant keeps the
//! same green accents on dark surfaces.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Light => light_visuals(),
            Theme::Dark => dark_visuals(),
        }
    }
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(255, 255, 255);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Card background (pale green)
    pub const CARD_BG: Color32 = Color32::from_rgb(232, 245, 233);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(51, 51, 51);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(117, 117, 117);
    /// Accent color (green)
    pub const ACCENT: Color32 = Color32::from_rgb(76, 175, 80);
    /// Accent, darker (headings on pale green)
    pub const ACCENT_DARK: Color32 = Color32::from_rgb(46, 125, 50);
    /// Accent, lighter (secondary buttons)
    pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(129, 199, 132);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(244, 67, 54);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(224, 224, 224);
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 20, 18);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 32, 28);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 44, 38);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 245, 240);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 170, 160);
    /// Accent color (green)
    pub const ACCENT: Color32 = Color32::from_rgb(102, 187, 106);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(239, 83, 80);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(60, 70, 60);
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::BACKGROUND;
    visuals.panel_fill = LightTheme::BACKGROUND;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::PANEL_BG;

    visuals.widgets.noninteractive.bg_fill = LightTheme::PANEL_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::PANEL_BG;
    visuals.widgets.hovered.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = LightTheme::ACCENT_DARK;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 58, 50);
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}
