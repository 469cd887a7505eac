//! Centralized theme configuration for the viewer.
//!
//! All colors and styles are defined here. Render code uses
//! `theme::module::CONSTANT` and does not hardcode `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Status row at the top of the viewer
pub mod status {
    use super::*;

    pub const BACKGROUND: Style = Style::new().bg(palette::BG_SURFACE);
    pub const SOURCE: Style = Style::new()
        .fg(palette::CYAN)
        .bg(palette::BG_SURFACE)
        .add_modifier(Modifier::BOLD);
    pub const TEXT: Style = Style::new().fg(palette::TEXT).bg(palette::BG_SURFACE);
    pub const MUTED: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .bg(palette::BG_SURFACE);
    pub const SEPARATOR: Style = Style::new().fg(palette::TEXT_DIM).bg(palette::BG_SURFACE);

    // [follow] / [autoscroll] markers
    pub const MARKER: Style = Style::new().fg(palette::PURPLE).bg(palette::BG_SURFACE);

    // Loading state
    pub const LOADING: Style = Style::new().fg(palette::WARNING).bg(palette::BG_SURFACE);
    pub const COMPLETE: Style = Style::new().fg(palette::SUCCESS).bg(palette::BG_SURFACE);
    pub const ERROR: Style = Style::new()
        .fg(palette::ERROR)
        .bg(palette::BG_SURFACE)
        .add_modifier(Modifier::BOLD);

    // Config warning
    pub const WARNING: Style = Style::new().fg(palette::WARNING).bg(palette::BG_SURFACE);
}
