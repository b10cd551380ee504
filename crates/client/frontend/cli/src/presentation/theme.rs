//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{TileColor, message::MessageLevel, view_model::PresentationMapper};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Terminal color for a tile background.
    pub fn tile_background(color: TileColor) -> Color {
        match color {
            TileColor::Green => Color::Green,
            TileColor::Blue => Color::Blue,
            TileColor::Red => Color::Red,
            TileColor::Yellow => Color::Yellow,
            TileColor::Purple => Color::Rgb(160, 32, 240),
            TileColor::Cyan => Color::Cyan,
            TileColor::Pink => Color::Rgb(255, 192, 203),
            TileColor::Orange => Color::Rgb(255, 165, 0),
            TileColor::White => Color::White,
        }
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_tile(&self, color: TileColor) -> Self::Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::tile_background(color))
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }

    fn emphasize(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}
