//! UI composition.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::presentation::{theme::RatatuiTheme, widgets};
use client_frontend_core::BoardView;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view: &'a BoardView,
    pub message_panel_height: u16,
}

/// Draw header, board, messages and footer into `frame`.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(widgets::board::BOARD_HEIGHT), // Board
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(1),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view);
    widgets::board::render(frame, chunks[1], ctx.view, &theme);
    widgets::messages::render(frame, chunks[2], &ctx.view.messages, &theme);
    widgets::footer::render(frame, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::message::{MessageEntry, MessageLevel};
    use game_core::{Grid, Position};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    fn render(view: &BoardView) -> Buffer {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let ctx = RenderContext {
            view,
            message_panel_height: 6,
        };
        terminal.draw(|frame| draw(frame, &ctx)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Coordinate of the first occurrence of `needle` at or below row `from`.
    fn find_from(buffer: &Buffer, needle: &str, from: u16) -> Option<(u16, u16)> {
        let area = buffer.area;
        (from..area.bottom()).find_map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            // Borders are multi-byte, so convert the byte offset to a column.
            line.find(needle)
                .map(|offset| (area.left() + line[..offset].chars().count() as u16, y))
        })
    }

    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        find_from(buffer, needle, 0)
    }

    fn board_view() -> BoardView {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0, 128, 0, 0], [0, 0, 1024, 0], [0; 4]])
            .unwrap();
        let mut view = BoardView::from_grid(&grid);
        view.moves = 7;
        view.messages = vec![MessageEntry::new(
            "Left: 1 merge, 2 at (0, 0)",
            Some(7),
            MessageLevel::Info,
        )];
        view.last_spawn = Some(Position::ORIGIN);
        view
    }

    #[test]
    fn renders_tile_values_and_title() {
        let buffer = render(&board_view());

        assert!(find(&buffer, "2048").is_some());
        assert!(find(&buffer, "128").is_some());
        assert!(find(&buffer, "1024").is_some());
        assert!(find(&buffer, "Moves: 7").is_some());
        assert!(find(&buffer, "[7] Left: 1 merge").is_some());
    }

    #[test]
    fn tiles_use_palette_backgrounds() {
        let buffer = render(&board_view());

        // Skip the header, which repeats the best tile.
        let (x, y) = find_from(&buffer, "128", 3).unwrap();
        assert_eq!(buffer[(x, y)].bg, Color::Rgb(255, 192, 203));

        let (x, y) = find_from(&buffer, "1024", 3).unwrap();
        assert_eq!(buffer[(x, y)].bg, Color::White);

        let (x, y) = find_from(&buffer, "2", 3).unwrap();
        assert_eq!(buffer[(x, y)].bg, Color::Green);
    }

    #[test]
    fn empty_board_shows_no_values() {
        let buffer = render(&BoardView::from_grid(&Grid::EMPTY));
        assert!(find(&buffer, "Moves: 0").is_some());
        assert!(find(&buffer, " 2 ").is_none());
    }
}
