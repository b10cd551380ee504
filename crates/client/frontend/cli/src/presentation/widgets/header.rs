//! Header widget displaying move counter and board statistics.

use client_frontend_core::BoardView;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::terminal::WINDOW_TITLE;

/// Render the header panel with move count, best tile, board sum and seed.
pub fn render(frame: &mut Frame, area: Rect, view: &BoardView) {
    let text = vec![Line::from(vec![
        Span::raw("Moves: "),
        Span::styled(view.moves.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Best: "),
        Span::styled(
            view.max_tile.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Sum: "),
        Span::styled(view.sum.to_string(), Style::default().fg(Color::LightGreen)),
        Span::raw(" | Seed: "),
        Span::styled(view.seed.to_string(), Style::default().fg(Color::DarkGray)),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(WINDOW_TITLE));

    frame.render_widget(paragraph, area);
}
