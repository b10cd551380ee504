//! Key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

const HINTS: &str = "arrows / hjkl / wasd: move   q / Esc: quit";

pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(HINTS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
