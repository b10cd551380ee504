//! The 4×4 tile grid.

use client_frontend_core::view_model::{BoardView, PresentationMapper};
use game_core::{GameConfig, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub const CELL_WIDTH: u16 = 8;
pub const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;

const CELLS: u16 = GameConfig::GRID_SIZE as u16;
/// Board size including gaps and the surrounding border.
pub const BOARD_WIDTH: u16 = CELLS * CELL_WIDTH + (CELLS - 1) * GAP + 2;
pub const BOARD_HEIGHT: u16 = CELLS * CELL_HEIGHT + (CELLS - 1) * GAP + 2;

/// Render the board centered in `area`.
///
/// Each cell shows its value on the tile background; empty cells are blank.
/// The most recently spawned tile is emphasized.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView,
    theme: &T,
) {
    let board_area = centered(area, BOARD_WIDTH, BOARD_HEIGHT);
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); GameConfig::GRID_SIZE])
        .spacing(GAP)
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); GameConfig::GRID_SIZE])
            .spacing(GAP)
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            let cell = &view.cells[row][col];
            let mut style = theme.style_tile(cell.color);
            if view.last_spawn == Some(Position::new(row, col)) {
                style = theme.emphasize(style);
            }

            // Label on the middle line of the cell.
            let text = vec![
                Line::default(),
                Line::from(cell.label.as_str()).alignment(Alignment::Center),
            ];
            frame.render_widget(Paragraph::new(text).style(style), *cell_area);
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
