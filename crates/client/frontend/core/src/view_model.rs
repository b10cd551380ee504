//! View-model snapshots derived from a [`Session`].
use game_core::{GameConfig, Grid, Position, Tile};
use runtime::Session;

use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::palette::{TileColor, tile_color};

/// Framework-agnostic mapping from view-model data to concrete styles.
pub trait PresentationMapper {
    type Style;

    fn style_tile(&self, color: TileColor) -> Self::Style;
    fn style_message(&self, level: MessageLevel) -> Self::Style;
    fn emphasize(&self, base_style: Self::Style) -> Self::Style;
}

/// One rendered cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub value: Tile,
    /// Blank for empty cells.
    pub label: String,
    pub color: TileColor,
}

impl CellView {
    pub fn new(value: Tile) -> Self {
        let label = if value == 0 {
            String::new()
        } else {
            value.to_string()
        };
        Self {
            value,
            label,
            color: tile_color(value),
        }
    }
}

/// High-level snapshot of the game used by presentation layers.
#[derive(Clone, Debug)]
pub struct BoardView {
    pub cells: [[CellView; GameConfig::GRID_SIZE]; GameConfig::GRID_SIZE],
    pub moves: u64,
    pub seed: u64,
    pub max_tile: Tile,
    pub sum: u64,
    /// Position of the most recently spawned tile, highlighted by renderers.
    pub last_spawn: Option<Position>,
    pub messages: Vec<MessageEntry>,
}

impl BoardView {
    pub fn from_grid(grid: &Grid) -> Self {
        let rows = grid.rows();
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| CellView::new(rows[row][col]))
            }),
            moves: 0,
            seed: 0,
            max_tile: grid.max_tile(),
            sum: grid.sum(),
            last_spawn: None,
            messages: Vec::new(),
        }
    }

    pub fn from_session(
        session: &Session,
        last_spawn: Option<Position>,
        messages: &MessageLog,
        message_limit: usize,
    ) -> Self {
        let mut view = Self::from_grid(session.grid());
        view.moves = session.moves();
        view.seed = session.seed();
        view.last_spawn = last_spawn;
        view.messages = messages.recent(message_limit).cloned().collect();
        view
    }

    pub fn cell(&self, position: Position) -> Option<&CellView> {
        self.cells.get(position.row)?.get(position.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_colors_follow_values() {
        let grid = Grid::from_rows([[0, 2, 4, 512], [0; 4], [0; 4], [0; 4]]).unwrap();
        let view = BoardView::from_grid(&grid);

        let top: Vec<_> = view.cells[0]
            .iter()
            .map(|cell| (cell.label.as_str(), cell.color))
            .collect();
        assert_eq!(
            top,
            [
                ("", TileColor::White),
                ("2", TileColor::Green),
                ("4", TileColor::Blue),
                ("512", TileColor::White),
            ]
        );
        assert_eq!(view.max_tile, 512);
        assert_eq!(view.sum, 518);
    }

    #[test]
    fn session_view_carries_counters_and_messages() {
        let mut session = Session::builder()
            .config(runtime::RuntimeConfig::default().with_seed(42))
            .build()
            .unwrap();
        session.apply(game_core::Direction::Left);

        let mut log = MessageLog::new(4);
        log.push_text("older");
        log.push_text("newer");

        let view = BoardView::from_session(&session, None, &log, 1);
        assert_eq!(view.moves, 1);
        assert_eq!(view.seed, 42);
        assert_eq!(view.messages.len(), 1);
        assert_eq!(view.messages[0].text, "newer");
        assert_eq!(view.cell(Position::new(4, 0)), None);
    }
}
