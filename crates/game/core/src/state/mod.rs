//! Authoritative board representation.
//!
//! The [`Grid`] is a plain 4×4 value matrix. Outside this crate it is
//! read-only: it can be built from validated rows and inspected, but cell
//! mutation is reserved for the engine's slide and spawn operations.
use std::fmt;

use crate::config::GameConfig;
use crate::error::GridError;

/// Value held by a single cell: 0 for empty, otherwise a power of two.
pub type Tile = u32;

/// One horizontal line of the board, left to right.
pub type Row = [Tile; GameConfig::GRID_SIZE];

/// Cell coordinate on the board, zero-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed 4×4 board of tile values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [Row; GameConfig::GRID_SIZE],
}

impl Grid {
    /// A board with every cell empty.
    pub const EMPTY: Self = Self {
        cells: [[0; GameConfig::GRID_SIZE]; GameConfig::GRID_SIZE],
    };

    /// Largest tile accepted from outside the engine.
    ///
    /// Play tops out at 2^17 on a 4×4 board. One slide of an accepted board
    /// can merge two such tiles, so the bound sits one doubling above it.
    pub const MAX_TILE: Tile = 1 << 18;

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a grid from raw rows, rejecting values no game could produce.
    pub fn from_rows(rows: [Row; GameConfig::GRID_SIZE]) -> Result<Self, GridError> {
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let position = Position::new(r, c);
                if !is_tile_value(value) {
                    return Err(GridError::InvalidTile { position, value });
                }
                if value > Self::MAX_TILE {
                    return Err(GridError::TileTooLarge {
                        position,
                        value,
                        max: Self::MAX_TILE,
                    });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Wraps rows produced by the engine itself.
    pub(crate) const fn from_rows_unchecked(rows: [Row; GameConfig::GRID_SIZE]) -> Self {
        Self { cells: rows }
    }

    #[inline]
    pub fn rows(&self) -> &[Row; GameConfig::GRID_SIZE] {
        &self.cells
    }

    /// Returns the tile at `position`, or `None` when it is off the board.
    pub fn get(&self, position: Position) -> Option<Tile> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    pub(crate) fn set(&mut self, position: Position, value: Tile) -> Result<(), GridError> {
        let cell = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
            .ok_or(GridError::OutOfBounds(position))?;
        *cell = value;
        Ok(())
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &value)| (Position::new(r, c), value))
        })
    }

    /// Total of all tile values. Sliding never changes it.
    pub fn sum(&self) -> u64 {
        self.cells().map(|(_, value)| u64::from(value)).sum()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|&(_, value)| value != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == GameConfig::CELL_COUNT
    }

    pub fn max_tile(&self) -> Tile {
        self.cells().map(|(_, value)| value).max().unwrap_or(0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &value in row {
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{value:>6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
fn is_tile_value(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}
