//! Move execution for a 2048 board.
//!
//! The [`GameEngine`] is the authoritative reducer for a [`Grid`]. A turn is
//! always the same two steps: slide every tile in the requested direction,
//! then spawn one new tile. The pure building blocks live in [`ops`] and
//! [`spawn`] and are re-exported for callers that want them individually.

mod ops;
mod spawn;

pub use ops::{compact_left, compact_row_left, reverse_rows, slide, transpose};
pub use spawn::{EmptyCells, SpawnedTile, empty_cells, spawn_tile};

use crate::action::Direction;
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::Grid;

/// Complete outcome of one executed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,

    /// Whether the slide moved or merged anything.
    ///
    /// Informational only: a tile is spawned after every move, including
    /// moves that left the board as it was.
    pub changed: bool,

    /// Number of merges the slide performed.
    pub merges: u32,

    /// Tile inserted after the slide; `None` when the board was full.
    pub spawned: Option<SpawnedTile>,
}

/// Game engine that applies moves and spawns to a borrowed grid.
pub struct GameEngine<'a> {
    grid: &'a mut Grid,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given grid.
    pub fn new(grid: &'a mut Grid, config: &'a GameConfig) -> Self {
        Self { grid, config }
    }

    /// Places the opening tile of a game.
    pub fn seed<R>(&mut self, rng: &mut R) -> Option<SpawnedTile>
    where
        R: RngOracle + ?Sized,
    {
        spawn_tile(self.grid, rng, self.config)
    }

    /// Slides the board towards `direction` and then spawns a tile.
    pub fn execute<R>(&mut self, direction: Direction, rng: &mut R) -> MoveOutcome
    where
        R: RngOracle + ?Sized,
    {
        let before = *self.grid;
        let after = slide(&before, direction);

        // Each merge turns two occupied cells into one.
        let merges = (before.occupied() - after.occupied()) as u32;
        let changed = after != before;

        *self.grid = after;
        let spawned = spawn_tile(self.grid, rng, self.config);

        tracing::trace!(
            %direction,
            changed,
            merges,
            ?spawned,
            "move executed"
        );

        MoveOutcome {
            direction,
            changed,
            merges,
            spawned,
        }
    }
}
