//! Random tile insertion.
use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{Grid, Position, Tile};

/// Coordinates of every empty cell, in row-major order.
pub type EmptyCells = ArrayVec<Position, { GameConfig::CELL_COUNT }>;

/// A tile placed by [`spawn_tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnedTile {
    pub position: Position,
    pub value: Tile,
}

/// Collects every cell holding 0.
pub fn empty_cells(grid: &Grid) -> EmptyCells {
    grid.cells()
        .filter(|&(_, value)| value == 0)
        .map(|(position, _)| position)
        .collect()
}

/// Places a 2 or a 4 on a uniformly chosen empty cell.
///
/// The value is a 2 with probability `config.two_tile_chance` percent.
/// A full board is left untouched and `None` is returned; that is not an error.
pub fn spawn_tile<R>(grid: &mut Grid, rng: &mut R, config: &GameConfig) -> Option<SpawnedTile>
where
    R: RngOracle + ?Sized,
{
    let empty = empty_cells(grid);
    if empty.is_empty() {
        return None;
    }

    let position = empty[rng.below(empty.len() as u32) as usize];
    let value = if rng.roll_d100() <= config.two_tile_chance {
        GameConfig::SMALL_TILE
    } else {
        GameConfig::LARGE_TILE
    };

    grid.set(position, value).ok()?;
    Some(SpawnedTile { position, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    /// Replays a fixed list of values, repeating the last one.
    struct ScriptedRng {
        values: Vec<u32>,
        cursor: usize,
    }

    impl ScriptedRng {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                cursor: 0,
            }
        }
    }

    impl RngOracle for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.cursor.min(self.values.len() - 1)];
            self.cursor += 1;
            value
        }
    }

    fn full_grid() -> Grid {
        Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap()
    }

    #[test]
    fn empty_cells_lists_zeros_row_major() {
        let grid = Grid::from_rows([[2, 0, 2, 2], [2; 4], [2; 4], [2, 2, 2, 0]]).unwrap();
        let cells = empty_cells(&grid);
        assert_eq!(
            cells.as_slice(),
            &[Position::new(0, 1), Position::new(3, 3)]
        );
        assert_eq!(empty_cells(&Grid::EMPTY).len(), GameConfig::CELL_COUNT);
    }

    #[test]
    fn spawn_on_full_grid_is_noop() {
        let mut grid = full_grid();
        let before = grid;
        let mut rng = PcgRng::new(1);
        assert_eq!(spawn_tile(&mut grid, &mut rng, &GameConfig::default()), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn spawn_uses_rng_for_cell_and_value() {
        let mut grid = Grid::EMPTY;
        // Top half of the u32 range picks index 8 of 16 -> (2, 0).
        // A d100 roll of 95 is above the 90% threshold -> 4.
        let mut rng = ScriptedRng::new(&[1 << 31, 94]);
        let spawned = spawn_tile(&mut grid, &mut rng, &GameConfig::default()).unwrap();
        assert_eq!(spawned.position, Position::new(2, 0));
        assert_eq!(spawned.value, 4);
        assert_eq!(grid.get(Position::new(2, 0)), Some(4));
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn spawn_fills_the_only_empty_cell() {
        let mut grid = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 0, 4],
            [4, 2, 4, 2],
        ])
        .unwrap();
        let mut rng = PcgRng::new(3);
        let spawned = spawn_tile(&mut grid, &mut rng, &GameConfig::default()).unwrap();
        assert_eq!(spawned.position, Position::new(2, 2));
        assert!(grid.is_full());
    }

    #[test]
    fn two_tile_chance_bounds_are_respected() {
        let always_two = GameConfig::with_two_tile_chance(100);
        let always_four = GameConfig::with_two_tile_chance(0);
        let mut rng = PcgRng::new(11);
        for _ in 0..50 {
            let mut grid = Grid::EMPTY;
            let two = spawn_tile(&mut grid, &mut rng, &always_two).unwrap();
            assert_eq!(two.value, 2);
            let four = spawn_tile(&mut grid, &mut rng, &always_four).unwrap();
            assert_eq!(four.value, 4);
            assert_eq!(grid.occupied(), 2);
        }
        assert_eq!(GameConfig::with_two_tile_chance(250).two_tile_chance, 100);
    }
}
