/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Percent chance (0..=100) that a spawned tile is a 2 rather than a 4.
    pub two_tile_chance: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Side length of the square board.
    pub const GRID_SIZE: usize = 4;
    /// Number of cells on the board.
    pub const CELL_COUNT: usize = Self::GRID_SIZE * Self::GRID_SIZE;

    /// Value of the common spawned tile.
    pub const SMALL_TILE: u32 = 2;
    /// Value of the rare spawned tile.
    pub const LARGE_TILE: u32 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TWO_TILE_CHANCE: u32 = 90;

    pub fn new() -> Self {
        Self {
            two_tile_chance: Self::DEFAULT_TWO_TILE_CHANCE,
        }
    }

    /// Creates a config with a custom 2-vs-4 split, clamped to a percentage.
    pub fn with_two_tile_chance(two_tile_chance: u32) -> Self {
        Self {
            two_tile_chance: two_tile_chance.min(100),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
