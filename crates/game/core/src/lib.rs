//! Deterministic 2048 rules shared across clients.
//!
//! `game-core` defines the board ([`Grid`]), the move vocabulary
//! ([`Direction`]) and the slide/merge/spawn engine, and exposes them as pure
//! APIs that the runtime and tests can reuse without any display. All board
//! mutation flows through [`engine`], and randomness is always injected
//! through [`RngOracle`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::Direction;
pub use config::GameConfig;
pub use engine::{
    EmptyCells, GameEngine, MoveOutcome, SpawnedTile, compact_row_left, empty_cells,
    reverse_rows, slide, spawn_tile, transpose,
};
pub use env::{PcgRng, RngOracle};
pub use error::{GameError, GridError};
pub use state::{Grid, Position, Row, Tile};
