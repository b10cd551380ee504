//! Common error infrastructure for game-core.
//!
//! The engine operations themselves are total: sliding and spawning never
//! fail on a well-formed grid. Errors only arise at the boundary where values
//! from outside the engine are turned into a [`Grid`](crate::Grid), which is
//! where [`GridError`] lives.
//!
//! Each failure mode is its own variant carrying the offending data, and every
//! error exposes a stable code for structured logs.

use crate::state::Position;

/// Common trait for all game-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejections produced while building a grid from raw values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("tile value {value} at {position} is not zero or a power of two >= 2")]
    InvalidTile { position: Position, value: u32 },

    #[error("tile value {value} at {position} exceeds the largest reachable tile {max}")]
    TileTooLarge {
        position: Position,
        value: u32,
        max: u32,
    },

    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
}

impl GameError for GridError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTile { .. } => "grid.invalid_tile",
            Self::TileTooLarge { .. } => "grid.tile_too_large",
            Self::OutOfBounds(_) => "grid.out_of_bounds",
        }
    }
}
