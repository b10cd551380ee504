//! High-level occurrences in a 2048 session.

use game_core::{MoveOutcome, SpawnedTile};

/// Events computed by the session after each state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The board was created and the opening tile placed.
    SessionStarted {
        seed: u64,
        spawned: Option<SpawnedTile>,
    },

    /// A move was applied to the board.
    MoveApplied { turn: u64, outcome: MoveOutcome },
}

impl GameEvent {
    /// Returns the tile spawned as part of this event, if any.
    pub fn spawned(&self) -> Option<SpawnedTile> {
        match self {
            GameEvent::SessionStarted { spawned, .. } => *spawned,
            GameEvent::MoveApplied { outcome, .. } => outcome.spawned,
        }
    }
}
