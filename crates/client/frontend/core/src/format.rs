//! Human-readable text for session events.
use game_core::{MoveOutcome, SpawnedTile};
use runtime::GameEvent;

use crate::message::{MessageEntry, MessageLevel};

/// Describes an event as a message-log entry.
pub fn describe_event(event: &GameEvent) -> MessageEntry {
    match event {
        GameEvent::SessionStarted { seed, spawned } => {
            let text = match spawned {
                Some(tile) => format!("New game (seed {seed}), {}", describe_spawn(tile)),
                None => format!("Resumed game (seed {seed})"),
            };
            MessageEntry::new(text, None, MessageLevel::Info)
        }
        GameEvent::MoveApplied { turn, outcome } => {
            let level = if outcome.spawned.is_none() {
                MessageLevel::Warning
            } else {
                MessageLevel::Info
            };
            MessageEntry::new(describe_move(outcome), Some(*turn), level)
        }
    }
}

fn describe_move(outcome: &MoveOutcome) -> String {
    let slide = match (outcome.changed, outcome.merges) {
        (false, _) => "nothing moved".to_owned(),
        (true, 0) => "slid".to_owned(),
        (true, 1) => "1 merge".to_owned(),
        (true, merges) => format!("{merges} merges"),
    };
    let spawn = outcome
        .spawned
        .as_ref()
        .map_or_else(|| "board full".to_owned(), describe_spawn);
    format!("{}: {slide}, {spawn}", outcome.direction)
}

fn describe_spawn(tile: &SpawnedTile) -> String {
    format!("{} at {}", tile.value, tile.position)
}
