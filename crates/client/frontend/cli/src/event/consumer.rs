//! Maintains the CLI message log in response to session events.
use runtime::GameEvent;

use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    format::describe_event,
    message::MessageLog,
};

pub struct CliEventConsumer {
    log: MessageLog,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact {
        self.log.push(describe_event(event));

        match event {
            GameEvent::SessionStarted { .. } => EventImpact::redraw(),
            GameEvent::MoveApplied { .. } => EventImpact::moved(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Direction, MoveOutcome, Position, SpawnedTile};

    #[test]
    fn moves_request_redraw_and_cue() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));
        let spawned = SpawnedTile {
            position: Position::new(3, 1),
            value: 2,
        };

        let impact = consumer.on_event(&GameEvent::MoveApplied {
            turn: 1,
            outcome: MoveOutcome {
                direction: Direction::Right,
                changed: true,
                merges: 0,
                spawned: Some(spawned),
            },
        });

        assert_eq!(impact, EventImpact::moved());
        let entry = consumer.message_log().iter().next().unwrap();
        assert_eq!(entry.text, "Right: slid, 2 at (3, 1)");
        assert_eq!(entry.turn, Some(1));
    }

    #[test]
    fn session_start_only_redraws() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));
        let impact = consumer.on_event(&GameEvent::SessionStarted {
            seed: 1,
            spawned: None,
        });

        assert_eq!(impact, EventImpact::redraw());
        let log = consumer.take_message_log();
        assert_eq!(log.iter().next().unwrap().text, "Resumed game (seed 1)");
    }
}
