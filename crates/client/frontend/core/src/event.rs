//! Utilities for reacting to session events inside UI layers.
use runtime::GameEvent;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    pub play_cue: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            play_cue: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            play_cue: false,
        }
    }

    /// Redraw and play the move cue.
    pub const fn moved() -> Self {
        Self {
            requires_redraw: true,
            play_cue: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            play_cue: self.play_cue || other.play_cue,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}
