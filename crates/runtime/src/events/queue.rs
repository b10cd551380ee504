//! Bounded FIFO of undrained events.

use std::collections::VecDeque;

use super::GameEvent;

/// Keeps at most `capacity` events; the oldest is dropped when full.
#[derive(Debug, Clone)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
    capacity: usize,
    dropped: u64,
}

impl EventQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.dropped += 1;
            tracing::warn!(
                capacity = self.capacity,
                dropped = self.dropped,
                "Event queue full, dropping oldest event"
            );
        }
        self.events.push_back(event);
    }

    /// Removes and yields every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
