//! Events emitted by a running session.
//!
//! The session pushes events into a bounded queue as moves are applied, and
//! the frontend drains them once per frame.

mod game_event;
mod queue;

pub use game_event::GameEvent;
pub use queue::EventQueue;
