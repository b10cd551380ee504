//! Player intents understood by the engine.
//!
//! A 2048 turn has exactly one kind of input: the direction in which every
//! tile slides. Key bindings and other input sources live in the frontends
//! and translate into [`Direction`].
mod direction;

pub use direction::Direction;
