//! Session orchestration for a 2048 game.
//!
//! This crate wraps the pure rules in `game-core` with the state a running
//! game needs: a seeded random source, a move counter and a queue of events
//! for the frontend. Consumers build a [`Session`] through
//! [`Session::builder`] and drive it one [`Direction`](game_core::Direction)
//! at a time.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and builder
//! - [`config`] loads session settings from the environment
//! - [`events`] carries what happened to the frontend
pub mod config;
pub mod error;
pub mod events;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{EventQueue, GameEvent};
pub use session::{Session, SessionBuilder};
