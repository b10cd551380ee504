//! Terminal UI frontend for the 2048 game.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend takes ownership of a [`runtime::Session`] and:
//! - Maps key presses to moves and applies them to the session
//! - Turns session events into message-log entries
//! - Redraws the board and plays the move cue

mod app;
pub mod audio;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use input::{InputHandler, KeyAction};

// Re-export for convenience (used in the client binary)
pub use client_frontend_core::FrontendConfig;
