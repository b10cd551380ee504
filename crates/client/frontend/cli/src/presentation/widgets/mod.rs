//! Widgets composing the terminal UI.
//!
//! Each widget is a pure render function over view-model data.
pub mod board;
pub mod footer;
pub mod header;
pub mod messages;
