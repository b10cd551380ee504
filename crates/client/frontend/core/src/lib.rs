//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, event handling, the tile palette, audio cues and
//! view-model types that both CLI and future graphical clients can reuse.
pub mod audio;
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod palette;
pub mod view_model;

pub use audio::{AudioCue, SilentCue, ToneSpec};
pub use config::{AudioConfig, AudioMode, FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use palette::{TileColor, tile_color};
pub use view_model::{BoardView, CellView, PresentationMapper};
