//! Unified error types surfaced by the runtime API.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("invalid starting board")]
    InvalidGrid(#[from] game_core::GridError),
}
