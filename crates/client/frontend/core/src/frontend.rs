//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Session;

/// Frontend abstraction for UI layers.
///
/// A frontend takes ownership of the [`Session`] for as long as the player is
/// playing and drives it with one move per accepted key.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// Returns once the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, session: Session) -> Result<()>;
}
