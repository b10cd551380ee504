//! Top-level client wiring a game session to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Session (board, random source, events)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The session is built independently, then handed to the frontend, which
//! owns it until the player quits.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::Session;

/// Top-level client container.
pub struct Client {
    session: Session,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client.
    ///
    /// Transfers the session to the frontend and returns when it exits.
    ///
    /// # Errors
    ///
    /// Returns any fatal error reported by the frontend.
    pub async fn run(self) -> Result<()> {
        let Client {
            session,
            mut frontend,
        } = self;

        tracing::info!(seed = session.seed(), "Handing session to frontend");
        frontend.run(session).await?;
        tracing::info!("Frontend exited");
        Ok(())
    }
}
