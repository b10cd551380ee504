//! 2048 game client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Session (board and rules) via `Session::builder`
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//! - `audio`: Play the move tone through the sound card instead of the bell
//!
//! # Examples
//!
//! ```bash
//! # Terminal bell cue
//! cargo run -p twenty48-client
//!
//! # Synthesized tone
//! cargo run -p twenty48-client --features audio
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use runtime::{RuntimeConfig, Session};
    use twenty48_client::Client;

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on exit
    let _log_guard = logging::setup_logging(runtime_config.session_id.as_deref())?;

    tracing::info!("Starting 2048 client");
    tracing::info!("Session ID: {:?}", runtime_config.session_id);
    tracing::info!("Audio cue: {}", frontend_config.audio.mode);

    // 3. Build Session (independent layer)
    let session = Session::builder()
        .config(runtime_config)
        .build()
        .context("failed to start game session")?;

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().session(session).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
