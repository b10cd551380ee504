//! Glue code tying the session and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Session;

use crate::audio::build_cue;
use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, message::MessageLog};

/// Terminal frontend driven by crossterm input and drawn with ratatui.
#[derive(Clone, Debug, Default)]
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, session: Session) -> Result<()> {
        tracing::info!("CLI client starting...");

        // Opened before raw mode so device errors never garble the screen.
        let cue = build_cue(&self.frontend_config.audio);

        let messages = MessageLog::new(self.frontend_config.messages.capacity);
        let consumer = CliEventConsumer::new(messages);
        let event_loop = EventLoop::new(session, consumer, cue, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard::new();

        let (session, _consumer) = event_loop.run(&mut terminal).await?;

        guard.finish()?;
        tracing::info!(
            moves = session.moves(),
            max_tile = session.grid().max_tile(),
            "CLI client exiting"
        );

        Ok(())
    }
}
