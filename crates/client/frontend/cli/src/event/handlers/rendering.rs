//! Rendering handlers.

use anyhow::{Context, Result};
use client_frontend_core::{BoardView, EventConsumer};

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Render current session state.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let message_panel_height = self.cli_config.ui.message_panel_height;
        let view = BoardView::from_session(
            &self.session,
            self.last_spawn,
            self.consumer.message_log(),
            usize::from(message_panel_height),
        );

        let ctx = ui::RenderContext {
            view: &view,
            message_panel_height,
        };

        terminal
            .draw(|frame| ui::draw(frame, &ctx))
            .context("failed to draw frame")?;
        Ok(())
    }
}
