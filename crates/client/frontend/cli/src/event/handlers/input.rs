//! Keyboard input handling.

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::Direction;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Handles every terminal event queued since the last frame.
    ///
    /// Returns `true` once the player asked to quit.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            let quit = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_press(key, terminal)?
                }
                TermEvent::Resize(_, _) => {
                    self.render(terminal)?;
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text(format!(
                    "Quitting after {} moves",
                    self.session.moves()
                ));
                self.render(terminal)?;
                Ok(true)
            }
            KeyAction::Move(direction) => {
                self.apply_move(direction, terminal)?;
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    fn apply_move(&mut self, direction: Direction, terminal: &mut Tui) -> Result<()> {
        let outcome = self.session.apply(direction);
        if !outcome.changed {
            tracing::debug!(%direction, "Move left the board unchanged");
        }

        let impact = self.drain_session_events();
        if impact.requires_redraw {
            self.render(terminal)?;
        }
        if impact.play_cue {
            self.cue.play();
        }
        Ok(())
    }
}
