//! Event loop orchestrating session events, user input, and rendering.
//!
//! Each frame the loop drains pending terminal events. A move key is applied
//! to the session synchronously, the resulting events go through the
//! consumer, and the screen is redrawn before the cue plays.

use anyhow::Result;
use game_core::Position;
use runtime::Session;
use tokio::time::{self, Duration};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui};
use client_frontend_core::{AudioCue, EventConsumer, EventImpact};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the session for the lifetime of the UI.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) session: Session,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) cue: Box<dyn AudioCue>,
    pub(crate) cli_config: CliConfig,
    /// Cell filled by the latest spawn; highlighted on the board.
    pub(crate) last_spawn: Option<Position>,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        session: Session,
        consumer: C,
        cue: Box<dyn AudioCue>,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            session,
            input: InputHandler::new(),
            consumer,
            cue,
            cli_config,
            last_spawn: None,
        }
    }

    /// Runs until the player quits, then hands back the session and consumer.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<(Session, C)> {
        // Opening tile
        self.drain_session_events();
        self.render(terminal)?;

        let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frames.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            frames.tick().await;
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok((self.session, self.consumer))
    }

    /// Feeds every queued session event to the consumer.
    pub(crate) fn drain_session_events(&mut self) -> EventImpact {
        let Self {
            session,
            consumer,
            last_spawn,
            ..
        } = self;
        session
            .drain_events()
            .fold(EventImpact::none(), |impact, event| {
                *last_spawn = event.spawned().map(|tile| tile.position);
                impact.combine(consumer.on_event(&event))
            })
    }
}
