//! Session orchestrator and builder.
//!
//! A [`Session`] owns one board, its random source and the queue of events
//! the frontend has not consumed yet. Every move goes through
//! [`Session::apply`], which delegates to the [`GameEngine`] reducer.
use game_core::{Direction, GameEngine, GameError, Grid, MoveOutcome, PcgRng, RngOracle};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{EventQueue, GameEvent};

/// A single running game.
pub struct Session {
    config: RuntimeConfig,
    grid: Grid,
    rng: Box<dyn RngOracle>,
    seed: u64,
    moves: u64,
    events: EventQueue,
}

impl Session {
    /// Create a builder for configuring a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Slides the board towards `direction`, then spawns a tile.
    ///
    /// A tile is spawned even when the slide left the board unchanged.
    pub fn apply(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = GameEngine::new(&mut self.grid, &self.config.game_config)
            .execute(direction, self.rng.as_mut());
        self.moves += 1;

        tracing::debug!(
            turn = self.moves,
            %direction,
            changed = outcome.changed,
            merges = outcome.merges,
            max_tile = self.grid.max_tile(),
            "Move applied"
        );

        self.events.push(GameEvent::MoveApplied {
            turn: self.moves,
            outcome,
        });
        outcome
    }

    /// Removes and yields every event produced since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of moves applied so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Seed reported for this session.
    ///
    /// Only reproduces the game when the default generator was used.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("seed", &self.seed)
            .field("moves", &self.moves)
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    config: RuntimeConfig,
    rng: Option<Box<dyn RngOracle>>,
    grid: Option<Grid>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            rng: None,
            grid: None,
        }
    }

    /// Override session configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default PCG generator
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Resume from an existing board instead of a fresh one.
    ///
    /// No opening tile is spawned on a provided board.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Build the session
    pub fn build(self) -> Result<Session> {
        let config = self.config;
        validate(&config)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = self
            .rng
            .unwrap_or_else(|| Box::new(PcgRng::new(seed)) as Box<dyn RngOracle>);

        // Re-validate the board so resumed games cannot carry impossible tiles.
        let (grid, spawned) = match self.grid {
            Some(grid) => {
                let grid = Grid::from_rows(*grid.rows()).inspect_err(|err| {
                    tracing::warn!(code = err.error_code(), %err, "Rejected starting grid");
                })?;
                (grid, None)
            }
            None => {
                let mut grid = Grid::EMPTY;
                let spawned =
                    GameEngine::new(&mut grid, &config.game_config).seed(rng.as_mut());
                (grid, spawned)
            }
        };

        let mut events = EventQueue::new(config.event_buffer_size);
        events.push(GameEvent::SessionStarted { seed, spawned });

        tracing::info!(
            seed,
            two_tile_chance = config.game_config.two_tile_chance,
            resumed = spawned.is_none(),
            "Session started"
        );

        Ok(Session {
            config,
            grid,
            rng,
            seed,
            moves: 0,
            events,
        })
    }
}

fn validate(config: &RuntimeConfig) -> Result<()> {
    let chance = config.game_config.two_tile_chance;
    if chance > 100 {
        return Err(RuntimeError::InvalidConfig {
            field: "two_tile_chance",
            reason: format!("{chance} is not a percentage"),
        });
    }
    if config.event_buffer_size == 0 {
        return Err(RuntimeError::InvalidConfig {
            field: "event_buffer_size",
            reason: "must hold at least one event".to_owned(),
        });
    }
    Ok(())
}
