//! Session configuration structures and loaders.
use std::env;

use game_core::GameConfig;

/// Configuration required to start a game session.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for the default random source; drawn from entropy when `None`.
    pub seed: Option<u64>,
    /// Identifier used to group log files; auto-generated when `None`.
    pub session_id: Option<String>,
    /// Maximum number of undrained events kept by the session.
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            session_id: None,
            event_buffer_size: 64,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TWENTY48_SEED` - Seed for tile spawning (default: random)
    /// - `TWENTY48_TWO_TILE_CHANCE` - Percent chance a spawn is a 2 (default: 90)
    /// - `TWENTY48_EVENT_BUFFER` - Undrained event capacity (default: 64)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("TWENTY48_SEED");

        // Out-of-range values are kept so that building the session reports them.
        if let Some(chance) = read_env::<u32>("TWENTY48_TWO_TILE_CHANCE") {
            config.game_config.two_tile_chance = chance;
        }

        if let Some(capacity) = read_env::<usize>("TWENTY48_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config.session_id = env::var("GAME_SESSION_ID").ok();

        config
    }

    /// Sets a fixed seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
