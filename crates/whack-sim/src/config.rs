//! Engine configuration.

use serde::{Deserialize, Serialize};

use whack_core::constants::LEVEL_DURATION_SECS;

/// Configuration for a new game loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same inputs give the same run. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Length of each level in seconds.
    pub level_duration_secs: u32,
    /// Log rejected commands at warn instead of debug.
    pub strict_commands: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            level_duration_secs: LEVEL_DURATION_SECS,
            strict_commands: false,
        }
    }
}

impl GameConfig {
    /// Deterministic config for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}
