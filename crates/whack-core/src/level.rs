//! Per-level difficulty derived from the level number.
//!
//! Always call [`level_config`] at the moment a decision is made. The level
//! can change between two scheduled spawn ticks, so a captured config would
//! apply the wrong difficulty after a transition.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Difficulty parameters for one level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level: u32,
    /// Score needed at timeout to clear the level.
    pub target_score: u32,
    /// Scale applied to all base timings, never below the floor.
    pub speed_multiplier: f64,
    pub min_spawn_interval_ms: u64,
    pub max_spawn_interval_ms: u64,
    /// How long a spawned target stays before expiring.
    pub stay_duration_ms: u64,
}

/// Speed multiplier for a level: `max(0.4, 1 - (level - 1) * 0.1)`.
pub fn speed_multiplier(level: u32) -> f64 {
    let level = level.max(1);
    (1.0 - f64::from(level - 1) * SPEED_STEP_PER_LEVEL).max(SPEED_MULTIPLIER_FLOOR)
}

/// Score needed to clear a level.
pub fn target_score(level: u32) -> u32 {
    level.max(1).saturating_mul(TARGET_SCORE_PER_LEVEL)
}

/// Build the difficulty config for a level. Level 0 is treated as level 1.
pub fn level_config(level: u32) -> LevelConfig {
    let level = level.max(1);
    let speed = speed_multiplier(level);
    LevelConfig {
        level,
        target_score: target_score(level),
        speed_multiplier: speed,
        min_spawn_interval_ms: scaled_ms(BASE_MIN_SPAWN_INTERVAL_MS, speed),
        max_spawn_interval_ms: scaled_ms(BASE_MAX_SPAWN_INTERVAL_MS, speed),
        stay_duration_ms: scaled_ms(BASE_STAY_DURATION_MS, speed),
    }
}

fn scaled_ms(base: f64, speed: f64) -> u64 {
    (base * speed).round() as u64
}
