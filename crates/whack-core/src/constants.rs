//! Game constants and tuning parameters.

/// Number of slots on the board (3x3 grid).
pub const SLOT_COUNT: usize = 9;

/// Default length of one level in seconds.
pub const LEVEL_DURATION_SECS: u32 = 30;

/// Countdown resolution (ms).
pub const COUNTDOWN_INTERVAL_MS: u64 = 1_000;

// --- Scoring ---

/// Points awarded for each successful hit.
pub const POINTS_PER_HIT: u32 = 10;

/// Target score grows by this much per level.
pub const TARGET_SCORE_PER_LEVEL: u32 = 150;

// --- Difficulty ---

/// Spawn cadence speeds up by this fraction per level.
pub const SPEED_STEP_PER_LEVEL: f64 = 0.1;

/// Lower bound on the speed multiplier.
pub const SPEED_MULTIPLIER_FLOOR: f64 = 0.4;

/// Shortest delay between spawn ticks at level 1 (ms).
pub const BASE_MIN_SPAWN_INTERVAL_MS: f64 = 500.0;

/// Longest delay between spawn ticks at level 1 (ms).
pub const BASE_MAX_SPAWN_INTERVAL_MS: f64 = 1_500.0;

/// How long a target stays up at level 1 (ms).
pub const BASE_STAY_DURATION_MS: f64 = 1_000.0;

/// Dwell after a hit before the slot is cleared (ms).
pub const HIT_CLEANUP_MS: u64 = 200;

// --- Persistence ---

/// Key under which the high score is stored.
pub const HIGH_SCORE_KEY: &str = "whack-a-mole-highscore";
