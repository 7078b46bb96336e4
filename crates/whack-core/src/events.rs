//! One-shot events emitted by the game loop for audio and visual feedback.
//!
//! These are things the presentation should not infer from state diffing.

use serde::{Deserialize, Serialize};

/// Visual / gameplay events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A target was struck (small confetti burst).
    Hit { slot: usize, points: u32, score: u32 },
    /// Level cleared (large confetti burst).
    LevelComplete { level: u32, score: u32 },
    /// Level failed.
    GameOver {
        level: u32,
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
}

/// Sound cues for the presentation's audio system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Hit sound effect.
    WhackSound,
    /// Start (or rewind and start) the looping background track.
    MusicStart,
    /// Pause the background track.
    MusicStop,
}
