//! Level countdown and the win/lose decision at time zero.

use whack_core::enums::GamePhase;
use whack_core::level::target_score;

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Running { time_left: u32 },
    Expired,
}

/// Decrement the timer by one second.
pub fn run(time_left: &mut u32) -> CountdownOutcome {
    if *time_left <= 1 {
        *time_left = 0;
        CountdownOutcome::Expired
    } else {
        *time_left -= 1;
        CountdownOutcome::Running {
            time_left: *time_left,
        }
    }
}

/// Phase to enter once the level timer has run out.
pub fn resolve(level: u32, score: u32) -> GamePhase {
    if score >= target_score(level) {
        GamePhase::LevelComplete
    } else {
        GamePhase::GameOver
    }
}
