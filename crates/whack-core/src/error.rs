//! Errors surfaced by the game loop.
//!
//! None of these are fatal. The lenient command path logs and drops them.

use thiserror::Error;

use crate::enums::GamePhase;

/// Errors that can occur while driving the game loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Hit index outside the board.
    #[error("slot {slot} out of range (board has {slot_count} slots)")]
    InvalidSlot { slot: usize, slot_count: usize },

    /// Command not valid in the current phase.
    #[error("{command} is not valid during {phase}")]
    InvalidState {
        command: &'static str,
        phase: GamePhase,
    },

    /// Key-value store could not be read or written.
    #[error("settings store error: {0}")]
    Store(String),

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
