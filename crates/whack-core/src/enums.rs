//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run in progress; waiting for a start command.
    #[default]
    MainMenu,
    /// Level timer running, targets spawning.
    Playing,
    /// Level cleared, waiting for the player to advance.
    LevelComplete,
    /// Level failed, waiting for the player to restart.
    GameOver,
}

impl GamePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::MainMenu => "MainMenu",
            GamePhase::Playing => "Playing",
            GamePhase::LevelComplete => "LevelComplete",
            GamePhase::GameOver => "GameOver",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character shown popping out of the slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterKind {
    #[default]
    Mole,
    Rabbit,
    Bear,
    /// User-supplied picture.
    Custom,
}
