//! Player commands sent from the presentation layer to the game loop.
//!
//! Commands are queued and applied at the start of the next `advance`.

use serde::{Deserialize, Serialize};

use crate::types::CharacterSkin;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a new run at level 1 with the chosen skin.
    Start {
        #[serde(default)]
        skin: CharacterSkin,
    },
    /// Strike the target in a slot.
    Hit { slot: usize },
    /// Continue to the next level after a level is cleared.
    AdvanceLevel,
    /// Start over at level 1 after a game over.
    Restart,
    /// Tear down the run and return to the main menu.
    Exit,
    /// Toggle sound output.
    SetMuted { muted: bool },
}

impl PlayerCommand {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerCommand::Start { .. } => "Start",
            PlayerCommand::Hit { .. } => "Hit",
            PlayerCommand::AdvanceLevel => "AdvanceLevel",
            PlayerCommand::Restart => "Restart",
            PlayerCommand::Exit => "Exit",
            PlayerCommand::SetMuted { .. } => "SetMuted",
        }
    }
}
