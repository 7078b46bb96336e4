//! Game state snapshot: the complete visible state sent to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::{AudioEvent, GameEvent};
use crate::types::{CharacterSkin, SlotState};

/// Complete game state published after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    /// Bumped on every state change; equal revisions mean equal state.
    pub revision: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub target_score: u32,
    pub score: u32,
    pub high_score: u32,
    /// Seconds left in the current level.
    pub time_left: u32,
    pub board: Vec<SlotState>,
    /// `None` in the main menu.
    pub skin: Option<CharacterSkin>,
    pub muted: bool,
    /// Whether background music should be playing.
    pub music_playing: bool,
    pub events: Vec<GameEvent>,
    pub audio_events: Vec<AudioEvent>,
}

impl GameStateSnapshot {
    /// Number of slots currently showing a target.
    pub fn occupied_count(&self) -> usize {
        self.board.iter().filter(|s| s.occupied).count()
    }
}
