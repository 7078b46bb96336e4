//! Snapshot builder. Collects engine state into a `GameStateSnapshot`.

use whack_core::enums::GamePhase;
use whack_core::events::{AudioEvent, GameEvent};
use whack_core::level::target_score;
use whack_core::state::GameStateSnapshot;
use whack_core::types::CharacterSkin;

use crate::board::Board;

/// Round state read by the snapshot builder.
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub revision: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub time_left: u32,
    pub skin: Option<&'a CharacterSkin>,
    pub muted: bool,
}

/// Build a snapshot of the current state, attaching the drained events.
pub fn build_snapshot(
    round: RoundView<'_>,
    board: &Board,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let in_run = round.phase != GamePhase::MainMenu;
    GameStateSnapshot {
        revision: round.revision,
        phase: round.phase,
        level: round.level,
        target_score: if in_run { target_score(round.level) } else { 0 },
        score: round.score,
        high_score: round.high_score,
        time_left: round.time_left,
        board: board.slots().to_vec(),
        skin: round.skin.cloned(),
        muted: round.muted,
        music_playing: round.phase == GamePhase::Playing && !round.muted,
        events,
        audio_events,
    }
}
