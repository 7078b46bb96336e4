//! Hit resolution.

use whack_core::constants::{HIT_CLEANUP_MS, POINTS_PER_HIT};

use crate::board::Board;

/// A successful strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub slot: usize,
    pub generation: u64,
    pub points: u32,
    pub cleanup_after_ms: u64,
}

/// Try to strike a slot. `None` means nothing was there to hit.
///
/// The caller has already checked the phase and the index range.
pub fn run(board: &mut Board, slot: usize) -> Option<Strike> {
    if !board.strike(slot) {
        return None;
    }
    Some(Strike {
        slot,
        generation: board.generation(slot),
        points: POINTS_PER_HIT,
        cleanup_after_ms: HIT_CLEANUP_MS,
    })
}
