//! The slot board. Only the engine mutates it.

use whack_core::constants::SLOT_COUNT;
use whack_core::types::SlotState;

/// Fixed array of slots plus a per-slot occupancy generation.
///
/// Every spawn bumps the slot's generation; expiry and hit cleanup carry the
/// generation they were scheduled for and do nothing if it has moved on.
#[derive(Debug, Clone, Default)]
pub struct Board {
    slots: [SlotState; SLOT_COUNT],
    generations: [u64; SLOT_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every slot. Generations keep counting so stale timers stay stale.
    pub fn reset(&mut self) {
        self.slots = [SlotState::default(); SLOT_COUNT];
    }

    /// True when no slot holds a target.
    pub fn is_clear(&self) -> bool {
        self.occupied_count() == 0
    }

    pub fn slot(&self, index: usize) -> Option<&SlotState> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[SlotState] {
        &self.slots
    }

    pub fn generation(&self, index: usize) -> u64 {
        self.generations[index]
    }

    /// Indices of slots with no target.
    pub fn vacant_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.occupied)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.occupied).count()
    }

    /// Put a target in a vacant slot. Returns the new generation, or `None`
    /// if the slot was already occupied.
    pub fn occupy(&mut self, index: usize) -> Option<u64> {
        let slot = &mut self.slots[index];
        if slot.occupied {
            return None;
        }
        slot.occupied = true;
        slot.struck = false;
        self.generations[index] += 1;
        Some(self.generations[index])
    }

    /// Mark a showing target as struck. Returns false if there was nothing to hit.
    pub fn strike(&mut self, index: usize) -> bool {
        let slot = &mut self.slots[index];
        if !slot.is_hittable() {
            return false;
        }
        slot.struck = true;
        true
    }

    /// Clear both flags if the slot still holds the given occupancy.
    /// Returns true if anything changed.
    pub fn clear(&mut self, index: usize, generation: u64) -> bool {
        if self.generations[index] != generation {
            return false;
        }
        let slot = &mut self.slots[index];
        if !slot.occupied && !slot.struck {
            return false;
        }
        *slot = SlotState::default();
        true
    }
}
