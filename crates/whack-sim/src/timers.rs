//! Pending timer intents, ordered by due time.
//!
//! Timers never mutate state themselves. When one comes due the engine pops
//! its intent and applies it through the same entry point as commands.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// What should happen when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerIntent {
    /// Run the spawn scheduler once.
    SpawnTick,
    /// A target's stay duration ran out.
    Expire { slot: usize, generation: u64 },
    /// Post-hit dwell is over.
    HitCleanup { slot: usize, generation: u64 },
    /// One second of the level timer elapsed.
    Countdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    intent: TimerIntent,
}

impl Ord for Scheduled {
    // Reversed so the BinaryHeap pops the earliest timer; ties go FIFO.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-queue of scheduled intents.
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, intent: TimerIntent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled {
            due_ms,
            seq,
            intent,
        });
    }

    /// Pop the earliest timer if it is due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, TimerIntent)> {
        if self.heap.peek()?.due_ms > now_ms {
            return None;
        }
        self.heap.pop().map(|s| (s.due_ms, s.intent))
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
