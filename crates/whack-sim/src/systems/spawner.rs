//! Spawn scheduler. Pops a target into a random vacant slot.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use whack_core::level::{level_config, LevelConfig};

use crate::board::Board;

/// A target placed by one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub slot: usize,
    pub generation: u64,
    /// Delay until the target expires on its own.
    pub expire_after_ms: u64,
}

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnOutcome {
    /// `None` when the board was full (back-off).
    pub spawned: Option<Spawned>,
    /// Delay until the next scheduler tick.
    pub next_tick_after_ms: u64,
}

/// Uniform delay in `[min_spawn_interval, max_spawn_interval]`.
pub fn next_interval(rng: &mut ChaCha8Rng, config: &LevelConfig) -> u64 {
    rng.gen_range(config.min_spawn_interval_ms..=config.max_spawn_interval_ms)
}

/// Run one scheduler tick for the given level.
///
/// The level config is read here, at tick time.
pub fn run(board: &mut Board, rng: &mut ChaCha8Rng, level: u32) -> SpawnOutcome {
    let config = level_config(level);
    let vacant = board.vacant_slots();

    let spawned = if vacant.is_empty() {
        None
    } else {
        let slot = vacant[rng.gen_range(0..vacant.len())];
        board.occupy(slot).map(|generation| Spawned {
            slot,
            generation,
            expire_after_ms: config.stay_duration_ms,
        })
    };

    SpawnOutcome {
        spawned,
        next_tick_after_ms: next_interval(rng, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use whack_core::constants::SLOT_COUNT;

    #[test]
    fn test_spawn_picks_vacant_slot() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut board = Board::new();
        for _ in 0..SLOT_COUNT {
            let before = board.vacant_slots();
            let outcome = run(&mut board, &mut rng, 1);
            let spawned = outcome.spawned.expect("board had room");
            assert!(before.contains(&spawned.slot));
            assert_eq!(spawned.expire_after_ms, 1000);
        }
        assert_eq!(board.occupied_count(), SLOT_COUNT);
    }

    #[test]
    fn test_full_board_backs_off() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut board = Board::new();
        for slot in 0..SLOT_COUNT {
            board.occupy(slot);
        }
        let outcome = run(&mut board, &mut rng, 1);
        assert!(outcome.spawned.is_none());
        assert!((500..=1500).contains(&outcome.next_tick_after_ms));
    }

    #[test]
    fn test_interval_within_level_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for level in [1, 2, 5, 10] {
            let cfg = level_config(level);
            for _ in 0..500 {
                let d = next_interval(&mut rng, &cfg);
                assert!(d >= cfg.min_spawn_interval_ms && d <= cfg.max_spawn_interval_ms);
            }
        }
    }

    #[test]
    fn test_stay_duration_follows_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut board = Board::new();
        let outcome = run(&mut board, &mut rng, 4);
        assert_eq!(outcome.spawned.unwrap().expire_after_ms, 700);
        assert!((350..=1050).contains(&outcome.next_tick_after_ms));
    }
}
