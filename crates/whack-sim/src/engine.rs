//! Game loop engine, the core of the game.
//!
//! `GameLoop` owns the board, round state, pending timers and the persistent
//! settings. Commands and timer intents both go through this one type, so no
//! callback ever touches the board on its own. Completely headless and driven
//! by an explicit clock, which keeps runs deterministic under test.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use whack_core::commands::PlayerCommand;
use whack_core::constants::{COUNTDOWN_INTERVAL_MS, SLOT_COUNT};
use whack_core::enums::GamePhase;
use whack_core::error::GameError;
use whack_core::events::{AudioEvent, GameEvent};
use whack_core::state::GameStateSnapshot;
use whack_core::types::{CharacterSkin, GameTime};

use crate::board::Board;
use crate::config::GameConfig;
use crate::settings::{KeyValueStore, PersistentSettings};
use crate::systems;
use crate::systems::countdown::CountdownOutcome;
use crate::systems::snapshot::RoundView;
use crate::timers::{TimerIntent, TimerQueue};

/// The game loop. Owns all round state.
pub struct GameLoop {
    config: GameConfig,
    time: GameTime,
    phase: GamePhase,
    level: u32,
    score: u32,
    time_left: u32,
    skin: Option<CharacterSkin>,
    muted: bool,
    board: Board,
    timers: TimerQueue,
    rng: ChaCha8Rng,
    settings: PersistentSettings,
    store: Box<dyn KeyValueStore>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
    revision: u64,
}

impl GameLoop {
    /// Create a game loop, reading the high score from `store`.
    pub fn new(config: GameConfig, store: Box<dyn KeyValueStore>) -> Self {
        let settings = PersistentSettings::load(&*store);
        Self::with_settings(config, settings, store)
    }

    /// Create a game loop with settings that were already loaded.
    pub fn with_settings(
        config: GameConfig,
        settings: PersistentSettings,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let time_left = config.level_duration_secs;
        Self {
            config,
            time: GameTime::default(),
            phase: GamePhase::default(),
            level: 1,
            score: 0,
            time_left,
            skin: None,
            muted: false,
            board: Board::new(),
            timers: TimerQueue::new(),
            rng,
            settings,
            store,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            audio_events: Vec::new(),
            revision: 0,
        }
    }

    /// Queue a player command for the next `advance`.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run the clock forward by `elapsed_ms`, then apply queued commands.
    ///
    /// Commands were received somewhere inside the elapsed window, so they
    /// run at its end, after every timer that came due within it. Timers the
    /// commands arm for that same instant fire before returning. Returns the
    /// resulting snapshot with all events raised since the previous call.
    pub fn advance(&mut self, elapsed_ms: u64) -> GameStateSnapshot {
        let until = self.time.after(elapsed_ms);
        self.fire_due(until);
        self.time.now_ms = until;

        self.process_commands();
        self.fire_due(until);

        let events = std::mem::take(&mut self.events);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(self.round_view(), &self.board, events, audio_events)
    }

    /// Apply one command immediately.
    ///
    /// Hits on empty or already-struck slots, and hits outside `Playing`, are
    /// accepted and do nothing. Out-of-range slots and commands that are not
    /// valid in the current phase are rejected.
    pub fn apply(&mut self, command: PlayerCommand) -> Result<(), GameError> {
        match command {
            PlayerCommand::Start { skin } => {
                self.require_phase("Start", GamePhase::MainMenu)?;
                log::info!("run started with {:?}", skin.kind);
                self.skin = Some(skin);
                self.level = 1;
                self.score = 0;
                self.enter_playing();
            }
            PlayerCommand::Hit { slot } => {
                if slot >= SLOT_COUNT {
                    return Err(GameError::InvalidSlot {
                        slot,
                        slot_count: SLOT_COUNT,
                    });
                }
                if self.phase == GamePhase::Playing {
                    self.resolve_hit(slot);
                }
            }
            PlayerCommand::AdvanceLevel => {
                self.require_phase("AdvanceLevel", GamePhase::LevelComplete)?;
                self.level += 1;
                self.enter_playing();
            }
            PlayerCommand::Restart => {
                self.require_phase("Restart", GamePhase::GameOver)?;
                self.level = 1;
                self.score = 0;
                self.enter_playing();
            }
            PlayerCommand::Exit => self.exit(),
            PlayerCommand::SetMuted { muted } => self.set_muted(muted),
        }
        Ok(())
    }

    /// Current state without draining pending events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(self.round_view(), &self.board, Vec::new(), Vec::new())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn high_score(&self) -> u32 {
        self.settings.high_score
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> PersistentSettings {
        self.settings
    }

    /// Number of timers still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Hand the settings back, e.g. when tearing the loop down.
    pub fn into_settings(self) -> PersistentSettings {
        self.settings
    }

    /// Process all queued commands. Rejected commands are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            let name = command.name();
            if let Err(e) = self.apply(command) {
                if self.config.strict_commands {
                    log::warn!("rejected {name}: {e}");
                } else {
                    log::debug!("ignored {name}: {e}");
                }
            }
        }
    }

    fn require_phase(&self, command: &'static str, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                command,
                phase: self.phase,
            })
        }
    }

    /// Fire every timer due at or before `until`, in due order.
    fn fire_due(&mut self, until: u64) {
        while let Some((due_ms, intent)) = self.timers.pop_due(until) {
            self.time.now_ms = due_ms.max(self.time.now_ms);
            self.fire(intent);
        }
    }

    /// Apply one timer intent.
    fn fire(&mut self, intent: TimerIntent) {
        match intent {
            TimerIntent::SpawnTick => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                let outcome = systems::spawner::run(&mut self.board, &mut self.rng, self.level);
                if let Some(spawned) = outcome.spawned {
                    self.timers.schedule(
                        self.time.after(spawned.expire_after_ms),
                        TimerIntent::Expire {
                            slot: spawned.slot,
                            generation: spawned.generation,
                        },
                    );
                    self.touch();
                }
                self.timers
                    .schedule(self.time.after(outcome.next_tick_after_ms), TimerIntent::SpawnTick);
            }
            TimerIntent::Expire { slot, generation }
            | TimerIntent::HitCleanup { slot, generation } => {
                if self.board.clear(slot, generation) {
                    self.touch();
                }
            }
            TimerIntent::Countdown => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                self.touch();
                match systems::countdown::run(&mut self.time_left) {
                    CountdownOutcome::Running { .. } => {
                        self.timers
                            .schedule(self.time.after(COUNTDOWN_INTERVAL_MS), TimerIntent::Countdown);
                    }
                    CountdownOutcome::Expired => self.finish_level(),
                }
            }
        }
    }

    fn resolve_hit(&mut self, slot: usize) {
        let Some(strike) = systems::hit::run(&mut self.board, slot) else {
            return;
        };
        self.score += strike.points;
        self.timers.schedule(
            self.time.after(strike.cleanup_after_ms),
            TimerIntent::HitCleanup {
                slot: strike.slot,
                generation: strike.generation,
            },
        );
        self.events.push(GameEvent::Hit {
            slot,
            points: strike.points,
            score: self.score,
        });
        if !self.muted {
            self.audio_events.push(AudioEvent::WhackSound);
        }
        self.touch();
    }

    /// Enter `Playing` with a clean board and a full timer.
    fn enter_playing(&mut self) {
        self.timers.clear();
        self.board.reset();
        self.time_left = self.config.level_duration_secs;
        self.phase = GamePhase::Playing;
        log::debug!("level {} started", self.level);

        self.timers.schedule(self.time.now_ms, TimerIntent::SpawnTick);
        self.timers
            .schedule(self.time.after(COUNTDOWN_INTERVAL_MS), TimerIntent::Countdown);
        if !self.muted {
            self.audio_events.push(AudioEvent::MusicStart);
        }
        self.touch();
    }

    /// Leave `Playing`. All outstanding timers are cancelled first.
    fn leave_playing(&mut self, next: GamePhase) {
        self.timers.clear();
        if self.phase == GamePhase::Playing && !self.muted {
            self.audio_events.push(AudioEvent::MusicStop);
        }
        log::debug!("phase {} -> {}", self.phase, next);
        self.phase = next;
        self.touch();
    }

    fn finish_level(&mut self) {
        let next = systems::countdown::resolve(self.level, self.score);
        self.leave_playing(next);
        match next {
            GamePhase::LevelComplete => {
                log::info!("level {} complete with {}", self.level, self.score);
                self.events.push(GameEvent::LevelComplete {
                    level: self.level,
                    score: self.score,
                });
            }
            _ => {
                let new_high_score = self.settings.record_score(self.score, &mut *self.store);
                if new_high_score {
                    log::info!("new high score {}", self.score);
                }
                log::info!("game over on level {} with {}", self.level, self.score);
                self.events.push(GameEvent::GameOver {
                    level: self.level,
                    score: self.score,
                    high_score: self.settings.high_score,
                    new_high_score,
                });
            }
        }
    }

    fn exit(&mut self) {
        if self.phase == GamePhase::MainMenu {
            return;
        }
        self.leave_playing(GamePhase::MainMenu);
        self.board.reset();
        self.skin = None;
        self.level = 1;
        self.score = 0;
        self.time_left = self.config.level_duration_secs;
    }

    fn set_muted(&mut self, muted: bool) {
        if self.muted == muted {
            return;
        }
        self.muted = muted;
        if self.phase == GamePhase::Playing {
            self.audio_events.push(if muted {
                AudioEvent::MusicStop
            } else {
                AudioEvent::MusicStart
            });
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn round_view(&self) -> RoundView<'_> {
        RoundView {
            revision: self.revision,
            phase: self.phase,
            level: self.level,
            score: self.score,
            high_score: self.settings.high_score,
            time_left: self.time_left,
            skin: self.skin.as_ref(),
            muted: self.muted,
        }
    }
}
