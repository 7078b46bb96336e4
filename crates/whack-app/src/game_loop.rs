//! Game loop thread. Advances the engine in real time and publishes snapshots.
//!
//! The engine is moved into the thread and never shared. Commands arrive via
//! an `mpsc` channel and are queued into the engine at the top of each tick.
//! A snapshot is published whenever its revision changes, and the latest one
//! is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use whack_core::state::GameStateSnapshot;
use whack_sim::GameLoop;

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Receives snapshots from the game loop thread.
pub trait SnapshotSink: Send {
    fn publish(&mut self, snapshot: &GameStateSnapshot);
}

impl<F> SnapshotSink for F
where
    F: FnMut(&GameStateSnapshot) + Send,
{
    fn publish(&mut self, snapshot: &GameStateSnapshot) {
        self(snapshot)
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: GameLoop,
    sink: Box<dyn SnapshotSink>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    tick_duration: Duration,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = thread::Builder::new()
        .name("whack-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, sink, cmd_rx, &latest_snapshot, tick_duration);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: GameLoop,
    mut sink: Box<dyn SnapshotSink>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    tick_duration: Duration,
) {
    let initial = engine.snapshot();
    sink.publish(&initial);
    let mut last_revision = initial.revision;

    let mut clock = Instant::now();
    let mut next_tick_time = clock;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    log::debug!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance by whole elapsed milliseconds; the remainder carries over
        let elapsed_ms = clock.elapsed().as_millis() as u64;
        clock += Duration::from_millis(elapsed_ms);
        let snapshot = engine.advance(elapsed_ms);

        // 3. Publish only when something changed
        if snapshot.revision != last_revision {
            last_revision = snapshot.revision;
            sink.publish(&snapshot);
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
