//! IPC handlers between the presentation process and the game loop thread.
//!
//! The wire format is JSON lines: one tagged `PlayerCommand` per input line,
//! one `GameStateSnapshot` per output line.

use std::io::Write;
use std::time::Duration;

use whack_core::commands::PlayerCommand;
use whack_core::state::GameStateSnapshot;
use whack_sim::GameLoop;

use crate::error::AppError;
use crate::game_loop::{self, SnapshotSink};
use crate::state::{AppState, GameLoopCommand};

/// Start the game loop thread. Fails if one is already running.
pub fn start_game_loop(
    state: &AppState,
    engine: GameLoop,
    sink: Box<dyn SnapshotSink>,
    tick_duration: Duration,
) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(engine, sink, state.latest_snapshot.clone(), tick_duration)?;

    *state.command_tx.lock().map_err(|_| AppError::LockPoisoned)? = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
    *running = true;
    Ok(())
}

/// Forward a player command to the game loop.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotRunning),
    }
}

/// Latest snapshot, for polling / initial state.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop thread and wait for it to finish.
pub fn stop_game_loop(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if !*running {
        return Err(AppError::NotRunning);
    }

    if let Some(tx) = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?.take() {
        // A closed channel means the thread already ended.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_handle.lock().map_err(|_| AppError::LockPoisoned)?.take() {
        if handle.join().is_err() {
            log::error!("game loop thread panicked");
        }
    }
    *running = false;
    Ok(())
}

/// Parse one input line into a command.
pub fn parse_command(line: &str) -> Result<PlayerCommand, AppError> {
    Ok(serde_json::from_str(line.trim())?)
}

/// Encode a snapshot as a single JSON line (without the newline).
pub fn encode_snapshot(snapshot: &GameStateSnapshot) -> Result<String, AppError> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Sink writing each snapshot as one JSON line.
pub struct JsonLineSink<W> {
    writer: W,
}

impl<W: Write + Send> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, snapshot: &GameStateSnapshot) -> Result<(), AppError> {
        let line = encode_snapshot(snapshot)?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> SnapshotSink for JsonLineSink<W> {
    fn publish(&mut self, snapshot: &GameStateSnapshot) {
        if let Err(e) = self.write_line(snapshot) {
            log::warn!("failed to publish snapshot {}: {e}", snapshot.revision);
        }
    }
}
