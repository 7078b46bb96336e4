//! Application state shared between the IPC side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use whack_core::commands::PlayerCommand;
use whack_core::state::GameStateSnapshot;

/// Commands sent from the IPC side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex`.
/// - `Option` fields are `None` until `start_game_loop` runs.
/// - The latest snapshot is shared with the game loop thread through an `Arc`.
pub struct AppState {
    /// Channel to the game loop thread.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Handle used to join the thread on shutdown.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(state.loop_handle.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }
}
