//! Application-level errors.

use thiserror::Error;

use whack_core::error::GameError;

/// Errors raised by the app shell. None of them panic the game loop thread.
#[derive(Error, Debug)]
pub enum AppError {
    /// A stdin line was not a valid command, or a snapshot failed to encode.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game loop already running")]
    AlreadyRunning,

    #[error("game loop not started")]
    NotRunning,

    /// The game loop thread is gone.
    #[error("game loop channel closed")]
    ChannelClosed,

    #[error("shared state lock poisoned")]
    LockPoisoned,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    /// Bad command-line usage.
    #[error("{0}")]
    Usage(String),
}
