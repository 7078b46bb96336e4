//! WHACK application shell.
//!
//! Runs the game loop on its own thread and exposes it to a presentation
//! process through JSON lines on stdin/stdout.

pub mod cli;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod ipc;
pub mod state;

pub use whack_core as core;
