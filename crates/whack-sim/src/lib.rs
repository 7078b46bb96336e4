//! Game loop engine for WHACK.
//!
//! Owns the board, the spawn scheduler and level timer, hit resolution and
//! win/lose detection, and produces `GameStateSnapshot`s for the presentation.

pub mod board;
pub mod config;
pub mod engine;
pub mod settings;
pub mod systems;
pub mod timers;

pub use engine::GameLoop;
pub use whack_core as core;
