//! Core types and definitions for the WHACK game loop.
//!
//! This crate defines the vocabulary shared across the other crates:
//! commands, state snapshots, events, level tuning, and constants.
//! It has no dependency on any runtime or presentation layer.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod level;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
