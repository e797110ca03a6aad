//! Level Snake - a terminal Snake game with lives, levels, and obstacles
//!
//! This library provides:
//! - Core game logic (game module): the per-update state machine
//! - Key mapping into per-update input snapshots (input module)
//! - TUI rendering (render module)
//! - In-memory session statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
