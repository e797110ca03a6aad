//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The binary drives it once per frame with an input snapshot and the current time.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, InputState};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo};
pub use state::{CollisionType, GameState, Mode, Position, Snake};
