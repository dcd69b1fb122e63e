//! Core engine types: errors, RNG, and the game state.
//!
//! This module contains the fundamental building blocks the rule
//! functions in [`crate::rules`] operate on.

pub mod error;
pub mod rng;
pub mod state;

pub use error::EngineError;
pub use rng::GameRng;
pub use state::{GameState, TurnPhase, HAND_SIZE};
