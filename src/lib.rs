//! # matrix-engine
//!
//! State and rule engine for MATRIX, a single-player rummy-style card
//! game: draw from a 72-card deck, arrange cards across four
//! capacity-limited groups, and reach a winning configuration before
//! discarding.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: No globals. [`GameState`] is a value owned
//!    by the caller and threaded through every engine call, so several
//!    independent games and deterministic tests are trivial.
//!
//! 2. **Atomic Moves**: [`move_card`] either fully succeeds or leaves
//!    the state exactly as it found it. A failed call is
//!    indistinguishable from no call.
//!
//! 3. **Pure Judgement**: the win validator reads the four groups and
//!    nothing else.
//!
//! The engine performs no I/O and draws no UI. A presentation layer
//! reads state through the accessors, invokes the operations in
//! [`rules`], and renders the results.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, game state
//! - `cards`: the card value type and the deck factory
//! - `zones`: the fixed zone set and card location tracking
//! - `rules`: the move engine and the win validator

pub mod cards;
pub mod core;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, GameState, TurnPhase, HAND_SIZE};

pub use crate::cards::{build_deck, Card, CardId, Color, DECK_SIZE};

pub use crate::zones::{ZoneId, ZoneMap};

pub use crate::rules::{
    check_win, draw_card, is_valid_group, is_valid_pair, is_valid_run, move_card, WinResult,
    WinViolation,
};
