//! Zone system for card locations.
//!
//! MATRIX has exactly six zones a card can be moved between: the hand,
//! four capacity-limited groups, and the discard pile. The deck is
//! held separately by the game state and is never a move endpoint.
//!
//! ## Key Types
//!
//! - `ZoneId`: the fixed zone set, with per-zone capacities
//! - `ZoneMap`: card location tracking and ordered zone contents

pub mod map;

pub use map::{ZoneId, ZoneMap};
