//! The card value type.
//!
//! A card is an immutable (color, value) pair with a unique id. Two
//! physical copies of every (color, value) combination exist in the
//! deck, so identity is by `id`, never by face.

use serde::{Deserialize, Serialize};

use super::deck::{MAX_VALUE, MIN_VALUE};

/// Unique identifier for a physical card.
///
/// Ids are assigned sequentially by the deck factory and stay stable
/// for the lifetime of a game. A reset recreates the card set, so ids
/// restart from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card #{}", self.0)
    }
}

/// The color of a [card](Card).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "yellow")]
    Yellow,
}

impl Color {
    /// All colors, in deck order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        write!(f, "{}", name)
    }
}

/// A card in the game.
///
/// Immutable once created. Values range over 1..=9; the deck holds two
/// copies of every (color, value) pair, distinguished only by `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity of this physical card.
    pub id: CardId,
    /// Face color.
    pub color: Color,
    /// Face value, 1..=9.
    pub value: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, color: Color, value: u8) -> Self {
        Self { id, color, value }
    }

    /// Whether this is an edge card (value 1 or 9).
    ///
    /// Edge cards may never participate in a winning group.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        self.value == MIN_VALUE || self.value == MAX_VALUE
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}
