//! The deck factory.
//!
//! MATRIX is played with a fixed 72-card deck: every (color, value)
//! pair over 4 colors × values 1..=9, twice. The factory produces the
//! set in canonical order (color-major, value-minor, the two copies
//! adjacent); shuffling belongs to the RNG layer.

use super::card::{Card, CardId, Color};

/// Lowest card value.
pub const MIN_VALUE: u8 = 1;

/// Highest card value.
pub const MAX_VALUE: u8 = 9;

/// Physical copies of each (color, value) pair.
pub const COPIES_PER_PAIR: usize = 2;

/// Total cards in a deck: 4 colors × 9 values × 2 copies.
pub const DECK_SIZE: usize =
    Color::ALL.len() * (MAX_VALUE - MIN_VALUE + 1) as usize * COPIES_PER_PAIR;

/// Build the canonical deck.
///
/// Ids are assigned sequentially from zero, so a fresh game restarts
/// the id space. The order is deterministic.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u32;
    for color in Color::ALL {
        for value in MIN_VALUE..=MAX_VALUE {
            for _ in 0..COPIES_PER_PAIR {
                deck.push(Card::new(CardId::new(next_id), color, value));
                next_id += 1;
            }
        }
    }
    deck
}
