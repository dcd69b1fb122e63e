//! The move engine: validated, atomic card transfers.
//!
//! Both operations leave the state untouched on failure. `move_card`
//! is a two-step remove/insert; if the insert is refused, the removed
//! card goes back to its exact position in the source zone, so a
//! failed call is indistinguishable from no call.

use crate::cards::{Card, CardId};
use crate::core::error::EngineError;
use crate::core::state::{GameState, HAND_SIZE};
use crate::zones::ZoneId;

/// Draw the top card of the deck into the hand.
///
/// Legal only while a game is running, the deck is non-empty, and the
/// active count is exactly 11 (the draw phase). Returns the drawn
/// card. Single-step, so no rollback is ever needed.
pub fn draw_card(state: &mut GameState) -> Result<Card, EngineError> {
    if !state.started() {
        return Err(EngineError::GameNotStarted);
    }
    if state.deck_len() == 0 {
        return Err(EngineError::DeckEmpty);
    }
    let active = state.active_count();
    if active != HAND_SIZE {
        return Err(EngineError::WrongPhase {
            expected: HAND_SIZE,
            actual: active,
        });
    }

    let id = match state.pop_deck() {
        Some(id) => id,
        None => return Err(EngineError::DeckEmpty),
    };
    state.zones_mut().add(id, ZoneId::Hand);
    state.debug_assert_conserved();
    Ok(state.resolve(id))
}

/// Move a card between zones, atomically.
///
/// Discards are phase-gated: `to == DiscardPile` requires exactly 12
/// active cards. Group destinations are capacity-checked. On success
/// returns the new contents of `to`; on any refusal the state is
/// exactly as it was before the call.
pub fn move_card(
    state: &mut GameState,
    card: CardId,
    from: ZoneId,
    to: ZoneId,
) -> Result<Vec<Card>, EngineError> {
    // An in-zone drop is a no-op, not a reorder.
    if from == to {
        return Ok(state.cards_in(to));
    }

    if to == ZoneId::DiscardPile {
        let active = state.active_count();
        if active != HAND_SIZE + 1 {
            return Err(EngineError::WrongPhase {
                expected: HAND_SIZE + 1,
                actual: active,
            });
        }
    }

    // Step 1: take the card out, validating the claimed source zone
    // against ground truth.
    let position = match state.zones_mut().remove(card) {
        Some((zone, position)) if zone == from => position,
        Some((zone, position)) => {
            // it lives elsewhere; put it straight back
            state.zones_mut().insert_at(card, zone, position);
            return Err(EngineError::CardNotFound { card, zone: from });
        }
        None => return Err(EngineError::CardNotFound { card, zone: from }),
    };

    // Step 2: append to the destination, bounded zones permitting.
    if let Some(capacity) = to.capacity() {
        if state.zone_len(to) >= capacity {
            // all-or-nothing: the card goes back where it came from
            state.zones_mut().insert_at(card, from, position);
            return Err(EngineError::GroupFull {
                group: to,
                capacity,
            });
        }
    }
    state.zones_mut().add(card, to);
    state.debug_assert_conserved();
    Ok(state.cards_in(to))
}
