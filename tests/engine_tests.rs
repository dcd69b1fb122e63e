//! Game lifecycle and move engine integration tests.
//!
//! These drive the engine the way a presentation layer would: start a
//! game, draw, arrange, discard, and watch the invariants hold.

use matrix_engine::{
    check_win, draw_card, move_card, CardId, EngineError, GameState, TurnPhase, WinResult,
    WinViolation, ZoneId, DECK_SIZE, HAND_SIZE,
};

/// Total cards everywhere: deck plus every zone.
fn total_cards(state: &GameState) -> usize {
    state.deck_len()
        + ZoneId::ALL
            .iter()
            .map(|&zone| state.zone_len(zone))
            .sum::<usize>()
}

fn first_hand_card(state: &GameState) -> CardId {
    state.cards_in(ZoneId::Hand)[0].id
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

/// A started game holds the full card set: 11 in hand, 61 in deck.
#[test]
fn test_start_distributes_the_full_set() {
    let mut state = GameState::new(42);
    state.start();

    assert_eq!(state.zone_len(ZoneId::Hand), HAND_SIZE);
    assert_eq!(state.deck_len(), DECK_SIZE - HAND_SIZE);
    assert_eq!(total_cards(&state), DECK_SIZE);
    assert_eq!(state.phase(), TurnPhase::Draw);
}

/// Reset drops everything; a fresh start deals a new set.
#[test]
fn test_reset_and_restart() {
    let mut state = GameState::new(42);
    state.start();
    draw_card(&mut state).unwrap();

    state.reset();
    assert!(!state.started());
    assert_eq!(total_cards(&state), 0);
    assert_eq!(state.phase(), TurnPhase::Idle);
    assert_eq!(draw_card(&mut state), Err(EngineError::GameNotStarted));

    state.start();
    assert_eq!(state.zone_len(ZoneId::Hand), HAND_SIZE);
    assert_eq!(total_cards(&state), DECK_SIZE);
}

// =============================================================================
// Turn Cycle Tests
// =============================================================================

/// Draw and discard alternate: 11 -> 12 -> 11 -> ...
#[test]
fn test_draw_discard_cycle() {
    let mut state = GameState::new(42);
    state.start();

    for _ in 0..5 {
        assert_eq!(state.phase(), TurnPhase::Draw);
        let drawn = draw_card(&mut state).unwrap();
        assert_eq!(state.phase(), TurnPhase::Discard);

        // Drawing again is refused until a discard brings us back to 11.
        assert_eq!(
            draw_card(&mut state),
            Err(EngineError::WrongPhase {
                expected: HAND_SIZE,
                actual: HAND_SIZE + 1
            })
        );

        move_card(&mut state, drawn.id, ZoneId::Hand, ZoneId::DiscardPile).unwrap();
        assert_eq!(total_cards(&state), DECK_SIZE);
    }

    assert_eq!(state.zone_len(ZoneId::DiscardPile), 5);
    assert_eq!(state.deck_len(), DECK_SIZE - HAND_SIZE - 5);
}

/// Playing the deck down to nothing ends in DeckEmpty, never a panic.
#[test]
fn test_deck_exhaustion() {
    let mut state = GameState::new(42);
    state.start();

    while state.deck_len() > 0 {
        let drawn = draw_card(&mut state).unwrap();
        move_card(&mut state, drawn.id, ZoneId::Hand, ZoneId::DiscardPile).unwrap();
    }

    assert_eq!(draw_card(&mut state), Err(EngineError::DeckEmpty));
    assert_eq!(total_cards(&state), DECK_SIZE);
    assert_eq!(
        state.zone_len(ZoneId::DiscardPile),
        DECK_SIZE - HAND_SIZE
    );
}

/// Discarding straight from a group is legal in the discard phase.
#[test]
fn test_discard_from_group() {
    let mut state = GameState::new(42);
    state.start();

    let card = first_hand_card(&state);
    move_card(&mut state, card, ZoneId::Hand, ZoneId::Group3).unwrap();
    draw_card(&mut state).unwrap();

    move_card(&mut state, card, ZoneId::Group3, ZoneId::DiscardPile).unwrap();
    assert_eq!(state.locate(card), Some(ZoneId::DiscardPile));
    assert_eq!(state.phase(), TurnPhase::Draw);
}

// =============================================================================
// Atomicity Tests
// =============================================================================

/// A refused move leaves the state deep-equal to the pre-call state.
#[test]
fn test_failed_moves_change_nothing() {
    let mut state = GameState::new(42);
    state.start();

    // Fill group 1 to capacity.
    for _ in 0..3 {
        let card = first_hand_card(&state);
        move_card(&mut state, card, ZoneId::Hand, ZoneId::Group1).unwrap();
    }
    let before = state.clone();

    // Group full.
    let card = state.cards_in(ZoneId::Hand)[2].id;
    assert!(move_card(&mut state, card, ZoneId::Hand, ZoneId::Group1).is_err());
    assert_eq!(state, before);

    // Wrong phase for a discard.
    assert!(move_card(&mut state, card, ZoneId::Hand, ZoneId::DiscardPile).is_err());
    assert_eq!(state, before);

    // Wrong source zone.
    assert!(move_card(&mut state, card, ZoneId::Group2, ZoneId::Hand).is_err());
    assert_eq!(state, before);

    // Unknown card.
    let bogus = CardId::new(9999);
    assert!(move_card(&mut state, bogus, ZoneId::Hand, ZoneId::Group2).is_err());
    assert_eq!(state, before);
}

// =============================================================================
// End-to-End Arrangement Tests
// =============================================================================

/// The opening hand is exactly a 3+3+3+2 arrangement; laying it all
/// out passes the size rule whatever the cards are.
#[test]
fn test_lay_out_full_arrangement() {
    let mut state = GameState::new(42);
    state.start();

    for (group, count) in [
        (ZoneId::Group1, 3),
        (ZoneId::Group2, 3),
        (ZoneId::Group3, 3),
        (ZoneId::Group4, 2),
    ] {
        for _ in 0..count {
            let card = first_hand_card(&state);
            move_card(&mut state, card, ZoneId::Hand, group).unwrap();
        }
    }

    assert_eq!(state.zone_len(ZoneId::Hand), 0);
    assert_eq!(state.active_count(), HAND_SIZE);
    assert_eq!(total_cards(&state), DECK_SIZE);

    // A random deal is almost surely not a win, but it must never be
    // reported as a size problem.
    let verdict = check_win(&state.groups());
    assert_ne!(
        verdict,
        WinResult::Invalid(WinViolation::InvalidWinSizes)
    );
}
