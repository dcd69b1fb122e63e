//! The game state.
//!
//! `GameState` owns everything: the card registry, the deck, the zone
//! map, and the RNG. It is a plain value, so callers may hold several
//! independent games side by side, and every rule operation threads
//! through it.
//!
//! ## Card lifecycle
//!
//! All 72 cards are created once by [`start`](GameState::start) and
//! never destroyed; they only migrate between the deck and the zones
//! for the lifetime of a session. [`reset`](GameState::reset) discards
//! the whole set; the next start recreates it from scratch.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{build_deck, Card, CardId, DECK_SIZE};
use crate::core::rng::GameRng;
use crate::zones::{ZoneId, ZoneMap};

/// Cards dealt at game start.
///
/// Also the active-card count at which drawing is legal; discarding is
/// legal at one more.
pub const HAND_SIZE: usize = 11;

/// Turn phase, derived from the active-card count.
///
/// Active cards are those in the hand or a group; the deck and the
/// discard pile do not count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// 11 active cards: the player may draw.
    Draw,
    /// 12 active cards: the player must discard to get back to 11.
    Discard,
    /// Any other count. Before the game starts the count is 0; legal
    /// play never leaves 11..=12 once started.
    Idle,
}

/// Complete state of one MATRIX game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Every card in the game, by id. Empty before the first start.
    cards: FxHashMap<CardId, Card>,

    /// Undrawn cards, in order. Top of the deck is the end.
    deck: Vec<CardId>,

    /// Locations of all dealt cards.
    zones: ZoneMap,

    /// Whether a game is in progress.
    started: bool,

    /// Deterministic RNG for shuffling.
    rng: GameRng,
}

impl GameState {
    /// Create a game in the pre-game condition: not started, no cards.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: FxHashMap::default(),
            deck: Vec::new(),
            zones: ZoneMap::new(),
            started: false,
            rng: GameRng::new(seed),
        }
    }

    /// Create a game seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            cards: FxHashMap::default(),
            deck: Vec::new(),
            zones: ZoneMap::new(),
            started: false,
            rng: GameRng::from_entropy(),
        }
    }

    // === Lifecycle ===

    /// Start (or restart) a game.
    ///
    /// Builds a fresh shuffled deck, deals 11 cards into the hand,
    /// leaves the groups and the discard pile empty, and marks the
    /// game as started.
    pub fn start(&mut self) {
        self.cards.clear();
        self.deck.clear();
        self.zones.clear();

        for card in build_deck() {
            self.cards.insert(card.id, card);
            self.deck.push(card.id);
        }
        self.rng.shuffle(&mut self.deck);

        for _ in 0..HAND_SIZE {
            // the full deck always covers the opening deal
            let card = self.deck.pop().expect("deck smaller than opening hand");
            self.zones.add(card, ZoneId::Hand);
        }
        self.started = true;
        self.debug_assert_conserved();
    }

    /// Return to the pre-game condition.
    ///
    /// All zones and the deck are emptied and the card set is dropped;
    /// the next [`start`](Self::start) recreates it with ids from zero.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.deck.clear();
        self.zones.clear();
        self.started = false;
    }

    // === Queries ===

    /// Whether a game is in progress.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Number of active cards: hand plus all four groups.
    ///
    /// The deck and the discard pile are excluded. This count drives
    /// phase gating: draw at 11, discard at 12.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let in_groups: usize = ZoneId::GROUPS
            .iter()
            .map(|&group| self.zones.len_of(group))
            .sum();
        self.zones.len_of(ZoneId::Hand) + in_groups
    }

    /// Derived turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if !self.started {
            return TurnPhase::Idle;
        }
        match self.active_count() {
            n if n == HAND_SIZE => TurnPhase::Draw,
            n if n == HAND_SIZE + 1 => TurnPhase::Discard,
            _ => TurnPhase::Idle,
        }
    }

    /// The zone currently holding a card.
    ///
    /// `None` for unknown ids and for cards still in the deck.
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<ZoneId> {
        self.zones.zone_of(card)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<Card> {
        self.cards.get(&id).copied()
    }

    /// Ordered contents of a zone, resolved to cards.
    #[must_use]
    pub fn cards_in(&self, zone: ZoneId) -> Vec<Card> {
        self.zones
            .cards_in(zone)
            .iter()
            .map(|id| self.cards[id])
            .collect()
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_len(&self, zone: ZoneId) -> usize {
        self.zones.len_of(zone)
    }

    /// The four group contents, in rule order.
    ///
    /// This is the input shape of [`check_win`](crate::rules::check_win).
    #[must_use]
    pub fn groups(&self) -> [Vec<Card>; 4] {
        [
            self.cards_in(ZoneId::Group1),
            self.cards_in(ZoneId::Group2),
            self.cards_in(ZoneId::Group3),
            self.cards_in(ZoneId::Group4),
        ]
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    // === Move-engine internals ===

    /// Remove and return the top card of the deck.
    pub(crate) fn pop_deck(&mut self) -> Option<CardId> {
        self.deck.pop()
    }

    /// Mutable access to the zone map.
    pub(crate) fn zones_mut(&mut self) -> &mut ZoneMap {
        &mut self.zones
    }

    /// Resolve an id that is known to belong to this game.
    ///
    /// Panics if the registry does not know the id; the registry and
    /// the deck are built together, so that is an engine bug.
    pub(crate) fn resolve(&self, id: CardId) -> Card {
        self.cards[&id]
    }

    /// Debug-check card conservation: every card is in exactly one
    /// place and none have appeared or vanished.
    pub(crate) fn debug_assert_conserved(&self) {
        debug_assert_eq!(
            self.deck.len() + self.zones.total(),
            self.cards.len(),
            "cards lost or duplicated between deck and zones"
        );
        debug_assert!(
            !self.started || self.cards.len() == DECK_SIZE,
            "a started game must hold the full card set"
        );
    }
}

impl PartialEq for GameState {
    /// Observable-state equality.
    ///
    /// The RNG stream position is internal and does not participate:
    /// two states that hold the same cards in the same places are
    /// equal.
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
            && self.deck == other.deck
            && self.zones == other.zones
            && self.started == other.started
    }
}
