//! Card location tracking across the fixed zone set.
//!
//! The `ZoneMap` answers "where is this card?" in O(1) and keeps the
//! ordered contents of every zone. It supports:
//! - Appending to a zone
//! - Positional insertion (used by move rollback)
//! - Removal that reports the card's former position
//! - Zone size and capacity queries

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Number of zones.
const ZONE_COUNT: usize = 6;

/// A zone a card can occupy and be moved between.
///
/// The deck is deliberately not a zone: cards leave it only through
/// [`draw_card`](crate::rules::draw_card), never by an arbitrary move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    /// The player's hand. Unbounded.
    Hand,
    /// First 3-card group.
    Group1,
    /// Second 3-card group.
    Group2,
    /// Third 3-card group.
    Group3,
    /// The 2-card pair group.
    Group4,
    /// The discard pile. Unbounded, but discarding is phase-gated.
    DiscardPile,
}

impl ZoneId {
    /// All zones, in display order.
    pub const ALL: [ZoneId; ZONE_COUNT] = [
        ZoneId::Hand,
        ZoneId::Group1,
        ZoneId::Group2,
        ZoneId::Group3,
        ZoneId::Group4,
        ZoneId::DiscardPile,
    ];

    /// The four groups, in rule order.
    pub const GROUPS: [ZoneId; 4] = [
        ZoneId::Group1,
        ZoneId::Group2,
        ZoneId::Group3,
        ZoneId::Group4,
    ];

    /// Maximum number of cards this zone may hold, if bounded.
    ///
    /// Capacities are fixed configuration: 3 for the first three
    /// groups, 2 for the pair group, unbounded elsewhere.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            ZoneId::Group1 | ZoneId::Group2 | ZoneId::Group3 => Some(3),
            ZoneId::Group4 => Some(2),
            ZoneId::Hand | ZoneId::DiscardPile => None,
        }
    }

    /// Whether this zone is one of the four groups.
    #[must_use]
    pub const fn is_group(self) -> bool {
        matches!(
            self,
            ZoneId::Group1 | ZoneId::Group2 | ZoneId::Group3 | ZoneId::Group4
        )
    }

    const fn index(self) -> usize {
        match self {
            ZoneId::Hand => 0,
            ZoneId::Group1 => 1,
            ZoneId::Group2 => 2,
            ZoneId::Group3 => 3,
            ZoneId::Group4 => 4,
            ZoneId::DiscardPile => 5,
        }
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneId::Hand => "hand",
            ZoneId::Group1 => "group 1",
            ZoneId::Group2 => "group 2",
            ZoneId::Group3 => "group 3",
            ZoneId::Group4 => "group 4",
            ZoneId::DiscardPile => "discard pile",
        };
        write!(f, "{}", name)
    }
}

/// Tracks which zone every dealt card occupies.
///
/// Two views are kept in lockstep: a location index for O(1) lookup
/// and per-zone ordered lists for display order and rollback.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneMap {
    /// Card locations: card id -> zone.
    locations: FxHashMap<CardId, ZoneId>,

    /// Ordered contents per zone, indexed by `ZoneId::index`.
    contents: [Vec<CardId>; ZONE_COUNT],
}

impl ZoneMap {
    /// Create an empty zone map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the end of a zone.
    ///
    /// Panics if the card is already tracked: a duplicate insertion
    /// means card conservation is broken, which is an engine bug.
    pub fn add(&mut self, card: CardId, zone: ZoneId) {
        if self.locations.insert(card, zone).is_some() {
            panic!("{} inserted into the zone map twice", card);
        }
        self.contents[zone.index()].push(card);
    }

    /// Insert a card at a specific position within a zone.
    ///
    /// Positions past the end append. Panics like [`add`](Self::add)
    /// on a duplicate.
    pub fn insert_at(&mut self, card: CardId, zone: ZoneId, position: usize) {
        if self.locations.insert(card, zone).is_some() {
            panic!("{} inserted into the zone map twice", card);
        }
        let list = &mut self.contents[zone.index()];
        let idx = position.min(list.len());
        list.insert(idx, card);
    }

    /// Remove a card, returning the zone it was in and its position
    /// within that zone.
    ///
    /// Returns `None` if the card is not tracked.
    pub fn remove(&mut self, card: CardId) -> Option<(ZoneId, usize)> {
        let zone = self.locations.remove(&card)?;
        let list = &mut self.contents[zone.index()];
        // the two views are kept in lockstep; a miss here is a bug
        let position = list
            .iter()
            .position(|&c| c == card)
            .expect("location index out of sync with zone contents");
        list.remove(position);
        Some((zone, position))
    }

    /// The zone currently holding a card, if any.
    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<ZoneId> {
        self.locations.get(&card).copied()
    }

    /// Whether the map tracks this card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }

    /// Ordered contents of a zone.
    #[must_use]
    pub fn cards_in(&self, zone: ZoneId) -> &[CardId] {
        &self.contents[zone.index()]
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len_of(&self, zone: ZoneId) -> usize {
        self.contents[zone.index()].len()
    }

    /// Whether a bounded zone has no room left.
    ///
    /// Unbounded zones are never full.
    #[must_use]
    pub fn is_full(&self, zone: ZoneId) -> bool {
        zone.capacity()
            .map_or(false, |cap| self.len_of(zone) >= cap)
    }

    /// Total number of cards tracked across all zones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.locations.len()
    }

    /// Remove every card from every zone.
    pub fn clear(&mut self) {
        self.locations.clear();
        for list in &mut self.contents {
            list.clear();
        }
    }
}
