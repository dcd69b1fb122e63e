//! The win validator.
//!
//! Pure functions over the four group card lists. A winning
//! arrangement is three 3-card melds (runs or color-distinct groups)
//! plus a valid pair, with no 1s or 9s anywhere in the groups.
//!
//! Rules are evaluated in a fixed order (sizes, edge values, melds,
//! pair) and the first failing rule is the one reported.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Color};
use crate::zones::ZoneId;

/// Verdict of [`check_win`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinResult {
    /// Every group passes every rule.
    Valid,
    /// At least one rule fails; carries the first violation found.
    Invalid(WinViolation),
}

impl WinResult {
    /// Whether this is a winning arrangement.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == WinResult::Valid
    }
}

/// Why an arrangement is not a win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinViolation {
    /// Groups 1-3 must hold exactly 3 cards and group 4 exactly 2.
    InvalidWinSizes,
    /// A group contains a card with value 1 or 9.
    IllegalEdgeValue { group: ZoneId },
    /// A group has the right size but forms no valid combination.
    InvalidCombination { group: ZoneId },
}

impl std::error::Error for WinViolation {}

impl std::fmt::Display for WinViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinViolation::InvalidWinSizes => {
                write!(f, "the groups must hold 3+3+3+2 cards")
            }
            WinViolation::IllegalEdgeValue { group } => {
                write!(f, "{} contains a 1 or a 9, which never win", group)
            }
            WinViolation::InvalidCombination { group } => {
                write!(f, "{} is not a valid combination", group)
            }
        }
    }
}

/// Judge the four groups, in order.
///
/// `groups[0]..groups[2]` are the 3-card melds, `groups[3]` the pair:
/// the shape returned by [`GameState::groups`](crate::GameState::groups).
/// Pure and deterministic; reads nothing but its argument.
#[must_use]
pub fn check_win(groups: &[Vec<Card>; 4]) -> WinResult {
    // Size rule: every group filled exactly to capacity.
    for (cards, zone) in groups.iter().zip(ZoneId::GROUPS) {
        if Some(cards.len()) != zone.capacity() {
            return WinResult::Invalid(WinViolation::InvalidWinSizes);
        }
    }

    // Edge-value exclusion: 1s and 9s never participate in a win,
    // whatever shape the group would otherwise form.
    for (cards, zone) in groups.iter().zip(ZoneId::GROUPS) {
        if cards.iter().any(|c| c.is_edge()) {
            return WinResult::Invalid(WinViolation::IllegalEdgeValue { group: zone });
        }
    }

    // Meld rule for the three 3-card groups, each judged on its own.
    for (cards, zone) in groups.iter().zip(ZoneId::GROUPS).take(3) {
        if !(is_valid_run(cards) || is_valid_group(cards)) {
            return WinResult::Invalid(WinViolation::InvalidCombination { group: zone });
        }
    }

    // Pair rule for group 4.
    if !is_valid_pair(&groups[3]) {
        return WinResult::Invalid(WinViolation::InvalidCombination {
            group: ZoneId::Group4,
        });
    }

    WinResult::Valid
}

/// A run: three cards of one color with strictly consecutive values.
///
/// No wraparound: 8, 9, 1 is not a run.
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    if cards.len() != 3 {
        return false;
    }
    let color = cards[0].color;
    if !cards.iter().all(|c| c.color == color) {
        return false;
    }
    let mut values: SmallVec<[u8; 3]> = cards.iter().map(|c| c.value).collect();
    values.sort_unstable();
    values[1] == values[0] + 1 && values[2] == values[1] + 1
}

/// A group meld: three cards of one value in three pairwise-distinct
/// colors.
///
/// The deck holds two copies of every (color, value), but one meld may
/// not use both: any two same-colored cards invalidate it.
#[must_use]
pub fn is_valid_group(cards: &[Card]) -> bool {
    if cards.len() != 3 {
        return false;
    }
    let value = cards[0].value;
    if !cards.iter().all(|c| c.value == value) {
        return false;
    }
    let mut colors: SmallVec<[Color; 3]> = cards.iter().map(|c| c.color).collect();
    colors.sort_unstable();
    colors.dedup();
    colors.len() == 3
}

/// A pair: two cards of the same value, or of the same color with
/// values exactly one apart.
#[must_use]
pub fn is_valid_pair(cards: &[Card]) -> bool {
    if cards.len() != 2 {
        return false;
    }
    let (a, b) = (cards[0], cards[1]);
    if a.value == b.value {
        return true;
    }
    a.color == b.color && a.value.abs_diff(b.value) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn card(id: u32, color: Color, value: u8) -> Card {
        Card::new(CardId::new(id), color, value)
    }

    #[test]
    fn test_run_accepts_consecutive_one_color() {
        let run = [
            card(0, Color::Red, 1),
            card(1, Color::Red, 2),
            card(2, Color::Red, 3),
        ];
        assert!(is_valid_run(&run));

        // Order within the group does not matter.
        let shuffled = [
            card(3, Color::Blue, 7),
            card(4, Color::Blue, 5),
            card(5, Color::Blue, 6),
        ];
        assert!(is_valid_run(&shuffled));
    }

    #[test]
    fn test_run_rejects_gaps_and_mixed_colors() {
        let gap = [
            card(0, Color::Red, 1),
            card(1, Color::Red, 2),
            card(2, Color::Red, 4),
        ];
        assert!(!is_valid_run(&gap));

        let mixed = [
            card(0, Color::Red, 1),
            card(1, Color::Blue, 2),
            card(2, Color::Red, 3),
        ];
        assert!(!is_valid_run(&mixed));
    }

    #[test]
    fn test_run_rejects_wraparound() {
        let wrap = [
            card(0, Color::Green, 8),
            card(1, Color::Green, 9),
            card(2, Color::Green, 1),
        ];
        assert!(!is_valid_run(&wrap));
    }

    #[test]
    fn test_run_rejects_wrong_sizes() {
        assert!(!is_valid_run(&[]));
        assert!(!is_valid_run(&[card(0, Color::Red, 2), card(1, Color::Red, 3)]));
    }

    #[test]
    fn test_group_needs_three_distinct_colors() {
        let meld = [
            card(0, Color::Red, 5),
            card(1, Color::Blue, 5),
            card(2, Color::Green, 5),
        ];
        assert!(is_valid_group(&meld));

        // Two physical copies of red 5 exist, but a meld may not use both.
        let dup_color = [
            card(0, Color::Red, 5),
            card(1, Color::Red, 5),
            card(2, Color::Blue, 5),
        ];
        assert!(!is_valid_group(&dup_color));

        let mixed_values = [
            card(0, Color::Red, 5),
            card(1, Color::Blue, 5),
            card(2, Color::Green, 6),
        ];
        assert!(!is_valid_group(&mixed_values));
    }

    #[test]
    fn test_pair_rules() {
        // Same value, any colors.
        assert!(is_valid_pair(&[
            card(0, Color::Red, 4),
            card(1, Color::Blue, 4)
        ]));
        // Same color, adjacent values.
        assert!(is_valid_pair(&[
            card(0, Color::Red, 4),
            card(1, Color::Red, 5)
        ]));
        // Different color and different value.
        assert!(!is_valid_pair(&[
            card(0, Color::Red, 4),
            card(1, Color::Blue, 6)
        ]));
        // Same color but a gap of two.
        assert!(!is_valid_pair(&[
            card(0, Color::Red, 4),
            card(1, Color::Red, 6)
        ]));
        // Wrong size.
        assert!(!is_valid_pair(&[card(0, Color::Red, 4)]));
    }
}
