//! Rule-violation errors for engine operations.
//!
//! Every variant is recoverable: the operation reports why it refused,
//! and the game state is left exactly as it was before the call.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::zones::ZoneId;

/// The error type for [`draw_card`](crate::rules::draw_card) and
/// [`move_card`](crate::rules::move_card).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// An operation was attempted before the game was started.
    GameNotStarted,
    /// The deck has no cards left to draw.
    DeckEmpty,
    /// The operation is only legal at a specific active-card count.
    WrongPhase { expected: usize, actual: usize },
    /// The card is not in the claimed source zone.
    CardNotFound { card: CardId, zone: ZoneId },
    /// The destination group is at capacity.
    GroupFull { group: ZoneId, capacity: usize },
}

impl std::error::Error for EngineError {}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::GameNotStarted => write!(f, "the game has not been started"),
            EngineError::DeckEmpty => write!(f, "the deck is empty"),
            EngineError::WrongPhase { expected, actual } => write!(
                f,
                "requires exactly {} active cards, but there are {}",
                expected, actual
            ),
            EngineError::CardNotFound { card, zone } => {
                write!(f, "{} is not in the {}", card, zone)
            }
            EngineError::GroupFull { group, capacity } => {
                write!(f, "{} is already full ({} cards)", group, capacity)
            }
        }
    }
}
