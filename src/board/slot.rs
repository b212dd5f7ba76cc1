//! A single board position.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Contents of one board position: a card, or an explicit empty placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// A visible card.
    Occupied(Card),
    /// A position whose card was removed without replacement.
    Empty,
}

impl Slot {
    /// The card in this slot, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Slot::Occupied(card) => Some(*card),
            Slot::Empty => None,
        }
    }

    /// Check if the slot holds a card.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Check if the slot is an empty placeholder.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

impl From<Option<Card>> for Slot {
    fn from(card: Option<Card>) -> Self {
        card.map_or(Slot::Empty, Slot::Occupied)
    }
}
