//! The board: an ordered, capped sequence of slots.
//!
//! Positions are stable. A card placed at position 5 stays at position 5
//! until it is removed; removal leaves an `Empty` slot behind rather than
//! shifting later cards down.

use serde::{Deserialize, Serialize};

use super::slot::Slot;
use crate::cards::Card;

/// Visible card slots, at most `max_slots` of them.
///
/// ```
/// use set_game::board::{Board, Slot};
/// use set_game::cards::Card;
///
/// let mut board = Board::new(24);
/// let card = Card::all().next().unwrap();
///
/// let pos = board.place(card).unwrap();
/// assert_eq!(board.card_at(pos), Some(card));
///
/// board.clear_slot(pos);
/// assert_eq!(board.get(pos), Some(&Slot::Empty));
/// assert_eq!(board.place(card), Some(pos)); // refills the hole first
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Vec<Slot>,
    max_slots: usize,
}

impl Board {
    /// Create an empty board with the given slot cap.
    #[must_use]
    pub fn new(max_slots: usize) -> Self {
        Self {
            slots: Vec::with_capacity(max_slots),
            max_slots,
        }
    }

    /// All slots, in position order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Get the slot at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Slot> {
        self.slots.get(position)
    }

    /// Get the card at a position, if the position exists and is occupied.
    #[must_use]
    pub fn card_at(&self, position: usize) -> Option<Card> {
        self.slots.get(position).and_then(Slot::card)
    }

    /// Number of slots (occupied or empty).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the board has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot cap.
    #[must_use]
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Number of slots holding a card.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// How many more cards `place` can accept: empty slots plus room
    /// under the cap.
    #[must_use]
    pub fn free_capacity(&self) -> usize {
        let empty = self.slots.iter().filter(|s| s.is_empty()).count();
        empty + self.max_slots.saturating_sub(self.slots.len())
    }

    /// Check if every slot up to the cap holds a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free_capacity() == 0
    }

    /// Put a card into the first empty slot, or append a new slot.
    ///
    /// Returns the position used, or `None` if the board is full.
    pub fn place(&mut self, card: Card) -> Option<usize> {
        if let Some(pos) = self.slots.iter().position(Slot::is_empty) {
            self.slots[pos] = Slot::Occupied(card);
            return Some(pos);
        }
        if self.slots.len() < self.max_slots {
            self.slots.push(Slot::Occupied(card));
            return Some(self.slots.len() - 1);
        }
        None
    }

    /// Put a card at a specific existing position.
    ///
    /// Returns the previous contents, or `None` if the position is off the board.
    pub fn replace(&mut self, position: usize, card: Card) -> Option<Slot> {
        let slot = self.slots.get_mut(position)?;
        Some(std::mem::replace(slot, Slot::Occupied(card)))
    }

    /// Empty a position, returning the card that was there.
    pub fn clear_slot(&mut self, position: usize) -> Option<Card> {
        let slot = self.slots.get_mut(position)?;
        std::mem::replace(slot, Slot::Empty).card()
    }

    /// Iterate over `(position, card)` for occupied slots.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.card().map(|card| (pos, card)))
    }
}
