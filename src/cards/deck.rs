//! The deck of undealt cards.
//!
//! Cards are kept in draw order: `draw` takes from the front. Backed by an
//! `im::Vector` so cloning a whole game state stays O(1).

use im::Vector;

use super::card::Card;
use crate::core::error::{GameError, GameResult};
use crate::core::rng::GameRng;

/// Ordered sequence of remaining cards. Never contains duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// All 81 cards in canonical (unshuffled) order.
    #[must_use]
    pub fn unshuffled() -> Self {
        Self {
            cards: Card::all().collect(),
        }
    }

    /// All 81 cards in uniformly random order.
    #[must_use]
    pub fn new_shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a deck that yields `cards` in the given order.
    ///
    /// Duplicates after the first occurrence are dropped.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut seen = [false; Card::COUNT];
        let cards = cards
            .into_iter()
            .filter(|card| !std::mem::replace(&mut seen[card.index() as usize], true))
            .collect();
        Self { cards }
    }

    /// Remove and return the next card.
    pub fn draw(&mut self) -> GameResult<Card> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    /// Look at the next card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Number of cards left.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Check if no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}
