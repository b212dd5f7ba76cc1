//! Read-only snapshot of a game for presentation layers.
//!
//! A `GameView` carries everything a front end needs to draw one frame:
//! each slot's card and highlight, the score, the remaining count, and
//! whether the deal affordance should be enabled. Mapping properties to
//! colors and glyphs is left to the front end.

use serde::{Deserialize, Serialize};

use super::selection::MatchStatus;
use super::state::GameState;
use crate::cards::Card;

/// Highlight of a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    /// Not selected.
    None,
    /// Selected, selection not yet resolved.
    Selected,
    /// Part of a resolved match.
    Matched,
    /// Part of a resolved mismatch.
    Mismatched,
}

/// One board position in a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub position: usize,
    /// `None` for an empty slot.
    pub card: Option<Card>,
    pub highlight: Highlight,
}

/// Snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub slots: Vec<SlotView>,
    pub score: i64,
    pub cards_remaining: usize,
    pub match_status: MatchStatus,
    pub can_deal: bool,
}

impl GameView {
    /// Build a view of the given state.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let selected = state.selected_positions();
        let selected_highlight = match state.match_status() {
            MatchStatus::Unresolved => Highlight::Selected,
            MatchStatus::Match => Highlight::Matched,
            MatchStatus::Mismatch => Highlight::Mismatched,
        };

        let slots = state
            .visible_cards()
            .iter()
            .enumerate()
            .map(|(position, slot)| {
                let card = slot.card();
                let highlight = if card.is_some() && selected.contains(&position) {
                    selected_highlight
                } else {
                    Highlight::None
                };
                SlotView {
                    position,
                    card,
                    highlight,
                }
            })
            .collect();

        Self {
            slots,
            score: state.score(),
            cards_remaining: state.cards_remaining(),
            match_status: state.match_status(),
            can_deal: state.can_deal(),
        }
    }

    /// Positions currently highlighted with anything but `Highlight::None`.
    #[must_use]
    pub fn highlighted(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter(|s| s.highlight != Highlight::None)
            .map(|s| s.position)
            .collect()
    }
}
