//! Game state: deck, board, selection and score.
//!
//! ## GameState
//!
//! Owns everything about one game and exposes the operations a controller
//! calls in response to user gestures:
//! - `select_card`: tap a board position
//! - `draw_cards`: deal three more cards (or replace a pending match)
//! - `replace_matched_cards`: swap a matched Set for fresh cards
//! - `new_game`: reshuffle and deal again
//!
//! Everything else (`is_match`, `has_and_is_match`, `selected_cards`,
//! `can_deal`) is derived on demand from the board and the selection.
//!
//! ## Selection rules
//!
//! - Tapping a selected card in a partial selection deselects it.
//! - The third card resolves the selection and applies the score delta.
//! - Tapping a new card after a resolved selection starts over with that
//!   card; a resolved *match* is replaced first, as `replace_matched_cards`
//!   would.
//! - Tapping one of the three resolved cards again does nothing.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::config::GameConfig;
use super::error::{GameError, GameResult};
use super::rng::{GameRng, GameRngState};
use super::selection::{MatchStatus, Selection, SelectionPhase, SELECTION_SIZE};
use super::view::GameView;
use crate::board::{Board, Slot};
use crate::cards::{Card, Deck};
use crate::rules::matching::{find_sets, is_matching_slice};

/// What a successful `select_card` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The card was added to a partial selection (or started a new one).
    Selected,
    /// The card was removed from a partial selection.
    Deselected,
    /// The card completed a Set.
    Matched,
    /// The card completed three cards that are not a Set.
    Mismatched,
    /// The card is part of a resolved selection; nothing changed.
    Unchanged,
}

/// Complete state of one game.
///
/// Cloning is cheap: the deck is a persistent vector and the board holds
/// at most `max_board_size` small `Copy` slots.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    board: Board,
    selection: Selection,
    score: i64,
}

/// The engine under its game name.
pub type SetGame = GameState;

impl Default for GameState {
    /// A game with the canonical rules, shuffled from OS entropy.
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl GameState {
    /// Start a game with the canonical rules and a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Start a game with custom rules and a fixed seed.
    #[must_use]
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a game with the canonical rules, seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameConfig::default(), GameRng::from_entropy())
    }

    /// Start a game from a caller-supplied deck, dealt in its given order.
    ///
    /// Later `new_game` calls shuffle a full deck as usual.
    #[must_use]
    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        let mut state = Self::empty(config, GameRng::from_entropy());
        state.deck = deck;
        state.deal_initial_board();
        state
    }

    fn with_rng(config: GameConfig, rng: GameRng) -> Self {
        let mut state = Self::empty(config, rng);
        state.new_game();
        state
    }

    fn empty(config: GameConfig, rng: GameRng) -> Self {
        let board = Board::new(config.max_board_size);
        Self {
            config,
            rng,
            deck: Deck::default(),
            board,
            selection: Selection::new(),
            score: 0,
        }
    }

    // === Lifecycle ===

    /// Throw away the current game, shuffle a fresh deck and deal.
    pub fn new_game(&mut self) {
        self.deck = Deck::new_shuffled(&mut self.rng);
        self.deal_initial_board();
    }

    fn deal_initial_board(&mut self) {
        self.board = Board::new(self.config.max_board_size);
        self.selection.clear();
        self.score = 0;

        // Never draw a card the board cannot take
        let deal = self.config.initial_board_size.min(self.board.free_capacity());
        for _ in 0..deal {
            let Ok(card) = self.deck.draw() else { break };
            self.board.place(card);
        }

        log::info!(
            "new game: {} cards dealt, {} remaining",
            self.board.occupied_count(),
            self.deck.cards_remaining()
        );
    }

    // === Selection ===

    /// Tap the card at a board position.
    ///
    /// Fails with `InvalidPosition` if the position is off the board or
    /// empty; the state is unchanged in that case.
    pub fn select_card(&mut self, position: usize) -> GameResult<SelectOutcome> {
        let card = self
            .board
            .card_at(position)
            .ok_or(GameError::InvalidPosition { position })?;

        match self.selection.phase() {
            SelectionPhase::Resolved => {
                if self.selection.contains(position) {
                    return Ok(SelectOutcome::Unchanged);
                }
                if self.has_and_is_match() {
                    self.replace_matched_cards()?;
                } else {
                    self.selection.clear();
                }
            }
            SelectionPhase::Partial if self.selection.contains(position) => {
                self.selection.remove(position);
                log::debug!("deselected {} at {}", card, position);
                return Ok(SelectOutcome::Deselected);
            }
            SelectionPhase::Empty | SelectionPhase::Partial => {}
        }

        let board = &self.board;
        let status = self.selection.push(position, |positions| {
            let cards: SmallVec<[Card; SELECTION_SIZE]> =
                positions.iter().filter_map(|&p| board.card_at(p)).collect();
            is_matching_slice(&cards)
        });
        log::debug!("selected {} at {}", card, position);

        Ok(match status {
            MatchStatus::Unresolved => SelectOutcome::Selected,
            MatchStatus::Match => {
                self.score += self.config.match_bonus;
                log::debug!("match at {:?}, score {}", self.selection.positions(), self.score);
                SelectOutcome::Matched
            }
            MatchStatus::Mismatch => {
                self.score -= self.config.mismatch_penalty;
                log::debug!("mismatch at {:?}, score {}", self.selection.positions(), self.score);
                SelectOutcome::Mismatched
            }
        })
    }

    // === Dealing ===

    /// Deal `draw_count` more cards onto the board.
    ///
    /// With a matched selection pending this replaces the matched cards
    /// instead. Otherwise each card fills the first empty slot, or a new
    /// slot up to the cap. A mismatched selection is cleared; a partial
    /// one is kept.
    ///
    /// Fails without drawing anything if the deck holds fewer than
    /// `draw_count` cards (`DeckExhausted`) or the board has no room for
    /// all of them (`BoardFull`).
    ///
    /// Returns the positions that received cards.
    pub fn draw_cards(&mut self) -> GameResult<Vec<usize>> {
        if self.has_and_is_match() {
            return self.replace_matched_cards();
        }

        let count = self.config.draw_count;
        let remaining = self.deck.cards_remaining();
        if remaining < count {
            return Err(GameError::DeckExhausted { remaining });
        }
        if self.board.free_capacity() < count {
            return Err(GameError::BoardFull);
        }

        if self.selection.status() == MatchStatus::Mismatch {
            self.selection.clear();
        }

        let mut filled = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self.deck.draw()?;
            let position = self.board.place(card).ok_or(GameError::BoardFull)?;
            filled.push(position);
        }

        log::debug!("dealt into {:?}, {} remaining", filled, self.deck.cards_remaining());
        Ok(filled)
    }

    /// Replace the cards of a matched selection.
    ///
    /// Each matched position, in ascending order, gets the next card from
    /// the deck, or becomes empty once the deck runs out. Clears the
    /// selection; the score was already applied when the match resolved.
    ///
    /// Returns the positions that received new cards.
    pub fn replace_matched_cards(&mut self) -> GameResult<Vec<usize>> {
        if !self.has_and_is_match() {
            return Err(GameError::NoMatchToReplace);
        }

        let mut matched: SmallVec<[usize; SELECTION_SIZE]> =
            SmallVec::from_slice(self.selection.positions());
        matched.sort_unstable();
        self.selection.clear();

        let mut refilled = Vec::with_capacity(matched.len());
        for position in matched {
            match self.deck.draw() {
                Ok(card) => {
                    self.board.replace(position, card);
                    refilled.push(position);
                }
                Err(_) => {
                    self.board.clear_slot(position);
                }
            }
        }

        log::debug!("replaced matched cards at {:?}, {} remaining", refilled, self.deck.cards_remaining());
        Ok(refilled)
    }

    // === Observations ===

    /// Game rules in effect.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current score. May be negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// The undealt cards.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Shorthand for `deck().cards_remaining()`.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Visible slots, in position order.
    #[must_use]
    pub fn visible_cards(&self) -> &[Slot] {
        self.board.slots()
    }

    /// Selected positions, in the order they were tapped.
    #[must_use]
    pub fn selected_positions(&self) -> &[usize] {
        self.selection.positions()
    }

    /// The selected cards.
    #[must_use]
    pub fn selected_cards(&self) -> FxHashSet<Card> {
        self.selection
            .positions()
            .iter()
            .filter_map(|&p| self.board.card_at(p))
            .collect()
    }

    /// Resolution of the current selection.
    #[must_use]
    pub fn match_status(&self) -> MatchStatus {
        self.selection.status()
    }

    /// Current selection phase.
    #[must_use]
    pub fn selection_phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    /// `None` until three cards are selected, then whether they match.
    #[must_use]
    pub fn is_match(&self) -> Option<bool> {
        self.selection.status().as_bool()
    }

    /// Check if a resolved, matching selection is pending.
    #[must_use]
    pub fn has_and_is_match(&self) -> bool {
        self.selection.status() == MatchStatus::Match
    }

    /// Check if a deal (or replacement) would currently do something.
    ///
    /// False once the deck is empty, or when the board has no room and no
    /// match is waiting to be replaced.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        if self.deck.is_empty() {
            return false;
        }
        if self.has_and_is_match() {
            return true;
        }
        let count = self.config.draw_count;
        self.deck.cards_remaining() >= count && self.board.free_capacity() >= count
    }

    /// Every Set currently on the board, as ascending position triples.
    #[must_use]
    pub fn sets_on_board(&self) -> Vec<[usize; 3]> {
        find_sets(&self.board)
    }

    /// RNG position, enough to reproduce every future shuffle.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Read-only snapshot for a presentation layer.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_state(self)
    }
}
