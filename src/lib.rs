//! # set-game
//!
//! Rule engine for the card game Set.
//!
//! ## Design Principles
//!
//! 1. **Owned engine**: A game is a plain `GameState` value created by the
//!    caller. No global state.
//!
//! 2. **Seedable randomness**: Every shuffle goes through `GameRng`, so a
//!    seed reproduces a whole game.
//!
//! 3. **Derived status**: Match status is computed once when a selection
//!    fills up and cleared with it. `is_match`, `has_and_is_match` and the
//!    view are derived on demand.
//!
//! 4. **Typed failures**: Every mutating call returns `GameResult`; a
//!    failed call changes nothing.
//!
//! ## Example
//!
//! ```
//! use set_game::{GameState, SelectOutcome};
//!
//! let mut game = GameState::new(42);
//! assert_eq!(game.visible_cards().len(), 12);
//! assert_eq!(game.cards_remaining(), 69);
//!
//! // Play the first Set on the board, if there is one
//! if let Some(&[a, b, c]) = game.sets_on_board().first() {
//!     game.select_card(a).unwrap();
//!     game.select_card(b).unwrap();
//!     assert_eq!(game.select_card(c), Ok(SelectOutcome::Matched));
//!     game.replace_matched_cards().unwrap();
//!     assert_eq!(game.score(), 3);
//! }
//! ```
//!
//! ## Modules
//!
//! - `cards`: Properties, cards, the deck
//! - `board`: Visible slots
//! - `rules`: The Set predicate and board scanning
//! - `core`: Configuration, errors, RNG, selection, the engine, views

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameResult,
    GameRng, GameRngState,
    MatchStatus, Selection, SelectionPhase,
    GameState, SetGame, SelectOutcome,
    GameView, Highlight, SlotView,
};

pub use crate::board::{Board, Slot};

pub use crate::cards::{Axis, Card, Deck, Property};

pub use crate::rules::{find_sets, is_matching_set, third_card};
