//! Core engine types: configuration, errors, RNG, selection, state.
//!
//! `GameState` is the engine. Everything else in this module is a piece
//! it owns or a value it hands back to callers.

pub mod config;
pub mod error;
pub mod rng;
pub mod selection;
pub mod state;
pub mod view;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use rng::{GameRng, GameRngState};
pub use selection::{MatchStatus, Selection, SelectionPhase, SELECTION_SIZE};
pub use state::{GameState, SelectOutcome, SetGame};
pub use view::{GameView, Highlight, SlotView};
