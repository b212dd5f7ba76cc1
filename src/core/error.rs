//! Errors reported by the engine.
//!
//! Every variant is an expected condition of normal play (tapping an empty
//! slot, drawing near the end of the deck). None of them leave the game in
//! an invalid state: a failed operation changes nothing.

/// Recoverable failure of a game operation.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The position is off the board or its slot is empty.
    #[error("no card at board position {position}")]
    InvalidPosition { position: usize },

    /// A single draw was attempted from an empty deck.
    #[error("deck is empty")]
    EmptyDeck,

    /// Not enough cards remain for a full deal.
    #[error("deck exhausted: {remaining} cards remaining")]
    DeckExhausted { remaining: usize },

    /// The board has no room for another deal.
    #[error("board is full")]
    BoardFull,

    /// Replacement was requested without a matched selection.
    #[error("no matched set to replace")]
    NoMatchToReplace,
}

/// Result alias for engine operations.
pub type GameResult<T> = Result<T, GameError>;
