//! Game configuration.
//!
//! `GameConfig` holds the numeric rules of a game: board sizes, deal size
//! and score deltas. The defaults are the canonical ones:
//!
//! | Setting | Default |
//! |---------|---------|
//! | `initial_board_size` | 12 |
//! | `max_board_size` | 24 |
//! | `draw_count` | 3 |
//! | `match_bonus` | 3 |
//! | `mismatch_penalty` | 5 |
//!
//! The penalty is deliberately larger than the bonus.

use serde::{Deserialize, Serialize};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt at the start of a game.
    pub initial_board_size: usize,

    /// Maximum number of board slots.
    pub max_board_size: usize,

    /// Cards dealt by one `draw_cards` call.
    pub draw_count: usize,

    /// Points added for a matching selection.
    pub match_bonus: i64,

    /// Points subtracted for a mismatched selection.
    pub mismatch_penalty: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_board_size: 12,
            max_board_size: 24,
            draw_count: 3,
            match_bonus: 3,
            mismatch_penalty: 5,
        }
    }
}

impl GameConfig {
    /// Create the canonical configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards dealt at game start.
    ///
    /// Panics if it exceeds the current maximum board size.
    #[must_use]
    pub fn with_initial_board_size(mut self, size: usize) -> Self {
        assert!(
            size <= self.max_board_size,
            "Initial board size must not exceed max board size"
        );
        self.initial_board_size = size;
        self
    }

    /// Set the maximum number of board slots.
    ///
    /// Panics if it is smaller than the initial board size.
    #[must_use]
    pub fn with_max_board_size(mut self, size: usize) -> Self {
        assert!(
            size >= self.initial_board_size,
            "Max board size must be at least the initial board size"
        );
        self.max_board_size = size;
        self
    }

    /// Set the points awarded for a match.
    #[must_use]
    pub fn with_match_bonus(mut self, bonus: i64) -> Self {
        self.match_bonus = bonus;
        self
    }

    /// Set the points deducted for a mismatch.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, penalty: i64) -> Self {
        self.mismatch_penalty = penalty;
        self
    }
}
