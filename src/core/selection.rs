//! Card selection and match resolution.
//!
//! A `Selection` holds up to three board positions and the `MatchStatus`
//! computed when the third one was added. The status is only ever set by
//! `push` reaching three and cleared together with the positions, so it
//! cannot drift out of sync with them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Largest selection size.
pub const SELECTION_SIZE: usize = 3;

/// Outcome of a full selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Fewer than three cards selected.
    #[default]
    Unresolved,
    /// Three cards selected and they form a Set.
    Match,
    /// Three cards selected and they do not.
    Mismatch,
}

impl MatchStatus {
    /// `None` while unresolved, otherwise whether it matched.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            MatchStatus::Unresolved => None,
            MatchStatus::Match => Some(true),
            MatchStatus::Mismatch => Some(false),
        }
    }
}

/// How a new tap is interpreted, derived from selection size and status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Nothing selected.
    Empty,
    /// One or two cards selected.
    Partial,
    /// Three cards selected and resolved.
    Resolved,
}

/// Selected board positions plus their cached resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    positions: SmallVec<[usize; SELECTION_SIZE]>,
    status: MatchStatus,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected positions, in the order they were selected.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of selected positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check if a position is selected.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Cached resolution.
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        match (self.positions.len(), self.status) {
            (0, _) => SelectionPhase::Empty,
            (_, MatchStatus::Unresolved) => SelectionPhase::Partial,
            _ => SelectionPhase::Resolved,
        }
    }

    /// Add a position. `resolve` is called with the three positions when
    /// the selection becomes full and decides the status.
    ///
    /// Panics if the selection is already full or already contains the
    /// position; callers check `phase` and `contains` first.
    pub fn push(&mut self, position: usize, resolve: impl FnOnce(&[usize]) -> bool) -> MatchStatus {
        assert!(self.positions.len() < SELECTION_SIZE, "Selection is already full");
        assert!(!self.contains(position), "Position {} already selected", position);

        self.positions.push(position);
        if self.positions.len() == SELECTION_SIZE {
            self.status = if resolve(&self.positions) {
                MatchStatus::Match
            } else {
                MatchStatus::Mismatch
            };
        }
        self.status
    }

    /// Remove a position from an unresolved selection.
    ///
    /// Returns true if it was selected.
    pub fn remove(&mut self, position: usize) -> bool {
        debug_assert_eq!(self.status, MatchStatus::Unresolved);
        if let Some(idx) = self.positions.iter().position(|&p| p == position) {
            self.positions.remove(idx);
            true
        } else {
            false
        }
    }

    /// Drop every position and the cached status.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.status = MatchStatus::Unresolved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases() {
        let mut sel = Selection::new();
        assert_eq!(sel.phase(), SelectionPhase::Empty);

        sel.push(4, |_| true);
        assert_eq!(sel.phase(), SelectionPhase::Partial);
        sel.push(7, |_| true);
        assert_eq!(sel.phase(), SelectionPhase::Partial);

        let status = sel.push(1, |_| false);
        assert_eq!(status, MatchStatus::Mismatch);
        assert_eq!(sel.phase(), SelectionPhase::Resolved);
        assert_eq!(sel.status().as_bool(), Some(false));
    }

    #[test]
    fn test_resolve_sees_all_positions() {
        let mut sel = Selection::new();
        sel.push(2, |_| unreachable!());
        sel.push(0, |_| unreachable!());
        let status = sel.push(9, |positions| positions == [2, 0, 9]);
        assert_eq!(status, MatchStatus::Match);
    }

    #[test]
    fn test_remove() {
        let mut sel = Selection::new();
        sel.push(3, |_| true);
        sel.push(5, |_| true);

        assert!(sel.remove(3));
        assert!(!sel.remove(3));
        assert_eq!(sel.positions(), &[5]);
    }

    #[test]
    fn test_clear_resets_status() {
        let mut sel = Selection::new();
        for pos in 0..3 {
            sel.push(pos, |_| true);
        }
        assert_eq!(sel.status(), MatchStatus::Match);

        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.status(), MatchStatus::Unresolved);
        assert_eq!(sel.phase(), SelectionPhase::Empty);
    }

    #[test]
    #[should_panic(expected = "Selection is already full")]
    fn test_push_when_full() {
        let mut sel = Selection::new();
        for pos in 0..4 {
            sel.push(pos, |_| true);
        }
    }
}
