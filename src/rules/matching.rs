//! The Set rule.
//!
//! Three cards form a Set iff, on every axis independently, their values
//! are all equal or all distinct. "Two the same, one different" on any
//! axis breaks the Set.

use crate::board::Board;
use crate::cards::{Axis, Card, Property};

/// Check whether three cards form a Set.
///
/// Pure and order-independent.
///
/// ```
/// use set_game::cards::{Card, Property::*};
/// use set_game::is_matching_set;
///
/// let a = Card::new(One, One, One, One);
/// let b = Card::new(One, One, One, Two);
/// let c = Card::new(One, One, One, Three);
/// assert!(is_matching_set(&a, &b, &c));
/// assert!(!is_matching_set(&a, &a, &b));
/// ```
#[must_use]
pub fn is_matching_set(a: &Card, b: &Card, c: &Card) -> bool {
    Axis::ALL
        .iter()
        .all(|&axis| Property::is_valid_triple(a.property(axis), b.property(axis), c.property(axis)))
}

/// Check three cards given as a slice. Anything but exactly three is not a Set.
#[must_use]
pub fn is_matching_slice(cards: &[Card]) -> bool {
    match cards {
        [a, b, c] => is_matching_set(a, b, c),
        _ => false,
    }
}

/// The card that completes a Set with `a` and `b`.
///
/// For distinct `a` and `b` the result is distinct from both.
#[must_use]
pub fn third_card(a: &Card, b: &Card) -> Card {
    a.third(b)
}

/// Every Set among the occupied slots, as ascending position triples.
///
/// Pairs are enumerated and the completing card looked up by encoding,
/// so the scan is quadratic in the number of visible cards.
#[must_use]
pub fn find_sets(board: &Board) -> Vec<[usize; 3]> {
    let mut position_of = [None; Card::COUNT];
    for (pos, card) in board.occupied() {
        position_of[card.index() as usize] = Some(pos);
    }

    let occupied: Vec<(usize, Card)> = board.occupied().collect();
    let mut sets = Vec::new();

    for (i, &(pos_a, card_a)) in occupied.iter().enumerate() {
        for &(pos_b, card_b) in &occupied[i + 1..] {
            let needed = third_card(&card_a, &card_b);
            if let Some(pos_c) = position_of[needed.index() as usize] {
                // Count each triple once, from its two lowest positions
                if pos_c > pos_b {
                    sets.push([pos_a, pos_b, pos_c]);
                }
            }
        }
    }

    sets
}
