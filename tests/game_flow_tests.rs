//! Whole-game tests.
//!
//! These tests drive `GameState` the way a front end would:
//! - Deal, tap, resolve, replace
//! - Deal until the deck or the board runs out
//! - Play complete games using the board scan as a hint

use rustc_hash::FxHashSet;
use set_game::cards::Property::*;
use set_game::{
    Card, Deck, GameConfig, GameError, GameState, MatchStatus, SelectOutcome, SelectionPhase, Slot,
};

fn seeded_example_deck() -> Deck {
    let first = [
        Card::new(One, One, One, One),
        Card::new(One, One, One, Two),
        Card::new(One, One, One, Three),
    ];
    let rest = Card::all().filter(|c| !first.contains(c));
    Deck::from_cards(first.into_iter().chain(rest))
}

/// No card appears twice across the board and the deck.
fn assert_no_duplicates(state: &GameState) {
    let mut seen = FxHashSet::default();
    for slot in state.visible_cards() {
        if let Slot::Occupied(card) = slot {
            assert!(seen.insert(*card), "{} appears twice", card);
        }
    }
    for card in state.deck().iter() {
        assert!(seen.insert(*card), "{} appears twice", card);
    }
}

/// A new game deals twelve cards and leaves 69 in the deck.
#[test]
fn test_new_game_invariants() {
    for seed in 0..20 {
        let state = GameState::new(seed);
        assert_eq!(state.board().occupied_count(), 12);
        assert_eq!(state.score(), 0);
        assert!(state.selected_cards().is_empty());
        assert_eq!(state.deck().cards_remaining(), 69);
        assert_no_duplicates(&state);
    }
}

/// Different seeds deal different boards; the same seed deals the same one.
#[test]
fn test_seed_controls_deal() {
    let a = GameState::new(100);
    let b = GameState::new(100);
    let c = GameState::new(101);

    assert_eq!(a.visible_cards(), b.visible_cards());
    assert_ne!(a.visible_cards(), c.visible_cards());
}

/// The first three dealt cards of the example deck form a Set.
#[test]
fn test_seeded_example_matches() {
    let mut state = GameState::with_deck(GameConfig::default(), seeded_example_deck());

    assert_eq!(state.select_card(0), Ok(SelectOutcome::Selected));
    assert_eq!(state.select_card(1), Ok(SelectOutcome::Selected));
    assert_eq!(state.select_card(2), Ok(SelectOutcome::Matched));

    assert_eq!(state.is_match(), Some(true));
    assert!(state.has_and_is_match());
    assert_eq!(state.score(), 3);
    assert_eq!(state.selection_phase(), SelectionPhase::Resolved);
}

/// Replacing a match refills the same positions and keeps the score.
#[test]
fn test_replace_after_match() {
    let mut state = GameState::with_deck(GameConfig::default(), seeded_example_deck());
    for pos in 0..3 {
        state.select_card(pos).unwrap();
    }
    let matched = state.selected_cards();

    let refilled = state.replace_matched_cards().unwrap();
    assert_eq!(refilled, vec![0, 1, 2]);
    assert_eq!(state.visible_cards().len(), 12);
    assert_eq!(state.cards_remaining(), 66);
    assert!(state.selected_cards().is_empty());
    assert_eq!(state.match_status(), MatchStatus::Unresolved);
    assert_eq!(state.score(), 3);

    for slot in &state.visible_cards()[..3] {
        let card = slot.card().unwrap();
        assert!(!matched.contains(&card));
    }
    assert_no_duplicates(&state);
}

/// A mismatch costs the penalty and the next tap starts a fresh selection.
#[test]
fn test_mismatch_then_new_selection() {
    let mut state = GameState::with_deck(GameConfig::default(), Deck::unshuffled());

    // (1,1,1,1), (1,1,1,2), (1,1,2,1)
    state.select_card(0).unwrap();
    state.select_card(1).unwrap();
    assert_eq!(state.select_card(3), Ok(SelectOutcome::Mismatched));
    assert_eq!(state.is_match(), Some(false));
    assert_eq!(state.score(), -5);

    assert_eq!(state.select_card(0), Ok(SelectOutcome::Unchanged));
    assert_eq!(state.select_card(11), Ok(SelectOutcome::Selected));
    assert_eq!(state.selected_positions(), &[11]);
    assert_eq!(state.is_match(), None);
    assert_eq!(state.score(), -5);
}

/// The board grows to 24 slots and then refuses to grow further.
#[test]
fn test_deal_to_board_cap() {
    let mut state = GameState::new(8);

    for round in 1..=4 {
        assert!(state.can_deal());
        state.draw_cards().unwrap();
        assert_eq!(state.visible_cards().len(), 12 + 3 * round);
    }

    assert!(!state.can_deal());
    assert_eq!(state.draw_cards(), Err(GameError::BoardFull));
    assert_eq!(state.cards_remaining(), 57);
    assert_no_duplicates(&state);
}

/// With fewer than three cards left a deal fails and draws nothing.
#[test]
fn test_deck_exhausted() {
    let deck = Deck::from_cards(Card::all().take(13));
    let mut state = GameState::with_deck(GameConfig::default(), deck);

    assert_eq!(state.cards_remaining(), 1);
    assert!(!state.can_deal());
    assert_eq!(
        state.draw_cards(),
        Err(GameError::DeckExhausted { remaining: 1 })
    );
    assert_eq!(state.cards_remaining(), 1);
    assert_eq!(state.visible_cards().len(), 12);
}

/// With a short deck only some matched positions are refilled.
#[test]
fn test_replace_with_short_deck() {
    let deck = Deck::from_cards(Card::all().take(13));
    let mut state = GameState::with_deck(GameConfig::default(), deck);
    for pos in 0..3 {
        state.select_card(pos).unwrap();
    }
    assert!(state.has_and_is_match());

    assert_eq!(state.replace_matched_cards(), Ok(vec![0]));
    assert!(state.visible_cards()[0].is_occupied());
    assert_eq!(state.visible_cards()[1], Slot::Empty);
    assert_eq!(state.visible_cards()[2], Slot::Empty);
    assert_eq!(state.board().occupied_count(), 10);
    assert_eq!(state.cards_remaining(), 0);

    assert_eq!(
        state.select_card(2),
        Err(GameError::InvalidPosition { position: 2 })
    );
}

/// Play whole games by always taking the first Set on the board and
/// dealing when there is none. Invariants must hold at every step.
#[test]
fn test_full_games_with_hints() {
    for seed in 0..10 {
        let mut state = GameState::new(seed);
        let mut matches = 0;

        for _ in 0..200 {
            assert!(state.selected_positions().len() <= 3);
            assert_no_duplicates(&state);

            if let Some(&[a, b, c]) = state.sets_on_board().first() {
                state.select_card(a).unwrap();
                state.select_card(b).unwrap();
                assert_eq!(state.select_card(c), Ok(SelectOutcome::Matched));
                matches += 1;
                assert_eq!(state.score(), 3 * matches);
                state.replace_matched_cards().unwrap();
            } else if state.can_deal() {
                state.draw_cards().unwrap();
            } else {
                break;
            }
        }

        assert!(matches >= 10, "seed {} only found {} sets", seed, matches);
        assert!(state.visible_cards().len() <= 24);
    }
}

/// `new_game` restores a valid instance from any state.
#[test]
fn test_new_game_after_play() {
    let mut state = GameState::new(77);
    state.draw_cards().unwrap();
    state.select_card(0).unwrap();
    state.select_card(1).unwrap();

    state.new_game();
    assert_eq!(state.visible_cards().len(), 12);
    assert_eq!(state.board().occupied_count(), 12);
    assert_eq!(state.cards_remaining(), 69);
    assert_eq!(state.score(), 0);
    assert_eq!(state.selection_phase(), SelectionPhase::Empty);
}
