//! Game rules.
//!
//! The engine delegates the combinatorial Set rule to this module so it
//! can be tested and benchmarked without a game around it.

pub mod matching;

pub use matching::{find_sets, is_matching_set, is_matching_slice, third_card};
