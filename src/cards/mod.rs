//! Card model: properties, cards and the deck.
//!
//! ## Key Types
//!
//! - `Property`: One of three values on a single axis
//! - `Axis`: Color, shading, shape, number
//! - `Card`: Immutable 4-tuple of properties (81 in total)
//! - `Deck`: Ordered remaining cards, drawn from the front

pub mod card;
pub mod deck;
pub mod property;

pub use card::Card;
pub use deck::Deck;
pub use property::{Axis, Property};
