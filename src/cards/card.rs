//! Card values.
//!
//! A `Card` is an immutable 4-tuple of `Property` values, one per `Axis`.
//! There are exactly 3^4 = 81 distinct cards, each with a dense encoding
//! in `0..81`.
//!
//! ```
//! use set_game::cards::{Axis, Card, Property};
//!
//! let card = Card::new(Property::One, Property::Two, Property::Three, Property::One);
//! assert_eq!(card.property(Axis::Shape), Property::Three);
//! assert_eq!(Card::from_index(card.index()), Some(card));
//! assert_eq!(Card::all().count(), Card::COUNT);
//! ```

use serde::{Deserialize, Serialize};

use super::property::{Axis, Property};

/// A single Set card.
///
/// Equality is structural: two cards are equal iff all four properties are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Property,
    pub shading: Property,
    pub shape: Property,
    pub number: Property,
}

impl Card {
    /// Number of distinct cards.
    pub const COUNT: usize = 81;

    /// Create a card from its four properties.
    #[must_use]
    pub const fn new(color: Property, shading: Property, shape: Property, number: Property) -> Self {
        Self {
            color,
            shading,
            shape,
            number,
        }
    }

    /// Get the property on one axis.
    #[must_use]
    pub const fn property(&self, axis: Axis) -> Property {
        match axis {
            Axis::Color => self.color,
            Axis::Shading => self.shading,
            Axis::Shape => self.shape,
            Axis::Number => self.number,
        }
    }

    /// All four properties in `Axis::ALL` order.
    #[must_use]
    pub const fn properties(&self) -> [Property; 4] {
        [self.color, self.shading, self.shape, self.number]
    }

    /// Dense encoding in `0..81`, base 3 with color as the most
    /// significant digit.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.color.index() * 27
            + self.shading.index() * 9
            + self.shape.index() * 3
            + self.number.index()
    }

    /// Inverse of `index`. Returns `None` for values outside `0..81`.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        if index as usize >= Self::COUNT {
            return None;
        }
        Some(Self {
            color: Property::from_index(index / 27)?,
            shading: Property::from_index(index / 9 % 3)?,
            shape: Property::from_index(index / 3 % 3)?,
            number: Property::from_index(index % 3)?,
        })
    }

    /// Every card, by nested enumeration over the four axes.
    ///
    /// The order matches `index()`: the n-th card yielded has index n.
    pub fn all() -> impl Iterator<Item = Card> {
        Property::ALL.into_iter().flat_map(|color| {
            Property::ALL.into_iter().flat_map(move |shading| {
                Property::ALL.into_iter().flat_map(move |shape| {
                    Property::ALL
                        .into_iter()
                        .map(move |number| Card::new(color, shading, shape, number))
                })
            })
        })
    }

    /// The unique card that completes a Set with `self` and `other`.
    ///
    /// Returns `self` again when `other == self`.
    #[must_use]
    pub const fn third(&self, other: &Card) -> Card {
        Card {
            color: Property::third(self.color, other.color),
            shading: Property::third(self.shading, other.shading),
            shape: Property::third(self.shape, other.shape),
            number: Property::third(self.number, other.number),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card({},{},{},{})",
            self.color, self.shading, self.shape, self.number
        )
    }
}
