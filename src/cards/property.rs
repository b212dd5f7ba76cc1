//! Card properties and the four axes they are drawn along.
//!
//! Every card carries one `Property` per `Axis`. The three property values
//! carry no meaning beyond identity: the presentation layer decides whether
//! `Property::Two` on the color axis is green or purple.

use serde::{Deserialize, Serialize};

/// One of the three values a card can take on a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    One,
    Two,
    Three,
}

impl Property {
    /// All property values in canonical order.
    pub const ALL: [Property; 3] = [Property::One, Property::Two, Property::Three];

    /// Dense index (0..3) used for card encoding.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Property::One => 0,
            Property::Two => 1,
            Property::Three => 2,
        }
    }

    /// Inverse of `index`. Returns `None` for values outside 0..3.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Property::One),
            1 => Some(Property::Two),
            2 => Some(Property::Three),
            _ => None,
        }
    }

    /// The value that makes `(a, b, third)` valid on one axis.
    ///
    /// Equal inputs need the same value again; distinct inputs need the
    /// remaining one.
    ///
    /// ```
    /// use set_game::cards::Property;
    ///
    /// assert_eq!(Property::third(Property::One, Property::One), Property::One);
    /// assert_eq!(Property::third(Property::One, Property::Three), Property::Two);
    /// ```
    #[must_use]
    pub const fn third(a: Property, b: Property) -> Property {
        // Indices of a valid triple always sum to 0 mod 3.
        let idx = (6 - a.index() - b.index()) % 3;
        match Property::from_index(idx) {
            Some(p) => p,
            None => a,
        }
    }

    /// Check whether three values are valid together on one axis:
    /// all equal or all distinct.
    #[must_use]
    pub fn is_valid_triple(a: Property, b: Property, c: Property) -> bool {
        let all_equal = a == b && b == c;
        let all_distinct = a != b && b != c && a != c;
        all_equal || all_distinct
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// The four independent axes of a card.
///
/// Named after the canonical game; the engine treats them uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Color,
    Shading,
    Shape,
    Number,
}

impl Axis {
    /// All axes in encoding order.
    pub const ALL: [Axis; 4] = [Axis::Color, Axis::Shading, Axis::Shape, Axis::Number];
}
