//! Board of visible cards.
//!
//! ## Key Types
//!
//! - `Slot`: One position, `Occupied(Card)` or `Empty`
//! - `Board`: Ordered slots with a cap; positions are stable identifiers

pub mod layout;
pub mod slot;

pub use layout::Board;
pub use slot::Slot;
