//! Text positions and ranges shared by the tether crates.
//!
//! Everything here is independent of any screen reader: a [`TextRange`] is a
//! plain half-open span of character offsets, and [`TextUnits`] is the small
//! contract a document has to fulfil so ranges can be expanded or moved by a
//! reading [`Unit`]. [`RopeText`] is the reference implementation.

pub mod range;
pub mod text;
pub mod unit;

pub use range::{
  Endpoint,
  TextRange,
};
pub use text::RopeText;
pub use unit::{
  TextUnits,
  Unit,
};
