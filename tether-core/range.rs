//! Half-open text ranges.
//!
//! A [`TextRange`] covers the characters `start..end` of a document. When
//! `start == end` the range is collapsed: a caret or review point sitting
//! between two characters.
//!
//! ```text
//! start=2, end=7: "he[llo w)orld"
//! start=5, end=5: "hello|world"
//! ```
//!
//! Ranges are `Copy`, so every copy is an independent snapshot. Operations
//! that need to know about words or lines take a [`TextUnits`] implementation.

use crate::unit::{
  TextUnits,
  Unit,
};

/// One end of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  Start,
  End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
  pub start: usize,
  pub end:   usize,
}

impl TextRange {
  /// Builds a range, swapping the bounds if they are out of order.
  pub fn new(start: usize, end: usize) -> Self {
    if start <= end {
      Self { start, end }
    } else {
      Self {
        start: end,
        end:   start,
      }
    }
  }

  #[inline]
  pub fn point(pos: usize) -> Self {
    Self::new(pos, pos)
  }

  #[inline]
  #[must_use]
  pub fn is_collapsed(&self) -> bool {
    self.start == self.end
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.end - self.start
  }

  #[inline]
  #[must_use]
  pub fn endpoint(&self, endpoint: Endpoint) -> usize {
    match endpoint {
      Endpoint::Start => self.start,
      Endpoint::End => self.end,
    }
  }

  /// Collapses the range onto one of its ends.
  #[inline]
  #[must_use]
  pub fn collapse(self, endpoint: Endpoint) -> Self {
    Self::point(self.endpoint(endpoint))
  }

  #[inline]
  pub fn contains_range(&self, other: &Self) -> bool {
    self.start <= other.start && self.end >= other.end
  }

  /// Half-open overlap test.
  ///
  /// A range that ends exactly where `other` starts (or starts exactly where
  /// it ends) does not overlap it. A collapsed range overlaps only when it
  /// sits strictly inside `other`.
  #[inline]
  pub fn overlaps(&self, other: &Self) -> bool {
    self.start < other.end && self.end > other.start
  }

  /// Restricts the range to `bounds`.
  ///
  /// The result never leaves `bounds`; a range entirely outside of them
  /// collapses onto the nearest bound.
  #[must_use]
  pub fn clip_to(&self, bounds: &Self) -> Self {
    let start = self.start.clamp(bounds.start, bounds.end);
    let end = self.end.clamp(bounds.start, bounds.end);
    Self::new(start, end)
  }

  /// Expands the range to the `unit` containing its start.
  #[must_use]
  pub fn expand<T: TextUnits + ?Sized>(&self, text: &T, unit: Unit) -> Self {
    text.unit_at(self.start, unit)
  }

  /// Moves one endpoint by `count` units, keeping the range ordered.
  ///
  /// Moving the start past the end drags the end along (and vice versa), so
  /// the result is always a valid range.
  #[must_use]
  pub fn move_endpoint<T: TextUnits + ?Sized>(
    &self,
    text: &T,
    unit: Unit,
    count: isize,
    endpoint: Endpoint,
  ) -> Self {
    let moved = text.move_by(self.endpoint(endpoint), unit, count);
    match endpoint {
      Endpoint::Start if moved > self.end => Self::point(moved),
      Endpoint::Start => Self::new(moved, self.end),
      Endpoint::End if moved < self.start => Self::point(moved),
      Endpoint::End => Self::new(self.start, moved),
    }
  }
}
