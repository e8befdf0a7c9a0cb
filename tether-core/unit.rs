use crate::range::TextRange;

/// Granularity used to expand a point into a range or to move by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
  Character,
  Word,
  Line,
  Paragraph,
}

/// A document that knows its own unit boundaries.
pub trait TextUnits {
  fn len_chars(&self) -> usize;

  /// The `unit` containing `pos`.
  ///
  /// At the end of the document (or on an empty unit) this is a collapsed
  /// range at `pos`.
  fn unit_at(&self, pos: usize, unit: Unit) -> TextRange;

  /// Text covered by `range`, clamped to the document.
  fn text_in(&self, range: TextRange) -> String;

  /// Moves `pos` by `count` units, stopping at the document bounds.
  fn move_by(&self, pos: usize, unit: Unit, count: isize) -> usize {
    let len = self.len_chars();
    let mut pos = pos.min(len);
    if count >= 0 {
      for _ in 0..count {
        if pos >= len {
          break;
        }
        let next = self.unit_at(pos, unit).end;
        pos = if next > pos { next } else { pos + 1 };
      }
    } else {
      for _ in 0..count.unsigned_abs() {
        if pos == 0 {
          break;
        }
        pos = self.unit_at(pos - 1, unit).start.min(pos - 1);
      }
    }
    pos
  }
}
