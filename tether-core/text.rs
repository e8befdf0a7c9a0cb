//! Rope-backed document implementing [`TextUnits`].
//!
//! Lines include their trailing line ending. Words follow the Unicode word
//! boundary rules, so runs of whitespace and punctuation form their own
//! "words". Paragraphs are runs of non-blank lines; a blank line is a
//! paragraph of its own.

use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
  range::TextRange,
  unit::{
    TextUnits,
    Unit,
  },
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RopeText {
  text: Rope,
}

impl RopeText {
  pub fn new(text: Rope) -> Self {
    Self { text }
  }

  pub fn rope(&self) -> &Rope {
    &self.text
  }

  fn line_range(&self, line: usize) -> TextRange {
    let start = self.text.line_to_char(line);
    let end = self.text.line_to_char((line + 1).min(self.text.len_lines()));
    TextRange::new(start, end)
  }

  fn is_blank_line(&self, line: usize) -> bool {
    self.text.line(line).chars().all(char::is_whitespace)
  }

  fn word_at(&self, pos: usize) -> TextRange {
    let line = self.line_range(self.text.char_to_line(pos));
    let content = self.text.slice(line.start..line.end).to_string();
    let mut offset = line.start;
    for segment in content.split_word_bounds() {
      let len = segment.chars().count();
      if pos < offset + len {
        return TextRange::new(offset, offset + len);
      }
      offset += len;
    }
    TextRange::point(pos)
  }

  fn paragraph_at(&self, pos: usize) -> TextRange {
    let line = self.text.char_to_line(pos);
    if self.is_blank_line(line) {
      return self.line_range(line);
    }

    let mut first = line;
    while first > 0 && !self.is_blank_line(first - 1) {
      first -= 1;
    }
    let mut last = line;
    while last + 1 < self.text.len_lines() && !self.is_blank_line(last + 1) {
      last += 1;
    }
    TextRange::new(self.line_range(first).start, self.line_range(last).end)
  }
}

impl From<&str> for RopeText {
  fn from(text: &str) -> Self {
    Self::new(Rope::from_str(text))
  }
}

impl TextUnits for RopeText {
  fn len_chars(&self) -> usize {
    self.text.len_chars()
  }

  fn unit_at(&self, pos: usize, unit: Unit) -> TextRange {
    let len = self.text.len_chars();
    let pos = pos.min(len);
    match unit {
      Unit::Character if pos < len => TextRange::new(pos, pos + 1),
      Unit::Character => TextRange::point(pos),
      Unit::Word => self.word_at(pos),
      Unit::Line => self.line_range(self.text.char_to_line(pos)),
      Unit::Paragraph => self.paragraph_at(pos),
    }
  }

  fn text_in(&self, range: TextRange) -> String {
    let len = self.text.len_chars();
    let start = range.start.min(len);
    let end = range.end.min(len);
    self.text.slice(start..end).to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn words_split_on_spaces() {
    let text = RopeText::from("abcdefghijk lmno pqrstu vw xyz");
    assert_eq!(text.unit_at(14, Unit::Word), TextRange::new(12, 16));
    assert_eq!(text.unit_at(25, Unit::Word), TextRange::new(24, 26));
    assert_eq!(text.unit_at(11, Unit::Word), TextRange::new(11, 12));
  }

  #[test]
  fn lines_include_line_ending() {
    let text = RopeText::from("first\nsecond\n");
    assert_eq!(text.unit_at(2, Unit::Line), TextRange::new(0, 6));
    assert_eq!(text.unit_at(6, Unit::Line), TextRange::new(6, 13));
    assert_eq!(text.unit_at(13, Unit::Line), TextRange::point(13));
  }

  #[test]
  fn paragraphs_stop_at_blank_lines() {
    let text = RopeText::from("a\nb\n\nc\nd");
    assert_eq!(text.unit_at(2, Unit::Paragraph), TextRange::new(0, 4));
    assert_eq!(text.unit_at(4, Unit::Paragraph), TextRange::new(4, 5));
    assert_eq!(text.unit_at(7, Unit::Paragraph), TextRange::new(5, 8));
  }

  #[test]
  fn character_at_end_is_collapsed() {
    let text = RopeText::from("ab");
    assert_eq!(text.unit_at(1, Unit::Character), TextRange::new(1, 2));
    assert_eq!(text.unit_at(2, Unit::Character), TextRange::point(2));
  }

  #[test]
  fn move_by_words_and_bounds() {
    let text = RopeText::from("one two three");
    assert_eq!(text.move_by(0, Unit::Word, 2), 4);
    assert_eq!(text.move_by(5, Unit::Word, -1), 4);
    assert_eq!(text.move_by(1, Unit::Character, -5), 0);
    assert_eq!(text.move_by(12, Unit::Character, 5), 13);
  }

  #[test]
  fn text_in_clamps() {
    let text = RopeText::from("hello");
    assert_eq!(text.text_in(TextRange::new(1, 40)), "ello");
  }
}
