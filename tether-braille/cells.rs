//! Text to braille cells.
//!
//! One cell per character, using the North American Braille ASCII table for
//! dots 1-6 and dot 7 for capital letters. This is a display aid for the
//! base renderer, not a literary braille translator.

use smallvec::SmallVec;

/// Braille ASCII, indexed by the dot pattern (dot 1 is bit 0).
const BRAILLE_ASCII: &[u8; 64] =
  b" A1B'K2L@CIF/MSP\"E3H9O6R^DJG>NTQ,*5<-U8V.%[$+X!&;:4\\0Z7(_?W]#Y)=";

pub const DOT7: u8 = 0b0100_0000;

/// Cell shown for characters the table cannot represent.
pub const UNKNOWN_CELL: u8 = 0xFF;

pub type Cells = SmallVec<[u8; 64]>;

pub fn cell_for(ch: char) -> u8 {
  if ch.is_whitespace() {
    return 0;
  }
  if !ch.is_ascii() {
    return UNKNOWN_CELL;
  }

  let upper = ch.to_ascii_uppercase() as u8;
  match BRAILLE_ASCII.iter().position(|&c| c == upper) {
    Some(dots) if ch.is_ascii_uppercase() => dots as u8 | DOT7,
    Some(dots) => dots as u8,
    None => UNKNOWN_CELL,
  }
}

pub fn to_cells(text: &str) -> Cells {
  text.chars().map(cell_for).collect()
}
