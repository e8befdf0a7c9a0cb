//! User configuration read by the selection mirroring code.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```
//! use tether_host::TetherConfig;
//!
//! let config = TetherConfig::from_toml("[braille]\nread_by_paragraph = true").unwrap();
//! assert!(config.review.follow_caret);
//! assert!(config.braille.read_by_paragraph);
//! ```

use serde::{
  Deserialize,
  Serialize,
};
use tether_core::Unit;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TetherConfig {
  pub review:  ReviewConfig,
  pub braille: BrailleConfig,
  pub compat:  CompatConfig,
}

impl TetherConfig {
  pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
    Ok(toml::from_str(source)?)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
  /// Review cursor follows the system caret (and so the selection).
  pub follow_caret: bool,
  /// Review cursor follows system focus.
  pub follow_focus: bool,
}

impl Default for ReviewConfig {
  fn default() -> Self {
    Self {
      follow_caret: true,
      follow_focus: true,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrailleMode {
  #[default]
  FollowCursors,
  /// Braille shows speech output only; nothing is mirrored.
  SpeechOutput,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TetherTo {
  Auto,
  Focus,
  #[default]
  Review,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrailleConfig {
  pub enabled:             bool,
  pub mode:                BrailleMode,
  pub tether_to:           TetherTo,
  pub read_by_paragraph:   bool,
  /// Routing keys move the system caret as well as the review cursor.
  pub routing_moves_caret: bool,
}

impl Default for BrailleConfig {
  fn default() -> Self {
    Self {
      enabled:             true,
      mode:                BrailleMode::default(),
      tether_to:           TetherTo::default(),
      read_by_paragraph:   false,
      routing_moves_caret: false,
    }
  }
}

impl BrailleConfig {
  /// Whether selections should be mirrored on the display at all.
  pub fn mirrors_selection(&self) -> bool {
    self.enabled && self.mode != BrailleMode::SpeechOutput && self.tether_to == TetherTo::Review
  }

  pub fn reading_unit(&self) -> Unit {
    if self.read_by_paragraph {
      Unit::Paragraph
    } else {
      Unit::Line
    }
  }
}

/// Override for the word processor compatibility detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCompat {
  #[default]
  Auto,
  Legacy,
  Modern,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatConfig {
  pub word_processor: WordCompat,
}
