use thiserror::Error;

use crate::host::ObjectId;

/// Why the current selection of an object could not be read.
///
/// Callers treat every variant as "no selection"; it is never escalated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
  #[error("object does not expose a text selection")]
  NotSupported,
  #[error("object {0:?} is gone")]
  ObjectGone(ObjectId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid tether config: {0}")]
  Parse(#[from] toml::de::Error),
}
