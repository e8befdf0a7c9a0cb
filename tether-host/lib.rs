//! The screen reader, seen from the selection mirroring code.
//!
//! The host owns the object model, the review cursor, the notification queue
//! and the main loop. Everything tether needs from it goes through the
//! [`Host`] trait, so the decision logic can be exercised against a scripted
//! host as easily as against a real one.

pub mod compat;
pub mod config;
pub mod error;
pub mod host;
pub mod task;

pub use compat::{
  AccessBackend,
  AppInfo,
  CompatPolicy,
  LegacyWordPolicy,
  StandardPolicy,
  select_policy,
};
pub use config::{
  BrailleConfig,
  BrailleMode,
  CompatConfig,
  ReviewConfig,
  TetherConfig,
  TetherTo,
  WordCompat,
};
pub use error::{
  ConfigError,
  SelectionError,
};
pub use host::{
  Host,
  NotificationKind,
  ObjectId,
};
pub use task::{
  Deferred,
  TaskQueue,
};
