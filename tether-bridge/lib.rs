//! Glue between host events/commands and the braille review region.
//!
//! The host offers its caret and focus notifications to [`EventBridge`]
//! through the [`EventPlugin`] interface and runs its own default handler
//! when the bridge answers [`Flow::Forward`]. Commands that tether needs to
//! wrap are passed in as the host's original implementation, which the
//! bridge calls explicitly.

mod bridge;
mod plugin;

pub use bridge::EventBridge;
pub use plugin::{
  EventPlugin,
  Flow,
  HostEvent,
  handle_event,
};
