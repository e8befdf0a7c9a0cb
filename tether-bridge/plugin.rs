//! Minimal plugin API for host events.
//!
//! A middleware-style step in front of the host's own handler: the plugin
//! either consumes the event or lets the host's default run.

use tether_host::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
  Caret(ObjectId),
  Focus(ObjectId),
}

/// Result of offering an event to a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  /// Run the host's default handler.
  Forward,
  /// Event was handled; skip the default.
  Handled,
}

pub trait EventPlugin<Ctx: ?Sized, Input> {
  fn dispatch(&mut self, ctx: &mut Ctx, input: Input) -> Flow;
}

/// Offers `event` to `plugin`, falling back to `default` when forwarded.
pub fn handle_event<P, Ctx, F>(plugin: &mut P, ctx: &mut Ctx, event: HostEvent, default: F) -> Flow
where
  P: EventPlugin<Ctx, HostEvent>,
  Ctx: ?Sized,
  F: FnOnce(&mut Ctx, HostEvent),
{
  let flow = plugin.dispatch(ctx, event);
  if flow == Flow::Forward {
    default(ctx, event);
  }
  flow
}
