use tether_braille::{
  RegionRenderer,
  ReviewRegion,
};
use tether_core::TextRange;
use tether_host::{
  Deferred,
  Host,
  NotificationKind,
  ObjectId,
};

use crate::plugin::{
  EventPlugin,
  Flow,
  HostEvent,
};

/// Owns the active review region and reacts to host events around it.
#[derive(Debug)]
pub struct EventBridge<R> {
  region: Option<ReviewRegion<R>>,
}

impl<R> Default for EventBridge<R> {
  fn default() -> Self {
    Self { region: None }
  }
}

impl<R: RegionRenderer> EventBridge<R> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Attaches a fresh region to `object`, tearing down the previous one.
  pub fn attach<H: Host + ?Sized>(&mut self, host: &H, object: ObjectId, renderer: R) {
    self.region = Some(ReviewRegion::new(host, object, renderer));
  }

  pub fn detach(&mut self) -> Option<ReviewRegion<R>> {
    self.region.take()
  }

  pub fn region(&self) -> Option<&ReviewRegion<R>> {
    self.region.as_ref()
  }

  pub fn region_mut(&mut self) -> Option<&mut ReviewRegion<R>> {
    self.region.as_mut()
  }

  /// Braille refresh for the active region.
  pub fn update<H: Host + ?Sized>(&mut self, host: &mut H) {
    if let Some(region) = self.region.as_mut() {
      region.update(host);
    }
  }

  pub fn on_caret<H: Host + ?Sized>(&mut self, host: &mut H, object: ObjectId) -> Flow {
    if !host.config().review.follow_caret || !host.config().braille.mirrors_selection() {
      return Flow::Forward;
    }
    let Some(region) = self.region.as_mut() else {
      return Flow::Forward;
    };

    if !region.policy().is_caret_notification_trustworthy() {
      if !region.state().has_live_selection() {
        return Flow::Forward;
      }
      // The reconciler already scheduled the review update.
      tracing::trace!(?object, "ignoring caret notification");
      return Flow::Handled;
    }

    let focus = host.focused_object();
    if region.object() == focus {
      if let Some(anchor) = region.state_mut().review_position.take() {
        host.schedule(Deferred::SetReviewPosition {
          object:   focus,
          position: anchor,
        });
        return Flow::Handled;
      }
    }

    if region.state().has_live_selection() {
      tracing::debug!(?focus, "caret moved, dropping selection state");
      region.state_mut().forget_selection();
      host.set_navigator_object(focus);
    }
    Flow::Forward
  }

  pub fn on_focus<H: Host + ?Sized>(&mut self, host: &mut H, object: ObjectId) -> Flow {
    if host.config().review.follow_focus {
      self.on_caret(host, object)
    } else {
      Flow::Forward
    }
  }

  /// Wraps the host's "move navigator object to focus" command.
  pub fn move_navigator_to_focus<H, F>(&mut self, host: &mut H, original: F)
  where
    H: Host + ?Sized,
    F: FnOnce(&mut H),
  {
    if let Some(region) = self.region.as_mut() {
      region.state_mut().real_selection = None;
    }
    original(host);
  }

  /// Wraps a selection movement command (extend or shrink by unit).
  ///
  /// A command that leaves the selection as it was must not move the review
  /// cursor either; the review position is put back after the fact.
  pub fn selection_movement<H, F>(&mut self, host: &mut H, object: ObjectId, original: F)
  where
    H: Host + ?Sized,
    F: FnOnce(&mut H),
  {
    if !host.config().braille.mirrors_selection() {
      original(host);
      return;
    }

    let review = host.review_position();
    let before = host.current_selection(object).ok();
    original(host);
    let after = host.current_selection(object).ok();
    if before == after {
      host.schedule(Deferred::RestoreReviewPosition { position: review });
    }
  }

  /// Wraps the host's selection change detection.
  pub fn detect_possible_selection_change<H, F>(&mut self, host: &mut H, object: ObjectId, original: F)
  where
    H: Host + ?Sized,
    F: FnOnce(&mut H),
  {
    original(host);
    if host.config().braille.mirrors_selection() {
      self.flush_if_pending(host, object);
    }
  }

  /// Wraps the host's selection change report.
  pub fn report_selection_change<H, F>(
    &mut self,
    host: &mut H,
    object: ObjectId,
    old_selection: TextRange,
    original: F,
  ) where
    H: Host + ?Sized,
    F: FnOnce(&mut H, TextRange),
  {
    original(host, old_selection);
    if !host.config().braille.mirrors_selection() {
      return;
    }

    if !host.is_notification_pending(NotificationKind::Caret, object) {
      host.enqueue_notification(NotificationKind::Caret, object);
    }
    self.flush_if_pending(host, object);
  }

  /// Flushes queued notifications when a caret update for a region with
  /// live selection state is waiting, so this tick's refresh sees it.
  fn flush_if_pending<H: Host + ?Sized>(&mut self, host: &mut H, object: ObjectId) {
    let live = self
      .region
      .as_ref()
      .is_some_and(|region| region.object() == object && region.state().has_live_selection());
    if live && host.is_notification_pending(NotificationKind::Caret, object) {
      tracing::debug!(?object, "process pending events");
      host.flush_pending_notifications();
    }
  }
}

impl<H, R> EventPlugin<H, HostEvent> for EventBridge<R>
where
  H: Host + ?Sized,
  R: RegionRenderer,
{
  fn dispatch(&mut self, host: &mut H, event: HostEvent) -> Flow {
    match event {
      HostEvent::Caret(object) => self.on_caret(host, object),
      HostEvent::Focus(object) => self.on_focus(host, object),
    }
  }
}
