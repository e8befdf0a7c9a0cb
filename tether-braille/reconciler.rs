//! Which range should the braille display mirror?
//!
//! Three cursors compete for the display when braille is tethered to review:
//! the real selection, the review position, and the braille highlight. The
//! reconciler settles them once per tick:
//!
//! - no selection (or it cannot be read): show the review position;
//! - a selection that just changed: show all of it, and when the review
//!   cursor follows the caret, hand the unanchored end over as the next
//!   review position;
//! - an unchanged selection: show the part of it inside the reading unit
//!   around the review position, or the review position alone when that unit
//!   contains no selected characters.

use tether_core::{
  Endpoint,
  TextRange,
  Unit,
};
use tether_host::{
  CompatPolicy,
  Deferred,
  Host,
  NotificationKind,
  ObjectId,
};

/// Selection bookkeeping of one review region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilerState {
  /// Last non-collapsed selection seen.
  pub real_selection:        Option<TextRange>,
  /// Review anchor derived from a followed selection, waiting to be applied.
  pub review_position:       Option<TextRange>,
  /// Render override; only set while a region update runs.
  pub fake_selection:        Option<TextRange>,
  /// The range resolved this tick is a clipped part of `real_selection`.
  pub within_live_selection: bool,
}

impl ReconcilerState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reset_transient(&mut self) {
    self.fake_selection = None;
    self.within_live_selection = false;
  }

  pub fn forget_selection(&mut self) {
    self.real_selection = None;
    self.review_position = None;
  }

  pub fn has_live_selection(&self) -> bool {
    self.real_selection.is_some()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
  pub range:                 TextRange,
  pub within_live_selection: bool,
}

impl Resolved {
  fn review(review: TextRange) -> Self {
    Self {
      range:                 review.collapse(Endpoint::Start),
      within_live_selection: false,
    }
  }
}

/// Resolves the range `object`'s region should display this tick.
///
/// `review` may arrive non-collapsed (hosts hand out a spanning review range
/// right after a mode switch); only its start is used.
pub fn resolve_display_range<H: Host + ?Sized>(
  state: &mut ReconcilerState,
  host: &mut H,
  policy: &dyn CompatPolicy,
  object: ObjectId,
  review: TextRange,
  reading_unit: Unit,
  follow_caret: bool,
) -> Resolved {
  let selection = match host.current_selection(object) {
    Ok(selection) if !selection.is_collapsed() => selection,
    Ok(_) => {
      state.forget_selection();
      return Resolved::review(review);
    },
    Err(err) => {
      tracing::trace!(%err, "selection unavailable, showing review position");
      state.forget_selection();
      return Resolved::review(review);
    },
  };

  if state.real_selection != Some(selection) {
    tracing::debug!(?selection, "selection changed");
    state.real_selection = Some(selection);
    if follow_caret {
      let anchor = review_anchor(host, object, selection);
      hand_off_anchor(state, host, policy, object, anchor);
      return Resolved {
        range:                 selection,
        within_live_selection: true,
      };
    }
  }

  let collapsed = review.collapse(Endpoint::Start);
  let reading = host.expand(object, collapsed, reading_unit);
  if !reading.overlaps(&selection) {
    return Resolved::review(review);
  }

  Resolved {
    range:                 reading.clip_to(&selection),
    within_live_selection: true,
  }
}

/// The unanchored end of `selection`: the end the user is moving.
///
/// For a selection anchored at its start that is the last selected
/// character, so the exclusive end is pulled in by one first.
fn review_anchor<H: Host + ?Sized>(host: &H, object: ObjectId, selection: TextRange) -> TextRange {
  if host.is_selection_anchored_at_start(object) {
    host
      .move_endpoint(object, selection, Unit::Character, -1, Endpoint::End)
      .collapse(Endpoint::End)
  } else {
    selection.collapse(Endpoint::Start)
  }
}

fn hand_off_anchor<H: Host + ?Sized>(
  state: &mut ReconcilerState,
  host: &mut H,
  policy: &dyn CompatPolicy,
  object: ObjectId,
  anchor: TextRange,
) {
  if policy.is_caret_notification_trustworthy() {
    // The caret handler picks the anchor up.
    state.review_position = Some(anchor);
    if !host.is_notification_pending(NotificationKind::Caret, object) {
      host.enqueue_notification(NotificationKind::Caret, object);
    }
  } else {
    tracing::debug!(?anchor, "scheduling review anchor");
    host.schedule(Deferred::SetReviewPosition {
      object,
      position: anchor,
    });
  }
}
