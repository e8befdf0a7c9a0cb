//! Review text region with selection mirroring.
//!
//! [`ReviewRegion`] decorates a base [`RegionRenderer`]. A base renderer can
//! report either a cursor offset (when handed a collapsed range) or highlight
//! bounds (when handed a real range), never both. To show a selection and
//! still scroll the display to the review cursor, an update inside a live
//! selection renders twice:
//!
//! 1. with the collapsed review position, keeping the cursor offset;
//! 2. with the resolved selection range, keeping the rendered cells.
//!
//! The cursor offset from the first pass is then published as a one-cell
//! highlight, which is what the display scrolls to.

use tether_core::{
  Endpoint,
  TextRange,
  Unit,
};
use tether_host::{
  CompatPolicy,
  Host,
  ObjectId,
  select_policy,
};

use crate::{
  cells::{
    Cells,
    to_cells,
  },
  reconciler::{
    ReconcilerState,
    resolve_display_range,
  },
};

/// Output of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
  pub cells:     Cells,
  /// Cursor offset into `cells`, reported for collapsed ranges only.
  pub cursor:    Option<usize>,
  /// Highlighted cells as `(start, end)`, end exclusive.
  pub selection: Option<(usize, usize)>,
  /// Document range the cells were rendered from.
  pub unit:      TextRange,
}

impl Rendered {
  pub fn selection_start(&self) -> Option<usize> {
    self.selection.map(|(start, _)| start)
  }

  pub fn selection_end(&self) -> Option<usize> {
    self.selection.map(|(_, end)| end)
  }
}

/// The host's own rendering routine for a text region.
pub trait RegionRenderer {
  fn render<H: Host + ?Sized>(
    &mut self,
    host: &H,
    object: ObjectId,
    effective: TextRange,
    reading_unit: Unit,
  ) -> Rendered;

  /// The host's own routing: move review to `position`, and the caret too
  /// when configured.
  fn route<H: Host + ?Sized>(&mut self, host: &mut H, object: ObjectId, position: TextRange) {
    host.set_review_position(position);
    if host.config().braille.routing_moves_caret {
      host.move_caret(object, position);
    }
  }
}

/// Base renderer: the reading unit around the start of the effective range,
/// one cell per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRegion;

impl RegionRenderer for TextRegion {
  fn render<H: Host + ?Sized>(
    &mut self,
    host: &H,
    object: ObjectId,
    effective: TextRange,
    reading_unit: Unit,
  ) -> Rendered {
    let unit = host.expand(object, effective.collapse(Endpoint::Start), reading_unit);
    let cells = to_cells(&host.text_in(object, unit));

    if effective.is_collapsed() {
      let cursor = effective.start.saturating_sub(unit.start).min(cells.len());
      Rendered {
        cells,
        cursor: Some(cursor),
        selection: None,
        unit,
      }
    } else {
      let shown = effective.clip_to(&unit);
      Rendered {
        cells,
        cursor: None,
        selection: Some((shown.start - unit.start, shown.end - unit.start)),
        unit,
      }
    }
  }
}

/// A review region attached to one document object.
#[derive(Debug)]
pub struct ReviewRegion<R> {
  object:   ObjectId,
  policy:   Box<dyn CompatPolicy>,
  state:    ReconcilerState,
  inner:    R,
  rendered: Rendered,
}

impl<R: RegionRenderer> ReviewRegion<R> {
  /// Attaches a region to `object`, picking its compatibility policy.
  pub fn new<H: Host + ?Sized>(host: &H, object: ObjectId, inner: R) -> Self {
    let policy = select_policy(&host.app_info(object), &host.config().compat);
    tracing::debug!(?object, ?policy, "attach review region");
    Self {
      object,
      policy,
      state: ReconcilerState::new(),
      inner,
      rendered: Rendered::default(),
    }
  }

  pub fn object(&self) -> ObjectId {
    self.object
  }

  pub fn policy(&self) -> &dyn CompatPolicy {
    self.policy.as_ref()
  }

  pub fn state(&self) -> &ReconcilerState {
    &self.state
  }

  pub fn state_mut(&mut self) -> &mut ReconcilerState {
    &mut self.state
  }

  pub fn rendered(&self) -> &Rendered {
    &self.rendered
  }

  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// The range the base renderer should treat as the selection.
  ///
  /// While an update runs this is the render override, so asking twice in
  /// one tick never resolves twice.
  pub fn effective_selection<H: Host + ?Sized>(&mut self, host: &mut H) -> TextRange {
    if let Some(fake) = self.state.fake_selection {
      return fake;
    }

    let review = host.review_position();
    let reading_unit = host.config().braille.reading_unit();
    let follow_caret = host.config().review.follow_caret;
    let resolved = resolve_display_range(
      &mut self.state,
      host,
      self.policy.as_ref(),
      self.object,
      review,
      reading_unit,
      follow_caret,
    );
    self.state.within_live_selection = resolved.within_live_selection;
    resolved.range
  }

  /// Refreshes the region for this tick.
  pub fn update<H: Host + ?Sized>(&mut self, host: &mut H) {
    self.state.reset_transient();
    self.rendered = self.render_passes(host);
    self.state.fake_selection = None;
  }

  fn render_passes<H: Host + ?Sized>(&mut self, host: &mut H) -> Rendered {
    let range = self.effective_selection(host);
    self.state.fake_selection = Some(range);
    if !self.state.within_live_selection {
      return self.render_base(host);
    }

    let review = host.review_position().collapse(Endpoint::Start);
    self.state.fake_selection = Some(review);
    let first = self.render_base(host);
    let Some(cursor) = first.cursor.filter(|_| !first.cells.is_empty()) else {
      self.state.within_live_selection = false;
      return first;
    };

    self.state.fake_selection = Some(range);
    let second = self.render_base(host);
    if second.cursor.is_some() || second.cells.is_empty() {
      tracing::debug!(?range, "selection pass reported a cursor, showing review position");
      self.state.fake_selection = Some(review);
      self.state.within_live_selection = false;
      return self.render_base(host);
    }

    let last = first.cells.len().min(second.cells.len()) - 1;
    let anchor = cursor.min(last);
    Rendered {
      selection: Some((anchor, anchor + 1)),
      ..second
    }
  }

  fn render_base<H: Host + ?Sized>(&mut self, host: &mut H) -> Rendered {
    let effective = self.effective_selection(host);
    let reading_unit = host.config().braille.reading_unit();
    self.inner.render(&*host, self.object, effective, reading_unit)
  }

  /// Handles a routing key pressed over `cell` of the last render.
  ///
  /// Inside a live selection, routing to the cell already under the review
  /// cursor activates it, unless routing moves the caret anyway. The base
  /// renderer's routing runs afterwards in every case.
  pub fn route_to_cell<H: Host + ?Sized>(&mut self, host: &mut H, cell: usize) {
    let unit = self.rendered.unit;
    let position = TextRange::point((unit.start + cell).min(unit.end));

    if self.state.within_live_selection
      && position.start == host.review_position().start
      && !host.config().braille.routing_moves_caret
    {
      tracing::debug!(?position, "activate within selection");
      host.activate_position(self.object, position);
    }

    self.inner.route(host, self.object, position);
  }
}

#[cfg(test)]
mod tests {
  use tether_core::Unit;
  use tether_test::{
    DOC,
    HostCall,
    SimHost,
  };

  use super::*;

  const TEXT: &str = "first line\nsecond line here\nthird\n";

  #[test]
  fn text_region_reports_cursor_for_point() {
    let host = SimHost::new(TEXT);
    let rendered = TextRegion.render(&host, DOC, TextRange::point(14), Unit::Line);
    assert_eq!(rendered.unit, TextRange::new(11, 28));
    assert_eq!(rendered.cells.len(), 17);
    assert_eq!(rendered.cursor, Some(3));
    assert_eq!(rendered.selection, None);
  }

  #[test]
  fn text_region_reports_selection_for_range() {
    let host = SimHost::new(TEXT);
    let rendered = TextRegion.render(&host, DOC, TextRange::new(13, 40), Unit::Line);
    assert_eq!(rendered.cursor, None);
    assert_eq!(rendered.selection, Some((2, 17)));
  }

  #[test]
  fn route_activates_under_review_inside_selection() {
    let mut host = SimHost::new(TEXT);
    host.select(DOC, TextRange::new(11, 28), true);
    host.place_review(TextRange::point(14));
    let mut region = ReviewRegion::new(&host, DOC, TextRegion);
    region.state_mut().real_selection = Some(TextRange::new(11, 28));
    region.update(&mut host);
    assert!(region.state().within_live_selection);

    region.route_to_cell(&mut host, 3);
    assert_eq!(host.calls, vec![
      HostCall::Activate(DOC, TextRange::point(14)),
      HostCall::SetReview(TextRange::point(14)),
    ]);
  }

  #[test]
  fn route_elsewhere_only_moves_review() {
    let mut host = SimHost::new(TEXT);
    host.place_review(TextRange::point(14));
    let mut region = ReviewRegion::new(&host, DOC, TextRegion);
    region.update(&mut host);

    region.route_to_cell(&mut host, 3);
    region.route_to_cell(&mut host, 5);
    assert_eq!(host.calls, vec![
      HostCall::SetReview(TextRange::point(14)),
      HostCall::SetReview(TextRange::point(16)),
    ]);
  }

  #[test]
  fn empty_review_pass_leaves_selection_mode() {
    let mut host = SimHost::new("abc\n");
    host.select(DOC, TextRange::new(0, 4), true);
    host.place_review(TextRange::point(4));
    let mut region = ReviewRegion::new(&host, DOC, TextRegion);

    region.update(&mut host);
    assert!(!region.state().within_live_selection);
    assert_eq!(region.rendered().selection, None);

    host.clear_calls();
    region.route_to_cell(&mut host, 0);
    assert_eq!(host.calls, vec![HostCall::SetReview(TextRange::point(4))]);
  }

  /// Records routed positions instead of moving anything.
  #[derive(Debug, Default)]
  struct RecordingRoute {
    routed: Vec<TextRange>,
  }

  impl RegionRenderer for RecordingRoute {
    fn render<H: Host + ?Sized>(
      &mut self,
      host: &H,
      object: ObjectId,
      effective: TextRange,
      reading_unit: Unit,
    ) -> Rendered {
      TextRegion.render(host, object, effective, reading_unit)
    }

    fn route<H: Host + ?Sized>(&mut self, _host: &mut H, _object: ObjectId, position: TextRange) {
      self.routed.push(position);
    }
  }

  #[test]
  fn route_delegates_to_base_after_activation() {
    let mut host = SimHost::new(TEXT);
    host.select(DOC, TextRange::new(11, 28), true);
    host.place_review(TextRange::point(14));
    let mut region = ReviewRegion::new(&host, DOC, RecordingRoute::default());
    region.state_mut().real_selection = Some(TextRange::new(11, 28));
    region.update(&mut host);

    region.route_to_cell(&mut host, 3);
    assert_eq!(host.calls, vec![HostCall::Activate(DOC, TextRange::point(14))]);
    assert_eq!(region.inner().routed, vec![TextRange::point(14)]);
  }

  #[test]
  fn route_moves_caret_when_configured() {
    let mut host = SimHost::new(TEXT);
    host.config.braille.routing_moves_caret = true;
    host.select(DOC, TextRange::new(11, 28), true);
    host.place_review(TextRange::point(14));
    let mut region = ReviewRegion::new(&host, DOC, TextRegion);
    region.state_mut().real_selection = Some(TextRange::new(11, 28));
    region.update(&mut host);

    region.route_to_cell(&mut host, 3);
    assert_eq!(host.calls, vec![
      HostCall::SetReview(TextRange::point(14)),
      HostCall::MoveCaret(DOC, TextRange::point(14)),
    ]);
  }
}
