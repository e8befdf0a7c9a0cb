use quickcheck::quickcheck;
use tether_braille::{
  RegionRenderer,
  Rendered,
  ReviewRegion,
  TextRegion,
};
use tether_core::{
  TextRange,
  Unit,
};
use tether_host::{
  Host,
  ObjectId,
};
use tether_test::{
  DOC,
  SimHost,
};

const TEXT: &str = "alpha beta\ngamma delta epsilon\nzeta";

fn attached(host: &SimHost) -> ReviewRegion<TextRegion> {
  ReviewRegion::new(host, DOC, TextRegion)
}

#[test]
fn no_selection_renders_review_cursor() {
  let mut host = SimHost::new(TEXT);
  host.place_review(TextRange::point(13));
  let mut region = attached(&host);

  region.update(&mut host);
  let rendered = region.rendered();
  assert_eq!(rendered.unit, TextRange::new(11, 31));
  assert_eq!(rendered.cursor, Some(2));
  assert_eq!(rendered.selection, None);
  assert!(!region.state().within_live_selection);
  assert_eq!(region.state().fake_selection, None);
}

#[test]
fn review_inside_settled_selection_publishes_scroll_anchor() {
  let mut host = SimHost::new(TEXT);
  host.select(DOC, TextRange::new(14, 25), true);
  host.place_review(TextRange::point(19));
  let mut region = attached(&host);
  region.state_mut().real_selection = Some(TextRange::new(14, 25));

  region.update(&mut host);
  let rendered = region.rendered();
  assert!(region.state().within_live_selection);
  assert_eq!(rendered.unit, TextRange::new(11, 31));
  assert_eq!(rendered.cursor, None);
  assert_eq!(rendered.selection_start(), Some(8));
  assert_eq!(rendered.selection_end(), Some(9));
  assert_eq!(region.state().fake_selection, None);
}

#[test]
fn scroll_anchor_is_clamped_to_last_cell() {
  let mut host = SimHost::new("abc def");
  host.select(DOC, TextRange::new(0, 7), true);
  host.place_review(TextRange::point(7));
  let mut region = attached(&host);
  region.state_mut().real_selection = Some(TextRange::new(0, 7));

  region.update(&mut host);
  assert_eq!(region.rendered().selection, Some((6, 7)));
}

#[test]
fn new_selection_shows_whole_selection_then_follows_anchor() {
  let mut host = SimHost::new(TEXT);
  host.place_review(TextRange::point(11));
  let mut region = attached(&host);
  region.update(&mut host);

  host.select(DOC, TextRange::new(11, 16), true);
  region.update(&mut host);
  assert!(region.state().within_live_selection);
  assert_eq!(region.state().review_position, Some(TextRange::point(15)));
  assert_eq!(region.rendered().selection, Some((0, 1)));

  // The caret handler would apply the anchor; do it by hand here.
  host.place_review(TextRange::point(15));
  region.update(&mut host);
  assert!(region.state().within_live_selection);
  assert_eq!(region.rendered().selection, Some((4, 5)));
}

#[test]
fn review_outside_selection_renders_cursor() {
  let mut host = SimHost::new(TEXT);
  host.select(DOC, TextRange::new(0, 5), true);
  host.place_review(TextRange::point(20));
  let mut region = attached(&host);
  region.state_mut().real_selection = Some(TextRange::new(0, 5));

  region.update(&mut host);
  assert!(!region.state().within_live_selection);
  assert_eq!(region.rendered().cursor, Some(9));
  assert_eq!(region.rendered().selection, None);
}

/// Renders like [`TextRegion`] but always reports a cursor, as a base
/// renderer that failed to detect the selection would.
#[derive(Debug, Default)]
struct CursorOnly {
  passes: Vec<TextRange>,
}

impl RegionRenderer for CursorOnly {
  fn render<H: Host + ?Sized>(
    &mut self,
    host: &H,
    object: ObjectId,
    effective: TextRange,
    reading_unit: Unit,
  ) -> Rendered {
    self.passes.push(effective);
    let rendered = TextRegion.render(host, object, effective, reading_unit);
    Rendered {
      cursor: Some(0),
      selection: None,
      ..rendered
    }
  }
}

#[test]
fn degenerate_selection_pass_falls_back_to_review() {
  let mut host = SimHost::new(TEXT);
  host.select(DOC, TextRange::new(14, 25), true);
  host.place_review(TextRange::point(19));
  let mut region = ReviewRegion::new(&host, DOC, CursorOnly::default());
  region.state_mut().real_selection = Some(TextRange::new(14, 25));

  region.update(&mut host);
  assert_eq!(region.inner().passes, vec![
    TextRange::point(19),
    TextRange::new(14, 25),
    TextRange::point(19),
  ]);
  assert_eq!(region.rendered().selection, None);
  assert!(!region.state().within_live_selection);
  assert_eq!(region.state().fake_selection, None);
}

#[test]
fn effective_selection_is_stable_within_a_tick() {
  let mut host = SimHost::new(TEXT);
  host.select(DOC, TextRange::new(14, 25), true);
  host.place_review(TextRange::point(19));
  let mut region = attached(&host);

  let first = region.effective_selection(&mut host);
  region.state_mut().fake_selection = Some(first);
  host.place_review(TextRange::point(2));
  assert_eq!(region.effective_selection(&mut host), first);
}

quickcheck! {
  fn published_anchor_is_one_cell_in_bounds(a: usize, b: usize, review: usize, settled: bool) -> bool {
    let len = TEXT.chars().count();
    let selection = TextRange::new(a % len, b % len);
    let mut host = SimHost::new(TEXT);
    host.select(DOC, selection, true);
    host.place_review(TextRange::point(review % (len + 1)));
    let mut region = attached(&host);
    if settled {
      region.state_mut().real_selection = Some(selection);
    }

    region.update(&mut host);
    if !region.state().within_live_selection {
      return true;
    }
    let rendered = region.rendered();
    match rendered.selection {
      Some((start, end)) => start < rendered.cells.len() && end == start + 1,
      None => false,
    }
  }
}
