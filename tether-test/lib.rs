//! Scripted in-memory host for tether's integration tests.
//!
//! [`SimHost`] keeps a handful of rope documents, a review cursor, a
//! notification queue and a deferred task queue. Every mutating call the
//! code under test makes is recorded in [`SimHost::calls`].

use std::collections::{
  HashMap,
  VecDeque,
};

use tether_core::{
  Endpoint,
  RopeText,
  TextRange,
  TextUnits,
  Unit,
};
use tether_host::{
  AccessBackend,
  AppInfo,
  Deferred,
  Host,
  NotificationKind,
  ObjectId,
  SelectionError,
  TaskQueue,
  TetherConfig,
};

pub const DOC: ObjectId = ObjectId::new(1);
pub const OTHER_DOC: ObjectId = ObjectId::new(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
  SetReview(TextRange),
  SetNavigator(ObjectId),
  MoveCaret(ObjectId, TextRange),
  Activate(ObjectId, TextRange),
  Enqueue(NotificationKind, ObjectId),
  Flush { delivered: usize },
}

#[derive(Debug, Clone)]
pub struct SimDocument {
  pub text:              RopeText,
  pub selection:         Result<TextRange, SelectionError>,
  pub anchored_at_start: bool,
  pub app:               AppInfo,
}

impl SimDocument {
  pub fn new(text: &str) -> Self {
    Self {
      text:              RopeText::from(text),
      selection:         Ok(TextRange::point(0)),
      anchored_at_start: true,
      app:               AppInfo::new("notepad", AccessBackend::UiAutomation, 22631),
    }
  }
}

#[derive(Debug)]
pub struct SimHost {
  pub config:    TetherConfig,
  documents:     HashMap<ObjectId, SimDocument>,
  focus:         ObjectId,
  navigator:     ObjectId,
  review:        TextRange,
  pending:       VecDeque<(NotificationKind, ObjectId)>,
  tasks:         TaskQueue,
  pub delivered: Vec<(NotificationKind, ObjectId)>,
  pub calls:     Vec<HostCall>,
}

impl SimHost {
  /// A host showing `text` as the focused document [`DOC`].
  pub fn new(text: &str) -> Self {
    let mut documents = HashMap::new();
    documents.insert(DOC, SimDocument::new(text));
    Self {
      config: TetherConfig::default(),
      documents,
      focus: DOC,
      navigator: DOC,
      review: TextRange::point(0),
      pending: VecDeque::new(),
      tasks: TaskQueue::new(),
      delivered: Vec::new(),
      calls: Vec::new(),
    }
  }

  pub fn with_document(mut self, object: ObjectId, text: &str) -> Self {
    self.documents.insert(object, SimDocument::new(text));
    self
  }

  pub fn with_app(mut self, object: ObjectId, app: AppInfo) -> Self {
    self.document_mut(object).app = app;
    self
  }

  pub fn document_mut(&mut self, object: ObjectId) -> &mut SimDocument {
    self
      .documents
      .get_mut(&object)
      .unwrap_or_else(|| panic!("no document {object:?}"))
  }

  fn document(&self, object: ObjectId) -> Option<&SimDocument> {
    self.documents.get(&object)
  }

  /// Selects `range` in `object`; a forward selection is anchored at start.
  pub fn select(&mut self, object: ObjectId, range: TextRange, anchored_at_start: bool) {
    let document = self.document_mut(object);
    document.selection = Ok(range);
    document.anchored_at_start = anchored_at_start;
  }

  pub fn fail_selection(&mut self, object: ObjectId, error: SelectionError) {
    self.document_mut(object).selection = Err(error);
  }

  /// Moves the review cursor without recording a call.
  pub fn place_review(&mut self, position: TextRange) {
    self.review = position;
  }

  /// Focuses `object` and moves the navigator along, as the host would.
  pub fn focus(&mut self, object: ObjectId) {
    self.focus = object;
    self.navigator = object;
  }

  pub fn tasks(&self) -> &TaskQueue {
    &self.tasks
  }

  pub fn pending(&self) -> impl Iterator<Item = &(NotificationKind, ObjectId)> {
    self.pending.iter()
  }

  /// Runs every deferred task, including ones queued while running.
  pub fn run_deferred(&mut self) -> usize {
    let mut ran = 0;
    while let Some(task) = self.tasks.pop() {
      task.run(self);
      ran += 1;
    }
    ran
  }

  pub fn clear_calls(&mut self) {
    self.calls.clear();
  }
}

impl Host for SimHost {
  fn config(&self) -> &TetherConfig {
    &self.config
  }

  fn app_info(&self, object: ObjectId) -> AppInfo {
    self
      .document(object)
      .map(|document| document.app.clone())
      .unwrap_or_else(|| AppInfo::new("unknown", AccessBackend::UiAutomation, 0))
  }

  fn current_selection(&self, object: ObjectId) -> Result<TextRange, SelectionError> {
    self
      .document(object)
      .ok_or(SelectionError::ObjectGone(object))?
      .selection
  }

  fn is_selection_anchored_at_start(&self, object: ObjectId) -> bool {
    self
      .document(object)
      .is_none_or(|document| document.anchored_at_start)
  }

  fn expand(&self, object: ObjectId, range: TextRange, unit: Unit) -> TextRange {
    match self.document(object) {
      Some(document) => range.expand(&document.text, unit),
      None => range.collapse(Endpoint::Start),
    }
  }

  fn move_endpoint(
    &self,
    object: ObjectId,
    range: TextRange,
    unit: Unit,
    count: isize,
    endpoint: Endpoint,
  ) -> TextRange {
    match self.document(object) {
      Some(document) => range.move_endpoint(&document.text, unit, count, endpoint),
      None => range,
    }
  }

  fn text_in(&self, object: ObjectId, range: TextRange) -> String {
    self
      .document(object)
      .map(|document| document.text.text_in(range))
      .unwrap_or_default()
  }

  fn review_position(&self) -> TextRange {
    self.review
  }

  fn set_review_position(&mut self, position: TextRange) {
    self.review = position;
    self.calls.push(HostCall::SetReview(position));
  }

  fn focused_object(&self) -> ObjectId {
    self.focus
  }

  fn navigator_object(&self) -> ObjectId {
    self.navigator
  }

  fn set_navigator_object(&mut self, object: ObjectId) {
    self.navigator = object;
    self.calls.push(HostCall::SetNavigator(object));
  }

  fn move_caret(&mut self, object: ObjectId, position: TextRange) {
    if let Some(document) = self.documents.get_mut(&object) {
      document.selection = Ok(position.collapse(Endpoint::Start));
    }
    self.calls.push(HostCall::MoveCaret(object, position));
  }

  fn activate_position(&mut self, object: ObjectId, position: TextRange) {
    self.calls.push(HostCall::Activate(object, position));
  }

  fn is_notification_pending(&self, kind: NotificationKind, object: ObjectId) -> bool {
    self.pending.contains(&(kind, object))
  }

  fn enqueue_notification(&mut self, kind: NotificationKind, object: ObjectId) {
    self.pending.push_back((kind, object));
    self.calls.push(HostCall::Enqueue(kind, object));
  }

  fn flush_pending_notifications(&mut self) {
    let delivered = self.pending.len();
    self.delivered.extend(self.pending.drain(..));
    self.calls.push(HostCall::Flush { delivered });
  }

  fn schedule(&mut self, task: Deferred) {
    self.tasks.push(task);
  }
}
