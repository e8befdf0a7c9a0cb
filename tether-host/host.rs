use tether_core::{
  Endpoint,
  TextRange,
  Unit,
};

use crate::{
  compat::AppInfo,
  config::TetherConfig,
  error::SelectionError,
  task::Deferred,
};

/// Identity of an accessible object (a document, an edit field, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
  pub const fn new(id: u64) -> Self {
    Self(id)
  }

  pub const fn get(self) -> u64 {
    self.0
  }
}

/// Host notifications the mirroring code inspects or queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
  Caret,
  Focus,
}

/// Context contract the mirroring code needs from the screen reader.
///
/// All methods run on the host's main loop. Nothing here may call back into
/// tether synchronously; work that has to happen "after" the current handler
/// goes through [`Host::schedule`].
pub trait Host {
  fn config(&self) -> &TetherConfig;

  fn app_info(&self, object: ObjectId) -> AppInfo;

  // Text of an object.
  //

  /// Current selection of `object`, collapsed when there is only a caret.
  fn current_selection(&self, object: ObjectId) -> Result<TextRange, SelectionError>;

  /// Whether the selection was started at its start and grows at its end.
  fn is_selection_anchored_at_start(&self, object: ObjectId) -> bool;

  fn expand(&self, object: ObjectId, range: TextRange, unit: Unit) -> TextRange;

  fn move_endpoint(
    &self,
    object: ObjectId,
    range: TextRange,
    unit: Unit,
    count: isize,
    endpoint: Endpoint,
  ) -> TextRange;

  fn text_in(&self, object: ObjectId, range: TextRange) -> String;

  // Cursors and navigation.
  //

  /// The review position; usually collapsed but not always.
  fn review_position(&self) -> TextRange;

  fn set_review_position(&mut self, position: TextRange);

  fn focused_object(&self) -> ObjectId;

  fn navigator_object(&self) -> ObjectId;

  fn set_navigator_object(&mut self, object: ObjectId);

  /// Moves the system caret of `object`.
  fn move_caret(&mut self, object: ObjectId, position: TextRange);

  /// Activates (clicks) the element at `position`.
  fn activate_position(&mut self, object: ObjectId, position: TextRange);

  // Event queue.
  //

  fn is_notification_pending(&self, kind: NotificationKind, object: ObjectId) -> bool;

  fn enqueue_notification(&mut self, kind: NotificationKind, object: ObjectId);

  /// Processes queued notifications now instead of on the next loop turn.
  fn flush_pending_notifications(&mut self);

  /// Posts `task` to the end of the host's serialized work queue.
  fn schedule(&mut self, task: Deferred);
}
