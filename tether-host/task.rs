//! Deferred work for the host's main loop.
//!
//! Moving the review cursor from inside an event handler can fire the same
//! class of event again before the handler returns. Such side effects are
//! posted as [`Deferred`] tasks instead and run later, first in first out.

use std::collections::VecDeque;

use tether_core::TextRange;

use crate::host::{
  Host,
  NotificationKind,
  ObjectId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
  /// Move the review cursor to an anchor derived from `object`'s selection.
  ///
  /// Dropped at run time when `object` no longer has focus.
  SetReviewPosition {
    object:   ObjectId,
    position: TextRange,
  },
  /// Put the review cursor back where it was before a command.
  RestoreReviewPosition { position: TextRange },
  /// Queue a caret notification for `object` unless one is pending.
  QueueCaret { object: ObjectId },
}

impl Deferred {
  pub fn run<H: Host + ?Sized>(self, host: &mut H) {
    match self {
      Self::SetReviewPosition { object, position } => {
        if host.focused_object() != object {
          tracing::trace!(?object, "dropping stale review anchor");
          return;
        }
        host.set_review_position(position);
      },
      Self::RestoreReviewPosition { position } => {
        tracing::debug!(?position, "restore review position");
        host.set_review_position(position);
      },
      Self::QueueCaret { object } => {
        if !host.is_notification_pending(NotificationKind::Caret, object) {
          host.enqueue_notification(NotificationKind::Caret, object);
        }
      },
    }
  }
}

/// FIFO queue of deferred tasks. No priorities, no cancellation.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
  tasks: VecDeque<Deferred>,
}

impl TaskQueue {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, task: Deferred) {
    self.tasks.push_back(task);
  }

  pub fn pop(&mut self) -> Option<Deferred> {
    self.tasks.pop_front()
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Deferred> {
    self.tasks.iter()
  }
}
