//! Per-application quirks of caret notifications.
//!
//! Some word processor accessibility backends do not fire a caret
//! notification for every selection change, so the review cursor has to be
//! moved explicitly instead of waiting for the caret event. The policy is
//! picked once when a document region is attached.

use std::fmt;

use crate::config::{
  CompatConfig,
  WordCompat,
};

/// Executable name of the word processor with the unreliable backends.
pub const WORD_PROCESSOR_APP: &str = "winword";

/// First OS build whose UI Automation text events carry caret moves reliably.
pub const UIA_RELIABLE_OS_BUILD: u32 = 18362;

/// Accessibility API a document is exposed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessBackend {
  UiAutomation,
  IAccessible,
  ObjectModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
  pub app_name: String,
  pub backend:  AccessBackend,
  pub os_build: u32,
}

impl AppInfo {
  pub fn new(app_name: impl Into<String>, backend: AccessBackend, os_build: u32) -> Self {
    Self {
      app_name: app_name.into(),
      backend,
      os_build,
    }
  }

  pub fn is_word_processor(&self) -> bool {
    self.app_name.eq_ignore_ascii_case(WORD_PROCESSOR_APP)
  }
}

pub trait CompatPolicy: fmt::Debug {
  /// Whether a caret notification reliably follows every selection change.
  fn is_caret_notification_trustworthy(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl CompatPolicy for StandardPolicy {
  fn is_caret_notification_trustworthy(&self) -> bool {
    true
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyWordPolicy;

impl CompatPolicy for LegacyWordPolicy {
  fn is_caret_notification_trustworthy(&self) -> bool {
    false
  }
}

pub fn select_policy(app: &AppInfo, compat: &CompatConfig) -> Box<dyn CompatPolicy> {
  if !app.is_word_processor() {
    return Box::new(StandardPolicy);
  }

  let legacy = match compat.word_processor {
    WordCompat::Legacy => true,
    WordCompat::Modern => false,
    WordCompat::Auto => {
      match app.backend {
        AccessBackend::IAccessible => true,
        AccessBackend::UiAutomation => app.os_build < UIA_RELIABLE_OS_BUILD,
        AccessBackend::ObjectModel => false,
      }
    },
  };

  if legacy {
    tracing::debug!(app = %app.app_name, backend = ?app.backend, "using legacy caret policy");
    Box::new(LegacyWordPolicy)
  } else {
    Box::new(StandardPolicy)
  }
}
