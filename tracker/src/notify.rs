//! User-facing notifications.
//!
//! The container emits one notification per effective change. They are
//! informational only: nothing waits for them to be acknowledged.

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// A short message shown to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Headline
    pub title: String,
    /// One-sentence detail
    pub description: String,
}

impl Notification {
    /// Create a notification
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// A task was created
    #[must_use]
    pub fn created() -> Self {
        Self::new(
            "Activity created",
            "Your new activity has been created successfully.",
        )
    }

    /// A task was deleted
    #[must_use]
    pub fn deleted() -> Self {
        Self::new(
            "Activity deleted",
            "The activity has been deleted successfully.",
        )
    }

    /// A task's completion flag flipped
    #[must_use]
    pub fn completion_toggled() -> Self {
        Self::new(
            "Activity updated",
            "Activity completion status has been updated.",
        )
    }

    /// A task's fields were edited
    #[must_use]
    pub fn edited() -> Self {
        Self::new(
            "Activity updated",
            "Your activity has been updated successfully.",
        )
    }
}

/// Delivers notifications to the user
pub trait Notifier: Send + Sync {
    /// Show a notification
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log at `info` level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            description = %notification.description,
            "notification"
        );
    }
}

/// Drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Keeps every notification in memory
///
/// Useful for shells that render their own toasts, and for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// An empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Remove and return everything received so far
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        // A panic while pushing cannot leave the Vec half-written
        self.received
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}
