//! User-facing notifications.

use std::sync::Mutex;

/// A notification raised by the list aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    Created,
    Updated,
    Removed,
    SearchFailed,
    LoadMoreFailed,
}

impl Notice {
    /// The message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Created => "Character created successfully",
            Notice::Updated => "Character updated successfully",
            Notice::Removed => "Character removed successfully",
            Notice::SearchFailed => "Could not fetch characters, try again later",
            Notice::LoadMoreFailed => "Could not fetch more characters, try again later",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::SearchFailed | Notice::LoadMoreFailed)
    }
}

/// Receives notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: Notice) {}
}

/// Keeps every notification in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}
