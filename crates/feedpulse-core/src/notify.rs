//! Notifications
//!
//! User-facing outcome messages. Presentation is someone else's job; the
//! core only says what happened.

/// Toast texts
pub mod messages {
    pub const CREATED: &str = "New feedback added successfully!";
    pub const UPDATED: &str = "Feedback updated successfully!";
    pub const REQUIRED_FIELDS: &str = "Client name and feedback content are required!";
    pub const IMPORTED: &str = "Import completed successfully!";
    pub const EXPORTED: &str = "Export completed successfully!";

    pub fn status_updated(status: crate::domain::FeedbackStatus) -> String {
        format!("Feedback status updated to {}", status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Receives outcome notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Keeps every notification, for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    seen: std::cell::RefCell<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn take(&self) -> Vec<Notification> {
        self.seen.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}
