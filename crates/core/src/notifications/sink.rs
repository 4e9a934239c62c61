//! Notification sink trait and implementations.

use log::info;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Informational messages shown to the user after a successful upload.
///
/// Failures are never notified; they only reach the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    FileAdded { file_name: String },
    FileUpdated { file_name: String },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::FileAdded { file_name } => {
                write!(f, "File '{}' added to Crowdin", file_name)
            }
            Notification::FileUpdated { file_name } => {
                write!(f, "File '{}' updated in Crowdin", file_name)
            }
        }
    }
}

/// Receives notifications from the workflow.
///
/// Implementations must not block or fail; a lost notification never
/// affects the sync itself.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log at info level.
#[derive(Clone, Default)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: Notification) {
        info!("{}", notification);
    }
}

/// Mock sink for testing - collects notifications.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Returns the collected notifications rendered as text.
    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
