//! User-facing notifications emitted by the workflow.

mod sink;

pub use sink::{LogNotificationSink, MockNotificationSink, Notification, NotificationSink};
