//! Delivery of due-task alerts.
//!
//! The alarm scanner only decides *when* a task fires; how the user is told
//! is behind the [`Notifier`] trait. The CLI uses [`ConsoleNotifier`], tests
//! plug in a recording implementation.

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub timeout: Duration,
}

impl Notification {
    /// The alert shown when `task` reaches its due minute.
    pub fn due(task: &Task, timeout: Duration) -> Self {
        Notification {
            title: Message::NotificationTitle.to_string(),
            message: Message::NotificationBody(task.title.clone()).to_string(),
            timeout,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<(), TaskError>;
}

/// Writes the alert to stdout and rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), TaskError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "\x07🔔 {}: {}", notification.title, notification.message)
            .and_then(|_| stdout.flush())
            .map_err(|e| TaskError::Notify(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_notification_text() {
        let task = Task::new("Pay rent", "Bills");
        let notification = Notification::due(&task, Duration::from_secs(10));
        assert_eq!(notification.title, "Task Reminder");
        assert_eq!(notification.message, "Pay rent is due now!");
        assert_eq!(notification.timeout, Duration::from_secs(10));
    }
}
