//! Display implementation for taskpilot application messages.
//!
//! All user-facing text lives here, in one match over [`Message`]. Callers
//! never format user strings themselves; they pick a variant and let the
//! message macros route it to the console or to `tracing`.
//!
//! ```rust
//! use taskpilot::libs::messages::Message;
//!
//! let message = Message::TaskCreated("Pay rent".to_string());
//! assert_eq!(message.to_string(), "Task 'Pay rent' added successfully.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' added successfully.", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed.", title),
            Message::TaskAlreadyCompleted(title) => format!("Task '{}' is already completed.", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted.", title),
            Message::TaskDeleteCancelled => "Deletion cancelled.".to_string(),
            Message::TaskRejected(reason) => format!("Task not added: {}", reason),
            Message::TasksHeader => "📋 Your tasks".to_string(),
            Message::TasksCategoryHeader(category) => format!("📂 Tasks in category '{}'", category),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoTasksInCategory(category) => format!("No tasks found in category '{}'.", category),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),

            // === STORE MESSAGES ===
            Message::StoreLoadRecovered(error) => format!("Task store could not be read, starting with an empty list ({})", error),
            Message::StoreUnavailable(error) => format!("Task store is unavailable: {}", error),
            Message::StoreRecordSkipped { position, reason } => {
                format!("Task record #{} could not be read and is kept as is ({})", position, reason)
            }
            Message::StoreWorkerFailed(error) => format!("Task store request failed: {}", error),
            Message::TasksRolledOver(count) => format!("{} completed recurring task(s) moved to their next occurrence.", count),

            // === ALARM MESSAGES ===
            Message::AlarmScannerStarted(interval) => format!("Alarm scanner is running (checking every {} seconds).", interval),
            Message::AlarmDue { title, due } => format!("🔔 ALARM: '{}' is due now! ({})", title, due),
            Message::AlarmRescheduled { title, next } => format!("Recurring task '{}' rescheduled to {}", title, next),
            Message::AlarmTaskFailed { title, error } => format!("Alarm error for '{}': {}", title, error),
            Message::AlarmScanFailed(error) => format!("Alarm scan skipped: {}", error),
            Message::AlarmScanFinished { fired, rescheduled } => {
                format!("Scan finished: {} alarm(s) fired, {} task(s) rescheduled", fired, rescheduled)
            }
            Message::NotifierFailed(error) => format!("Could not deliver notification: {}", error),
            Message::NotificationTitle => "Task Reminder".to_string(),
            Message::NotificationBody(title) => format!("{} is due now!", title),

            // === UPCOMING MESSAGES ===
            Message::UpcomingHeader(minutes) => format!("⏰ Due within the next {} minutes", minutes),
            Message::NoUpcomingTasks(minutes) => format!("Nothing is due within the next {} minutes.", minutes),

            // === REPORT MESSAGES ===
            Message::ReportHeader(period) => format!("📈 {} Productivity Report", period),
            Message::ReportCompletion { completed, total, rate } => {
                format!("Completed: {}/{} tasks ({:.2}%)", completed, total, rate)
            }
            Message::ReportNoTasksInPeriod => "No tasks are due in the selected period.".to_string(),
            Message::StatsHeader => "📊 Overall statistics".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleAlarm => "Alarm settings".to_string(),
            Message::PromptPollInterval => "Alarm check interval (seconds)".to_string(),
            Message::PollIntervalOutOfRange(min, max) => format!("Use a value between {} and {} seconds.", min, max),
            Message::PromptNotificationTimeout => "Notification timeout (seconds)".to_string(),
            Message::PromptUpcomingWindow => "Upcoming window (minutes)".to_string(),
            Message::PromptDefaultOwner => "Default user (leave blank for single-user mode)".to_string(),

            // === TASK PROMPTS ===
            Message::PromptTaskTitle => "📝 Task title".to_string(),
            Message::PromptCategory => "📂 Category (default: General)".to_string(),
            Message::PromptDueDate => "📅 Due date (e.g. 2025-08-05, 05/08/2025 or leave blank)".to_string(),
            Message::PromptDueTime => "⏰ Due time (e.g. 12:30 PM, 23:30 or leave blank)".to_string(),
            Message::PromptRecurring => "🔁 Recurring (daily/weekly/monthly/none)".to_string(),
            Message::PromptPriority => "⚡ Priority (High/Medium/Low)".to_string(),
            Message::PromptTaskNumberComplete => "Enter task number to complete".to_string(),
            Message::PromptTaskNumberDelete => "Enter task number to delete".to_string(),
            Message::PromptCategoryFilter => "Enter category".to_string(),
            Message::PromptReportPeriod => "Report period".to_string(),

            // === MENU MESSAGES ===
            Message::MenuWelcome => "Welcome to 📋 TaskPilot".to_string(),
            Message::MenuPrompt => "👉 Choose".to_string(),
            Message::MenuViewTasks => "Your all tasks".to_string(),
            Message::MenuAddTask => "+ New task".to_string(),
            Message::MenuCompleteTask => "Mark task as done".to_string(),
            Message::MenuDeleteTask => "Delete task".to_string(),
            Message::MenuCategoryView => "Category view".to_string(),
            Message::MenuReport => "Productivity report".to_string(),
            Message::MenuUpcoming => "Upcoming tasks".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::MenuGoodbye => "👋 Thank you for using TaskPilot.".to_string(),

            // === WATCHER/DAEMON MESSAGES ===
            Message::WatcherStarted(pid) => format!("Alarm watcher started in the background (PID: {}).", pid),
            Message::WatcherStopped(pid) => format!("Alarm watcher (PID: {}) stopped.", pid),
            Message::WatcherNotRunning => "Alarm watcher is not running.".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found).".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher (PID: {})...", pid),
            Message::WatcherFailedToStopExisting(error) => format!("Failed to stop existing watcher: {}", error),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down watcher...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down watcher...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down watcher...".to_string(),
            Message::WatcherCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::WatcherSignalHandlingNotSupported => "Signal handling is not supported on this platform.".to_string(),
            Message::ScannerExitedNormally => "Alarm scanner exited.".to_string(),
            Message::ScannerShuttingDown => "Alarm scanner shutting down.".to_string(),
            Message::ScannerError(error) => format!("Alarm scanner error: {}", error),
            Message::ScannerTaskPanicked(error) => format!("Alarm scanner task panicked: {}", error),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform.".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::InvalidPidFileContent => "Invalid PID file content.".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process. Error code: {}", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process. Error code: {}", code),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform.".to_string(),
        };
        write!(f, "{}", text)
    }
}
