//! Alarm scanner.
//!
//! Every poll interval the scanner takes a snapshot of the store and fires
//! the pending tasks whose due instant falls in the current calendar minute.
//!
//! - Matching is done at minute granularity: seconds are ignored on both
//!   sides.
//! - Each `(task, due instant)` pair fires once, even though the default
//!   30 second interval scans every minute twice.
//! - Minutes the scanner was not running for are never fired afterwards.
//! - A fired recurring task is moved to its next occurrence through the
//!   store actor. Non-recurring tasks are left as they are.
//!
//! Errors are contained: a failing notifier or a failing reschedule is logged
//! and the rest of the tasks are still processed.

use crate::db::actor::StoreHandle;
use crate::libs::config::AlarmConfig;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::notifier::{Notification, Notifier};
use crate::libs::task::{Task, TaskId};
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_warning};
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use std::collections::HashSet;
use std::sync::Arc;

/// What one scan cycle did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub fired: Vec<TaskId>,
    pub rescheduled: Vec<(TaskId, NaiveDateTime)>,
}

pub struct AlarmScanner {
    store: StoreHandle,
    notifier: Arc<dyn Notifier>,
    config: AlarmConfig,
    fired: HashSet<(TaskId, NaiveDateTime)>,
}

impl AlarmScanner {
    pub fn new(store: StoreHandle, notifier: Arc<dyn Notifier>, config: AlarmConfig) -> Self {
        AlarmScanner {
            store,
            notifier,
            config,
            fired: HashSet::new(),
        }
    }

    /// Runs scan cycles forever. Only returns when the store actor is gone.
    ///
    /// Completed recurring tasks are rolled over once before the first scan.
    pub async fn run(mut self) -> Result<(), TaskError> {
        match self.store.roll_over().await {
            Ok(0) => {}
            Ok(count) => msg_info!(Message::TasksRolledOver(count)),
            Err(e) => msg_warning!(Message::AlarmScanFailed(e.to_string())),
        }

        let period = std::time::Duration::from_secs(self.config.poll_interval_secs());
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let now = Local::now().naive_local();
            match self.scan_at(now).await {
                Ok(report) => msg_debug!(Message::AlarmScanFinished {
                    fired: report.fired.len(),
                    rescheduled: report.rescheduled.len(),
                }),
                Err(TaskError::StoreClosed) => return Err(TaskError::StoreClosed),
                Err(e) => msg_warning!(Message::AlarmScanFailed(e.to_string())),
            }
        }
    }

    /// Runs a single scan cycle as if the clock read `now`.
    pub async fn scan_at(&mut self, now: NaiveDateTime) -> Result<ScanReport, TaskError> {
        let minute = minute_of(now);
        self.fired.retain(|(_, due)| minute_of(*due) >= minute);

        let tasks = self.store.snapshot().await?;
        let timeout = std::time::Duration::from_secs(self.config.notification_timeout);
        let mut report = ScanReport::default();

        for (task, due) in due_now(&tasks, now) {
            if !self.fired.insert((task.id, due)) {
                continue;
            }

            msg_print!(Message::AlarmDue {
                title: task.title.clone(),
                due: due.format("%Y-%m-%d %I:%M %p").to_string(),
            });
            if let Err(e) = self.notifier.notify(&Notification::due(task, timeout)) {
                msg_warning!(Message::NotifierFailed(e.to_string()));
            }
            report.fired.push(task.id);

            if !task.recurring.is_recurring() {
                continue;
            }
            match self.store.advance_fired(task.id, due).await {
                Ok(Some(next)) => {
                    msg_info!(Message::AlarmRescheduled {
                        title: task.title.clone(),
                        next: next.format("%Y-%m-%d %I:%M %p").to_string(),
                    });
                    report.rescheduled.push((task.id, next));
                }
                Ok(None) => {}
                Err(TaskError::StoreClosed) => return Err(TaskError::StoreClosed),
                Err(e) => msg_error!(Message::AlarmTaskFailed {
                    title: task.title.clone(),
                    error: e.to_string(),
                }),
            }
        }

        Ok(report)
    }
}

/// Truncates an instant to the start of its minute.
pub fn minute_of(instant: NaiveDateTime) -> NaiveDateTime {
    instant.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(instant)
}

/// Pending tasks whose due instant is in the same minute as `now`.
pub fn due_now(tasks: &[Task], now: NaiveDateTime) -> Vec<(&Task, NaiveDateTime)> {
    let minute = minute_of(now);
    tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| task.due_instant().map(|due| (task, due)))
        .filter(|(_, due)| minute_of(*due) == minute)
        .collect()
}

/// Look-ahead window of `minutes`. Negative values mean an empty window and
/// values beyond what a `Duration` holds are capped.
pub fn window_minutes(minutes: i64) -> Duration {
    Duration::try_minutes(minutes.max(0)).unwrap_or(Duration::MAX)
}

/// Pending tasks due between `now` and `now + window`, soonest first.
pub fn upcoming(tasks: &[Task], now: NaiveDateTime, window: Duration) -> Vec<&Task> {
    let end = now.checked_add_signed(window).unwrap_or(if window < Duration::zero() {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    });
    let mut upcoming: Vec<(&Task, NaiveDateTime)> = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| task.due_instant().map(|due| (task, due)))
        .filter(|(_, due)| *due >= now && *due <= end)
        .collect();
    upcoming.sort_by_key(|(_, due)| *due);
    upcoming.into_iter().map(|(task, _)| task).collect()
}
