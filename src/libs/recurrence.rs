//! Recurrence engine.
//!
//! Recurring tasks move forward by a fixed offset when they fire or when a
//! completed occurrence is rolled over:
//!
//! - daily: +1 day
//! - weekly: +7 days
//! - monthly: +30 days (a fixed offset, not calendar-month arithmetic)

use crate::libs::task::{Recurrence, Task};
use chrono::{Duration, NaiveDateTime};

impl Recurrence {
    /// Length of one period, or `None` for non-recurring tasks.
    pub fn period(&self) -> Option<Duration> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily => Some(Duration::days(1)),
            Recurrence::Weekly => Some(Duration::days(7)),
            Recurrence::Monthly => Some(Duration::days(30)),
        }
    }
}

/// The occurrence after `due` for the given unit.
pub fn next_occurrence(due: NaiveDateTime, unit: Recurrence) -> Option<NaiveDateTime> {
    unit.period().map(|period| due + period)
}

/// Moves `task` to its next occurrence of `unit` and marks it pending again.
///
/// Tasks without a due date, and `Recurrence::None`, are left untouched and
/// yield `None`. A task with a date but no time keeps having no time.
pub fn advance(task: &mut Task, unit: Recurrence) -> Option<NaiveDateTime> {
    let due = task.due?;
    let current = due.and_time(task.time.unwrap_or_default());
    let next = next_occurrence(current, unit)?;

    task.due = Some(next.date());
    if task.time.is_some() {
        task.time = Some(next.time());
    }
    task.completed = false;

    Some(next)
}

impl Task {
    /// Advances the task by its own recurrence.
    pub fn reschedule(&mut self) -> Option<NaiveDateTime> {
        advance(self, self.recurring)
    }
}
