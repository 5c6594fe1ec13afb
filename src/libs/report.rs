//! Productivity reports and overall statistics.
//!
//! A report counts the dated tasks that fall into a period relative to
//! today and how many of them are completed:
//!
//! | Period  | Tasks counted                          |
//! |---------|----------------------------------------|
//! | daily   | due today                              |
//! | weekly  | due 7 days ago or later, future included |
//! | monthly | due in the current calendar month      |

use crate::libs::error::TaskError;
use crate::libs::task::{Priority, Task};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] = [ReportPeriod::Daily, ReportPeriod::Weekly, ReportPeriod::Monthly];

    pub fn contains(&self, due: NaiveDate, today: NaiveDate) -> bool {
        match self {
            ReportPeriod::Daily => due == today,
            ReportPeriod::Weekly => (today - due).num_days() <= 7,
            ReportPeriod::Monthly => due.year() == today.year() && due.month() == today.month(),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(ReportPeriod::Daily),
            "weekly" => Ok(ReportPeriod::Weekly),
            "monthly" => Ok(ReportPeriod::Monthly),
            other => Err(TaskError::Validation(format!(
                "Unknown report period '{}': use daily, weekly or monthly",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportPeriod::Daily => "Daily",
            ReportPeriod::Weekly => "Weekly",
            ReportPeriod::Monthly => "Monthly",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductivityReport {
    pub period: ReportPeriod,
    pub completed: usize,
    pub total: usize,
}

impl ProductivityReport {
    /// Percentage of completed tasks, 0 when the period is empty.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}

pub fn productivity_report(tasks: &[Task], period: ReportPeriod, today: NaiveDate) -> ProductivityReport {
    let in_period: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.due.map_or(false, |due| period.contains(due, today)))
        .collect();

    ProductivityReport {
        period,
        completed: in_period.iter().filter(|task| task.completed).count(),
        total: in_period.len(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority_pending: usize,
}

pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskStats {
        total: tasks.len(),
        completed,
        pending: tasks.len() - completed,
        high_priority_pending: tasks.iter().filter(|t| !t.completed && t.priority == Priority::High).count(),
    }
}
