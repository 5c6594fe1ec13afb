//! Task record model.
//!
//! A [`Task`] is one user-created reminder. It serializes to the JSON object
//! written by earlier TaskPilot releases:
//!
//! ```json
//! {"id": 1, "title": "Pay rent", "category": "Bills", "due": "2025-03-01",
//!  "time": "09:00 AM", "completed": false, "recurring": "monthly",
//!  "priority": "Medium", "created_at": "2025-02-20T10:15:00"}
//! ```
//!
//! Older files may omit `id`, `priority` and `created_at`, store empty strings
//! for a missing due date or time, and carry unknown recurrence values. All of
//! those load without error.

use crate::libs::error::TaskError;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%I:%M %p";

const DATE_INPUT_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%m-%d-%Y", "%Y/%m/%d"];
const TIME_INPUT_FORMATS: [&str; 3] = ["%I:%M %p", "%I:%M%p", "%H:%M"];

/// Stable task identifier, assigned by the store when a task is added.
pub type TaskId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Maps user or file input to a recurrence; anything unrecognized is `None`.
    pub fn normalize(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "daily" => Recurrence::Daily,
            "weekly" => Recurrence::Weekly,
            "monthly" => Recurrence::Monthly,
            _ => Recurrence::None,
        }
    }

    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily => Some("daily"),
            Recurrence::Weekly => Some("weekly"),
            Recurrence::Monthly => Some("monthly"),
        }
    }

    pub fn is_recurring(&self) -> bool {
        *self != Recurrence::None
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or("none"))
    }
}

impl Serialize for Recurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(value) => serializer.serialize_str(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Recurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|value| Recurrence::normalize(&value)).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Lenient parse used for both user input and stored records.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// Sort rank, most urgent first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", text)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|value| Priority::parse(&value)).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: TaskId,
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, with = "optional_date")]
    pub due: Option<NaiveDate>,
    #[serde(default, with = "optional_time")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub recurring: Recurrence,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "now_local")]
    pub created_at: NaiveDateTime,
}

impl Task {
    pub fn new(title: &str, category: &str) -> Self {
        Task {
            id: 0,
            title: title.to_string(),
            category: category.to_string(),
            due: None,
            time: None,
            completed: false,
            recurring: Recurrence::None,
            priority: Priority::Medium,
            created_at: now_local(),
        }
    }

    /// The absolute moment the task is due. Only defined when both a date and
    /// a time are set.
    pub fn due_instant(&self) -> Option<NaiveDateTime> {
        match (self.due, self.time) {
            (Some(date), Some(time)) => Some(date.and_time(time)),
            _ => None,
        }
    }

    pub fn formatted_due(&self) -> String {
        self.due.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_else(|| "-".to_string())
    }

    pub fn formatted_time(&self) -> String {
        self.time.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default()
    }
}

/// Raw input for a new task, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub category: Option<String>,
    pub due: Option<String>,
    pub time: Option<String>,
    pub recurring: Option<String>,
    pub priority: Option<String>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        NewTask {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Validates and normalizes the input into a task that is ready to be
    /// stored. Nothing is saved when this fails.
    pub fn validate(self) -> Result<Task, TaskError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskError::Validation("Task title is required".to_string()));
        }

        let category = non_blank(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let mut task = Task::new(title, &category);
        task.due = non_blank(self.due).map(|d| parse_date(&d)).transpose()?;
        task.time = non_blank(self.time).map(|t| parse_time(&t)).transpose()?;
        task.recurring = self.recurring.as_deref().map(Recurrence::normalize).unwrap_or_default();
        task.priority = self.priority.as_deref().map(Priority::parse).unwrap_or_default();

        Ok(task)
    }
}

/// Which tasks a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub category: Option<String>,
    pub status: StatusFilter,
}

impl TaskFilter {
    pub fn category(category: &str) -> Self {
        TaskFilter {
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| task.category.eq_ignore_ascii_case(category.trim()));
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.completed,
            StatusFilter::Completed => task.completed,
        };
        category_ok && status_ok
    }
}

/// Applies `filter` and pairs every match with its 1-based position in the
/// full list. The position is what the user types to complete or delete it.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<(usize, &'a Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task))
        .map(|(index, task)| (index + 1, task))
        .collect()
}

/// Orders a listing for display: pending first, then by priority, then by due
/// date with undated tasks last.
pub fn sort_for_display(entries: &mut [(usize, &Task)]) {
    entries.sort_by_key(|(_, task)| (task.completed, task.priority.rank(), task.due.unwrap_or(NaiveDate::MAX)));
}

pub fn parse_date(input: &str) -> Result<NaiveDate, TaskError> {
    let input = input.trim();
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .ok_or_else(|| TaskError::DateParse(input.to_string()))
}

/// Accepts `12:30 PM`, `12:30PM`, `23:30` and `12.30 pm`.
pub fn parse_time(input: &str) -> Result<NaiveTime, TaskError> {
    let normalized = input.trim().replace('.', ":").to_uppercase();
    TIME_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
        .ok_or_else(|| TaskError::TimeParse(input.trim().to_string()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

mod optional_date {
    use super::{parse_date, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_date(&raw).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}

mod optional_time {
    use super::{parse_time, TIME_FORMAT};
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&time.format(TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_time(&raw).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recurrence_normalizes_unknown_values() {
        assert_eq!(Recurrence::normalize("Weekly "), Recurrence::Weekly);
        assert_eq!(Recurrence::normalize("yearly"), Recurrence::None);
        assert_eq!(Recurrence::normalize(""), Recurrence::None);
    }

    #[test]
    fn priority_parse_defaults_to_medium() {
        assert_eq!(Priority::parse("HIGH"), Priority::High);
        assert_eq!(Priority::parse("urgent"), Priority::Medium);
    }

    #[test]
    fn due_instant_needs_date_and_time() {
        let mut task = Task::new("Call mom", DEFAULT_CATEGORY);
        task.due = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert_eq!(task.due_instant(), None);

        task.time = NaiveTime::from_hms_opt(9, 0, 0);
        assert_eq!(task.due_instant(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(9, 0, 0));
    }
}
