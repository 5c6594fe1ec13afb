//! Plain-text export of a decrypted task list.
//!
//! The store itself is always encrypted; export is the way to get the data
//! out for backup or for another tool. JSON keeps the stored shape, CSV
//! flattens each task to one row with the list position first.
//!
//! ```rust,no_run
//! use taskpilot::libs::export::{ExportFormat, Exporter};
//!
//! # fn demo(tasks: &[taskpilot::libs::task::Task]) -> anyhow::Result<()> {
//! Exporter::new(ExportFormat::Csv, Some("tasks.csv".into())).export(tasks)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_success;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// One CSV row.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    position: usize,
    id: u64,
    title: &'a str,
    category: &'a str,
    due: String,
    time: String,
    priority: String,
    recurring: String,
    completed: bool,
    created_at: String,
}

impl<'a> ExportRow<'a> {
    fn new(position: usize, task: &'a Task) -> Self {
        ExportRow {
            position,
            id: task.id,
            title: &task.title,
            category: &task.category,
            due: task.due.map(|d| d.to_string()).unwrap_or_default(),
            time: task.formatted_time(),
            priority: task.priority.to_string(),
            recurring: task.recurring.as_str().unwrap_or_default().to_string(),
            completed: task.completed,
            created_at: task.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    /// Without an output path the export goes to stdout.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                let file = File::create(path)?;
                write_tasks(tasks, self.format, file)?;
                msg_success!(Message::ExportCompleted(path.display().to_string()));
            }
            None => write_tasks(tasks, self.format, io::stdout().lock())?,
        }
        Ok(())
    }
}

pub fn write_tasks<W: Write>(tasks: &[Task], format: ExportFormat, mut writer: W) -> Result<(), TaskError> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, tasks)?;
            writeln!(writer)?;
        }
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(writer);
            for (index, task) in tasks.iter().enumerate() {
                wtr.serialize(ExportRow::new(index + 1, task))?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_positions() {
        let tasks = vec![Task::new("Pay rent", "Bills"), Task::new("Water plants", "Home")];
        let mut out = Vec::new();
        write_tasks(&tasks, ExportFormat::Csv, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("position,id,title,category"));
        assert!(lines[2].starts_with("2,0,Water plants,Home"));
    }

    #[test]
    fn json_is_the_stored_shape() {
        let tasks = vec![Task::new("Pay rent", "Bills")];
        let mut out = Vec::new();
        write_tasks(&tasks, ExportFormat::Json, &mut out).unwrap();

        let parsed: Vec<Task> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, tasks);
    }
}
