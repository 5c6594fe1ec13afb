use super::report::{ProductivityReport, TaskStats};
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints `(position, task)` pairs. The position column is what the user
    /// types for `complete` and `delete`.
    pub fn tasks(entries: &[(usize, &Task)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "TITLE", "CATEGORY", "DUE", "TIME", "PRIORITY", "RECURRING", "STATUS"]);
        for (position, task) in entries {
            table.add_row(row![
                position,
                task.title,
                task.category,
                task.formatted_due(),
                task.formatted_time(),
                task.priority,
                task.recurring,
                if task.completed { "✅ Done" } else { "⏳ Pending" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn upcoming(tasks: &[&Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TITLE", "CATEGORY", "DUE", "TIME", "PRIORITY"]);
        for task in tasks {
            table.add_row(row![task.title, task.category, task.formatted_due(), task.formatted_time(), task.priority]);
        }
        table.printstd();

        Ok(())
    }

    pub fn report(report: &ProductivityReport) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PERIOD", "COMPLETED", "TOTAL", "RATE"]);
        table.add_row(row![
            report.period,
            report.completed,
            report.total,
            format!("{:.2}%", report.completion_rate())
        ]);
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &TaskStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "PENDING", "HIGH PRIORITY PENDING"]);
        table.add_row(row![stats.total, stats.completed, stats.pending, stats.high_priority_pending]);
        table.printstd();

        Ok(())
    }
}
