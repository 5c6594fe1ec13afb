#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use taskpilot::libs::report::{productivity_report, task_stats, ReportPeriod};
    use taskpilot::libs::task::{Priority, Task};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn task(days_ago: i64, completed: bool) -> Task {
        let mut task = Task::new("Task", "General");
        task.due = Some(today() - Duration::days(days_ago));
        task.completed = completed;
        task
    }

    fn sample() -> Vec<Task> {
        vec![
            task(0, true),
            task(0, false),
            task(3, true),
            task(7, true),
            task(8, false),
            task(-2, false),
            task(20, true),
            Task::new("Undated", "General"),
        ]
    }

    #[test]
    fn test_daily_report() {
        let report = productivity_report(&sample(), ReportPeriod::Daily, today());
        assert_eq!((report.completed, report.total), (1, 2));
        assert_eq!(report.completion_rate(), 50.0);
    }

    #[test]
    fn test_weekly_report() {
        // Today, 3 and 7 days ago, and the task due in two days; older tasks are excluded.
        let report = productivity_report(&sample(), ReportPeriod::Weekly, today());
        assert_eq!((report.completed, report.total), (3, 5));
        assert_eq!(report.completion_rate(), 60.0);
    }

    #[test]
    fn test_monthly_report() {
        // Everything dated in March 2025; 20 days ago is February 23.
        let report = productivity_report(&sample(), ReportPeriod::Monthly, today());
        assert_eq!((report.completed, report.total), (3, 6));
    }

    #[test]
    fn test_unknown_period() {
        assert!("quarterly".parse::<ReportPeriod>().is_err());
        assert_eq!(" WEEKLY ".parse::<ReportPeriod>().unwrap(), ReportPeriod::Weekly);
    }

    #[test]
    fn test_stats() {
        let mut tasks = sample();
        tasks[1].priority = Priority::High;
        tasks[2].priority = Priority::High;

        let stats = task_stats(&tasks);
        assert_eq!(stats.total, 8);
        assert_eq!(stats.completed, 4);
        assert_eq!(stats.pending, 4);
        assert_eq!(stats.high_priority_pending, 1);
    }
}
