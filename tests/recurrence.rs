#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use taskpilot::libs::recurrence::{advance, next_occurrence};
    use taskpilot::libs::task::{Recurrence, Task};

    fn task_due(y: i32, m: u32, d: u32, recurring: Recurrence) -> Task {
        let mut task = Task::new("Stand-up", "Work");
        task.due = NaiveDate::from_ymd_opt(y, m, d);
        task.time = NaiveTime::from_hms_opt(9, 30, 0);
        task.recurring = recurring;
        task
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_daily_adds_one_day() {
        let mut task = task_due(2025, 1, 1, Recurrence::Daily);
        task.reschedule();
        assert_eq!(task.due, date(2025, 1, 2));
    }

    #[test]
    fn test_weekly_adds_seven_days() {
        let mut task = task_due(2025, 1, 1, Recurrence::Weekly);
        task.reschedule();
        assert_eq!(task.due, date(2025, 1, 8));
    }

    #[test]
    fn test_monthly_adds_thirty_days() {
        let mut task = task_due(2025, 1, 1, Recurrence::Monthly);
        task.reschedule();
        assert_eq!(task.due, date(2025, 1, 31));

        task.reschedule();
        assert_eq!(task.due, date(2025, 3, 2));
    }

    #[test]
    fn test_time_of_day_is_kept() {
        let mut task = task_due(2025, 1, 1, Recurrence::Weekly);
        let next = task.reschedule().unwrap();
        assert_eq!(task.time, NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(next, date(2025, 1, 8).unwrap().and_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn test_advance_resets_completed() {
        let mut task = task_due(2025, 1, 1, Recurrence::Daily);
        task.completed = true;
        advance(&mut task, Recurrence::Daily);
        assert!(!task.completed);
    }

    #[test]
    fn test_non_recurring_is_terminal() {
        let mut task = task_due(2025, 1, 1, Recurrence::None);
        task.completed = true;

        assert_eq!(task.reschedule(), None);
        assert_eq!(task.due, date(2025, 1, 1));
        assert!(task.completed);
    }

    #[test]
    fn test_date_without_time_stays_without_time() {
        let mut task = task_due(2025, 1, 1, Recurrence::Daily);
        task.time = None;

        task.reschedule();
        assert_eq!(task.due, date(2025, 1, 2));
        assert_eq!(task.time, None);
    }

    #[test]
    fn test_undated_task_is_not_advanced() {
        let mut task = Task::new("Someday", "General");
        task.recurring = Recurrence::Daily;
        assert_eq!(task.reschedule(), None);
        assert_eq!(task.due, None);
    }

    #[test]
    fn test_next_occurrence_crosses_year_end() {
        let due = date(2024, 12, 31).unwrap().and_hms_opt(23, 59, 0).unwrap();
        let next = next_occurrence(due, Recurrence::Daily).unwrap();
        assert_eq!(next, date(2025, 1, 1).unwrap().and_hms_opt(23, 59, 0).unwrap());
        assert_eq!(next_occurrence(due, Recurrence::None), None);
    }
}
