#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use taskpilot::libs::error::TaskError;
    use taskpilot::libs::task::{NewTask, Priority, Recurrence, DEFAULT_CATEGORY};

    #[test]
    fn test_empty_title_is_rejected() {
        assert!(matches!(NewTask::new("").validate(), Err(TaskError::Validation(_))));
    }

    #[test]
    fn test_whitespace_title_is_rejected() {
        assert!(matches!(NewTask::new("   \t").validate(), Err(TaskError::Validation(_))));
    }

    #[test]
    fn test_title_is_trimmed() {
        let task = NewTask::new("  Pay rent  ").validate().unwrap();
        assert_eq!(task.title, "Pay rent");
    }

    #[test]
    fn test_unknown_recurrence_becomes_none() {
        let task = NewTask {
            recurring: Some("yearly".to_string()),
            ..NewTask::new("Renew passport")
        }
        .validate()
        .unwrap();
        assert_eq!(task.recurring, Recurrence::None);
    }

    #[test]
    fn test_defaults() {
        let task = NewTask::new("Water plants").validate().unwrap();
        assert_eq!(task.category, DEFAULT_CATEGORY);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.recurring, Recurrence::None);
        assert_eq!(task.due, None);
        assert_eq!(task.time, None);
        assert!(!task.completed);
        assert_eq!(task.id, 0);
    }

    #[test]
    fn test_blank_optional_fields_are_ignored() {
        let task = NewTask {
            category: Some("  ".to_string()),
            due: Some("".to_string()),
            time: Some(" ".to_string()),
            ..NewTask::new("Water plants")
        }
        .validate()
        .unwrap();
        assert_eq!(task.category, DEFAULT_CATEGORY);
        assert_eq!(task.due, None);
        assert_eq!(task.time, None);
    }

    #[test]
    fn test_full_input() {
        let task = NewTask {
            title: "Pay rent".to_string(),
            category: Some("Bills".to_string()),
            due: Some("01/03/2025".to_string()),
            time: Some("9:00 am".to_string()),
            recurring: Some("Monthly".to_string()),
            priority: Some("high".to_string()),
        }
        .validate()
        .unwrap();

        assert_eq!(task.category, "Bills");
        assert_eq!(task.due, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(task.time, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(task.recurring, Recurrence::Monthly);
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_bad_date_aborts() {
        let result = NewTask {
            due: Some("next tuesday".to_string()),
            ..NewTask::new("Dentist")
        }
        .validate();
        assert!(matches!(result, Err(TaskError::DateParse(_))));
    }

    #[test]
    fn test_bad_time_aborts() {
        let result = NewTask {
            time: Some("25:99".to_string()),
            ..NewTask::new("Dentist")
        }
        .validate();
        assert!(matches!(result, Err(TaskError::TimeParse(_))));
    }
}
