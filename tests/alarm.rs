#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use std::sync::{Arc, Mutex};
    use taskpilot::db::actor::{self, StoreHandle};
    use taskpilot::db::tasks::{Owner, TaskStore};
    use taskpilot::libs::alarm::AlarmScanner;
    use taskpilot::libs::config::AlarmConfig;
    use taskpilot::libs::data_storage::DataStorage;
    use taskpilot::libs::error::TaskError;
    use taskpilot::libs::notifier::{Notification, Notifier};
    use taskpilot::libs::task::{NewTask, Task};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) -> Result<(), TaskError> {
            self.sent.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _notification: &Notification) -> Result<(), TaskError> {
            Err(TaskError::Notify("display unavailable".to_string()))
        }
    }

    struct AlarmTestContext {
        _temp_dir: TempDir,
        store: StoreHandle,
        notifier: Arc<RecordingNotifier>,
        scanner: AlarmScanner,
    }

    impl AsyncTestContext for AlarmTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path());
            let cipher = taskpilot::libs::secret::Cipher::generate();
            let store = actor::spawn(TaskStore::open(&storage, &Owner::Default, cipher).unwrap());
            let notifier = Arc::new(RecordingNotifier::default());
            let scanner = AlarmScanner::new(store.clone(), notifier.clone(), AlarmConfig::default());
            AlarmTestContext {
                _temp_dir: temp_dir,
                store,
                notifier,
                scanner,
            }
        }
    }

    impl AlarmTestContext {
        async fn add(&self, title: &str, due: &str, time: &str, recurring: &str) -> Task {
            let task = NewTask {
                title: title.to_string(),
                category: Some("Bills".to_string()),
                due: Some(due.to_string()),
                time: Some(time.to_string()),
                recurring: Some(recurring.to_string()),
                priority: None,
            }
            .validate()
            .unwrap();
            self.store.add(task).await.unwrap()
        }

        fn sent(&self) -> Vec<Notification> {
            self.notifier.sent.lock().unwrap().clone()
        }
    }

    fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test_context(AlarmTestContext)]
    #[tokio::test]
    async fn test_pay_rent_scenario(ctx: &mut AlarmTestContext) {
        let rent = ctx.add("Pay rent", "2025-03-01", "09:00 AM", "monthly").await;
        let tasks = ctx.store.snapshot().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);

        let report = ctx.scanner.scan_at(at(1, 9, 0, 0)).await.unwrap();
        assert_eq!(report.fired, vec![rent.id]);
        assert_eq!(report.rescheduled, vec![(rent.id, at(31, 9, 0, 0))]);

        let sent = ctx.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Task Reminder");
        assert_eq!(sent[0].message, "Pay rent is due now!");

        let stored = &ctx.store.snapshot().await.unwrap()[0];
        assert_eq!(stored.due, NaiveDate::from_ymd_opt(2025, 3, 31));
        assert_eq!(stored.time, NaiveTime::from_hms_opt(9, 0, 0));
        assert!(!stored.completed);
    }

    #[test_context(AlarmTestContext)]
    #[tokio::test]
    async fn test_fires_once_per_due_minute(ctx: &mut AlarmTestContext) {
        let dentist = ctx.add("Dentist", "2025-03-01", "09:00 AM", "none").await;

        let first = ctx.scanner.scan_at(at(1, 9, 0, 5)).await.unwrap();
        let second = ctx.scanner.scan_at(at(1, 9, 0, 35)).await.unwrap();

        assert_eq!(first.fired, vec![dentist.id]);
        assert!(second.fired.is_empty());
        assert_eq!(ctx.sent().len(), 1);
    }

    #[test_context(AlarmTestContext)]
    #[tokio::test]
    async fn test_non_recurring_task_is_left_unchanged(ctx: &mut AlarmTestContext) {
        let dentist = ctx.add("Dentist", "2025-03-01", "09:00 AM", "none").await;

        let report = ctx.scanner.scan_at(at(1, 9, 0, 0)).await.unwrap();
        assert!(report.rescheduled.is_empty());

        let stored = ctx.store.snapshot().await.unwrap();
        assert_eq!(stored[0], dentist);
    }

    #[test_context(AlarmTestContext)]
    #[tokio::test]
    async fn test_missed_minutes_never_fire(ctx: &mut AlarmTestContext) {
        ctx.add("Pay rent", "2025-03-01", "09:00 AM", "monthly").await;

        assert!(ctx.scanner.scan_at(at(1, 8, 59, 30)).await.unwrap().fired.is_empty());
        assert!(ctx.scanner.scan_at(at(1, 9, 1, 0)).await.unwrap().fired.is_empty());
        assert!(ctx.scanner.scan_at(at(2, 9, 0, 0)).await.unwrap().fired.is_empty());
        assert!(ctx.sent().is_empty());

        let stored = &ctx.store.snapshot().await.unwrap()[0];
        assert_eq!(stored.due, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test_context(AlarmTestContext)]
    #[tokio::test]
    async fn test_completed_and_undated_tasks_are_skipped(ctx: &mut AlarmTestContext) {
        let done = ctx.add("Done already", "2025-03-01", "09:00 AM", "daily").await;
        ctx.store.complete(done.id).await.unwrap();
        ctx.store.add(NewTask::new("No due date").validate().unwrap()).await.unwrap();

        let report = ctx.scanner.scan_at(at(1, 9, 0, 0)).await.unwrap();
        assert!(report.fired.is_empty());
    }

    #[test_context(AlarmTestContext)]
    #[tokio::test]
    async fn test_daily_task_fires_again_next_day(ctx: &mut AlarmTestContext) {
        let standup = ctx.add("Stand-up", "2025-03-01", "09:00 AM", "daily").await;

        ctx.scanner.scan_at(at(1, 9, 0, 0)).await.unwrap();
        let next_day = ctx.scanner.scan_at(at(2, 9, 0, 10)).await.unwrap();

        assert_eq!(next_day.fired, vec![standup.id]);
        assert_eq!(next_day.rescheduled, vec![(standup.id, at(3, 9, 0, 0))]);
        assert_eq!(ctx.sent().len(), 2);
    }

    #[test_context(AlarmTestContext)]
    #[tokio::test]
    async fn test_notifier_failure_does_not_stop_scan(ctx: &mut AlarmTestContext) {
        let rent = ctx.add("Pay rent", "2025-03-01", "09:00 AM", "monthly").await;
        let gym = ctx.add("Gym", "2025-03-01", "09:00 AM", "none").await;

        let mut scanner = AlarmScanner::new(ctx.store.clone(), Arc::new(FailingNotifier), AlarmConfig::default());
        let report = scanner.scan_at(at(1, 9, 0, 0)).await.unwrap();

        assert_eq!(report.fired, vec![rent.id, gym.id]);
        assert_eq!(report.rescheduled.len(), 1);
    }
}
