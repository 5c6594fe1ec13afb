#[cfg(test)]
mod tests {
    use std::fs;
    use taskpilot::libs::config::{AlarmConfig, Config, CONFIG_FILE_NAME};
    use taskpilot::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path());
            ConfigTestContext { temp_dir, storage }
        }
    }

    #[test]
    fn test_alarm_defaults() {
        let alarm = AlarmConfig::default();
        assert_eq!(alarm.poll_interval, 30);
        assert_eq!(alarm.notification_timeout, 10);
        assert_eq!(alarm.upcoming_window, 60);
    }

    #[test]
    fn test_poll_interval_is_kept_within_a_minute() {
        let interval = |poll_interval| {
            AlarmConfig {
                poll_interval,
                ..AlarmConfig::default()
            }
            .poll_interval_secs()
        };
        assert_eq!(interval(0), 1);
        assert_eq!(interval(45), 45);
        assert_eq!(interval(60), 60);
        assert_eq!(interval(600), 60);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.alarm_or_default(), AlarmConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            alarm: Some(AlarmConfig {
                poll_interval: 15,
                notification_timeout: 5,
                upcoming_window: 120,
            }),
            owner: Some("alice".to_string()),
        };
        config.save_to(&ctx.storage).unwrap();

        assert_eq!(Config::read_from(&ctx.storage).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_alarm_section(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(path, r#"{"alarm": {"poll_interval": 5}}"#).unwrap();

        let alarm = Config::read_from(&ctx.storage).unwrap().alarm_or_default();
        assert_eq!(alarm.poll_interval, 5);
        assert_eq!(alarm.upcoming_window, 60);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_sections_are_not_written(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();
        let raw = fs::read_to_string(ctx.temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(raw.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();
        Config::delete_from(&ctx.storage).unwrap();
        assert!(!ctx.temp_dir.path().join(CONFIG_FILE_NAME).exists());

        // Deleting twice is fine.
        Config::delete_from(&ctx.storage).unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.storage).is_err());
    }
}
