#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskpilot::libs::export::{ExportFormat, Exporter};
    use taskpilot::libs::task::{NewTask, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn tasks() -> Vec<Task> {
        let mut rent = NewTask {
            title: "Pay rent".to_string(),
            category: Some("Bills".to_string()),
            due: Some("2025-03-01".to_string()),
            time: Some("09:00 AM".to_string()),
            recurring: Some("monthly".to_string()),
            priority: Some("High".to_string()),
        }
        .validate()
        .unwrap();
        rent.id = 1;
        vec![rent]
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.csv");
        Exporter::new(ExportFormat::Csv, Some(output_path.clone())).export(&tasks()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert!(row.starts_with("1,1,Pay rent,Bills,2025-03-01,09:00 AM,High,monthly,false,"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.json");
        Exporter::new(ExportFormat::Json, Some(output_path.clone())).export(&tasks()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["title"], "Pay rent");
        assert_eq!(value[0]["due"], "2025-03-01");
        assert_eq!(value[0]["time"], "09:00 AM");
        assert_eq!(value[0]["recurring"], "monthly");

        let parsed: Vec<Task> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0].due, NaiveDate::from_ymd_opt(2025, 3, 1));
    }
}
