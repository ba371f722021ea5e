#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use taskman::libs::export::{render_task_overview, render_user_overview, ExportFormat, Exporter};
    use taskman::libs::report::{build_task_report, build_user_report, TaskReport, UserReport};
    use taskman::libs::task::{RecordDate, Task, TaskStatus};
    use taskman::libs::user::{Role, User};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: TaskReport,
        users: UserReport,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

            let tasks = vec![
                Task {
                    id: 1,
                    owner: "alice".to_string(),
                    title: "T1".to_string(),
                    description: "D".to_string(),
                    due_date: RecordDate::from_text("2025-06-14"),
                    created_date: RecordDate::from_text("2025-06-01"),
                    status: TaskStatus::Incomplete,
                },
                Task {
                    id: 2,
                    owner: "alice".to_string(),
                    title: "T2".to_string(),
                    description: "D".to_string(),
                    due_date: RecordDate::from_text("2025-06-20"),
                    created_date: RecordDate::from_text("2025-06-01"),
                    status: TaskStatus::Complete,
                },
            ];
            let users = vec![User {
                username: "alice".to_string(),
                credential: "secret1".to_string(),
                role: Role::Admin,
            }];

            ExportTestContext {
                temp_dir,
                tasks: build_task_report(&tasks, today),
                users: build_user_report(&users, &tasks, today),
            }
        }
    }

    impl ExportTestContext {
        fn exporter(&self, format: ExportFormat) -> Exporter {
            Exporter::new(
                format,
                self.temp_dir.path().join("task_overview.txt"),
                self.temp_dir.path().join("user_overview.txt"),
            )
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_text_overview_layout(ctx: &mut ExportTestContext) {
        let text = render_task_overview(&ctx.tasks);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(70));
        assert_eq!(lines[1], "TASK OVERVIEW REPORT");
        assert!(text.contains("Total number of tasks tracked: 2\n"));
        assert!(text.contains("Total number of uncompleted and overdue tasks: 1\n"));
        assert!(text.contains("Percentage of overdue tasks: 50.00%\n"));

        let text = render_user_overview(&ctx.users);
        assert!(text.contains("Total number of users registered: 1\n"));
        assert!(text.contains("User: alice\n  Total tasks assigned: 2\n"));
        assert!(text.contains("  Percentage of assigned tasks completed: 50.00%\n"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_text_export_reads_back(ctx: &mut ExportTestContext) {
        let exporter = ctx.exporter(ExportFormat::Text);
        assert!(!exporter.exists());

        exporter.export(&ctx.tasks, &ctx.users).unwrap();
        assert!(exporter.exists());

        let (tasks, users) = exporter.read().unwrap();
        assert_eq!(tasks, render_task_overview(&ctx.tasks));
        assert_eq!(users, render_user_overview(&ctx.users));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export(ctx: &mut ExportTestContext) {
        let exporter = ctx.exporter(ExportFormat::Json);
        assert!(exporter.task_path().ends_with("task_overview.json"));

        exporter.export(&ctx.tasks, &ctx.users).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(exporter.task_path()).unwrap()).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["overdue_pct"], 50.0);

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(exporter.user_path()).unwrap()).unwrap();
        assert_eq!(value["users"][0]["username"], "alice");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export(ctx: &mut ExportTestContext) {
        let exporter = ctx.exporter(ExportFormat::Csv);
        exporter.export(&ctx.tasks, &ctx.users).unwrap();

        let mut reader = csv::Reader::from_path(exporter.task_path()).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "total");
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "2");

        let mut reader = csv::Reader::from_path(exporter.user_path()).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "alice");
    }
}
