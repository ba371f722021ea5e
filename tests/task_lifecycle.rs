#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use std::fs;
    use taskman::db::store::{RecordKind, RecordStore};
    use taskman::db::tasks::Tasks;
    use taskman::db::users::Users;
    use taskman::libs::error::TaskError;
    use taskman::libs::lifecycle::TaskSet;
    use taskman::libs::task::{NewTask, TaskEdit, TaskFilter, TaskStatus};
    use taskman::libs::user::Role;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
        store: RecordStore,
        tasks: Tasks,
        today: NaiveDate,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = RecordStore::in_dir(temp_dir.path());

            let users = Users::new(store.clone());
            users.register("alice", "secret1", Role::Admin).unwrap();
            users.register("bob", "secret2", Role::NonAdmin).unwrap();

            TaskTestContext {
                temp_dir,
                tasks: Tasks::new(store.clone()),
                store,
                today: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn new_task(&self, owner: &str, title: &str, due: NaiveDate) -> NewTask {
            NewTask {
                owner: owner.to_string(),
                title: title.to_string(),
                description: "D".to_string(),
                due_date: due.format("%Y-%m-%d").to_string(),
            }
        }

        fn create(&self, owner: &str, title: &str) -> u32 {
            let due = self.today + Duration::days(7);
            self.tasks.create_on(self.new_task(owner, title, due), self.today).unwrap().id
        }

        fn backups(&self) -> usize {
            fs::read_dir(self.temp_dir.path())
                .unwrap()
                .filter(|e| e.as_ref().unwrap().file_name().to_string_lossy().starts_with("task.txt.backup_"))
                .count()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_reset_edit_scenario(ctx: &mut TaskTestContext) {
        let task = ctx
            .tasks
            .create_on(ctx.new_task("alice", "T1", ctx.today), ctx.today)
            .unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.status, TaskStatus::Incomplete);
        assert_eq!(task.created_date.date(), Some(ctx.today));

        let task = ctx.tasks.mark_complete(1).unwrap();
        assert_eq!(task.status, TaskStatus::Complete);

        let edit = TaskEdit {
            owner: Some("bob".to_string()),
            ..Default::default()
        };
        assert!(matches!(ctx.tasks.edit(1, edit.clone()), Err(TaskError::EditLocked(1))));

        let task = ctx.tasks.reset_incomplete(1).unwrap();
        assert_eq!(task.status, TaskStatus::Incomplete);

        let task = ctx.tasks.edit(1, edit).unwrap();
        assert_eq!(task.owner, "bob");
        assert_eq!(ctx.tasks.get(1).unwrap().unwrap().owner, "bob");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_due_date_boundaries(ctx: &mut TaskTestContext) {
        let yesterday = ctx.today - Duration::days(1);
        let err = ctx
            .tasks
            .create_on(ctx.new_task("alice", "Late", yesterday), ctx.today)
            .unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));

        assert!(ctx
            .tasks
            .create_on(ctx.new_task("alice", "Today", ctx.today), ctx.today)
            .is_ok());
        assert_eq!(ctx.tasks.fetch(TaskFilter::All).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_requires_known_owner(ctx: &mut TaskTestContext) {
        let err = ctx
            .tasks
            .create_on(ctx.new_task("mallory", "T", ctx.today), ctx.today)
            .unwrap_err();
        assert!(matches!(err, TaskError::UnknownOwner(ref name) if name == "mallory"));
        assert!(!ctx.store.path(RecordKind::Tasks).exists());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_rejects_separator_in_title(ctx: &mut TaskTestContext) {
        let err = ctx
            .tasks
            .create_on(ctx.new_task("alice", "docs, tests", ctx.today), ctx.today)
            .unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_next_id_exceeds_existing_after_deleting_maximum(ctx: &mut TaskTestContext) {
        assert_eq!(ctx.tasks.next_id().unwrap(), 1);
        for title in ["A", "B", "C"] {
            ctx.create("alice", title);
        }

        ctx.tasks.delete("3").unwrap();
        let next = ctx.tasks.next_id().unwrap();
        assert!(ctx.tasks.fetch(TaskFilter::All).unwrap().iter().all(|t| t.id < next));

        // Gaps below the maximum are never filled.
        ctx.tasks.delete("1").unwrap();
        assert_eq!(ctx.create("alice", "D"), 3);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_next_id_follows_maximum_on_disk(ctx: &mut TaskTestContext) {
        fs::write(
            ctx.store.path(RecordKind::Tasks),
            "7, alice, T7, D, 2030-01-01, 2025-01-01, No\n2, bob, T2, D, 2030-01-01, 2025-01-01, Yes\n",
        )
        .unwrap();

        assert_eq!(ctx.create("bob", "New"), 8);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_fails_when_id_space_exhausted(ctx: &mut TaskTestContext) {
        let line = "4294967295, alice, T, D, 2030-01-01, 2029-01-01, No\n";
        fs::write(ctx.store.path(RecordKind::Tasks), line).unwrap();

        assert!(matches!(ctx.tasks.next_id(), Err(TaskError::Validation(_))));
        let err = ctx
            .tasks
            .create_on(ctx.new_task("alice", "Overflow", ctx.today), ctx.today)
            .unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));

        // The stored task is neither rewritten nor lost.
        assert_eq!(fs::read_to_string(ctx.store.path(RecordKind::Tasks)).unwrap(), line);
        assert_eq!(ctx.tasks.get(u32::MAX).unwrap().unwrap().title, "T");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_is_involution(ctx: &mut TaskTestContext) {
        let id = ctx.create("bob", "Toggle me");

        assert_eq!(ctx.tasks.toggle_status(id).unwrap().status, TaskStatus::Complete);
        assert_eq!(ctx.tasks.toggle_status(id).unwrap().status, TaskStatus::Incomplete);
        assert!(matches!(ctx.tasks.toggle_status(99), Err(TaskError::NotFound(_))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_locked_for_any_field(ctx: &mut TaskTestContext) {
        let id = ctx.create("alice", "Done");
        ctx.tasks.mark_complete(id).unwrap();

        let edits = [
            TaskEdit::default(),
            TaskEdit {
                due_date: Some("2030-01-01".to_string()),
                ..Default::default()
            },
            TaskEdit {
                title: Some("Renamed".to_string()),
                description: Some("Changed".to_string()),
                ..Default::default()
            },
        ];
        for edit in edits {
            assert!(matches!(ctx.tasks.edit(id, edit), Err(TaskError::EditLocked(_))));
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_validates_before_applying(ctx: &mut TaskTestContext) {
        let id = ctx.create("alice", "Original");
        let before = ctx.tasks.get(id).unwrap().unwrap();

        let edit = TaskEdit {
            owner: Some("bob".to_string()),
            due_date: Some("next week".to_string()),
            ..Default::default()
        };
        assert!(matches!(ctx.tasks.edit(id, edit), Err(TaskError::Validation(_))));
        assert_eq!(ctx.tasks.get(id).unwrap().unwrap(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_edit_due_date_accepts_past_dates(ctx: &mut TaskTestContext) {
        let id = ctx.create("alice", "Re-date");

        let edit = TaskEdit {
            due_date: Some("2001-01-01".to_string()),
            title: Some("Re-dated".to_string()),
            ..Default::default()
        };
        let task = ctx.tasks.edit(id, edit).unwrap();
        assert_eq!(task.due_date.as_str(), "2001-01-01");
        assert_eq!(task.title, "Re-dated");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_reset_incomplete_is_informational(ctx: &mut TaskTestContext) {
        let id = ctx.create("alice", "Open");
        let before = fs::read_to_string(ctx.store.path(RecordKind::Tasks)).unwrap();

        let err = ctx.tasks.reset_incomplete(id).unwrap_err();
        assert!(matches!(err, TaskError::AlreadyIncomplete(_)));
        assert!(err.is_informational());
        assert_eq!(fs::read_to_string(ctx.store.path(RecordKind::Tasks)).unwrap(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_by_id_then_title(ctx: &mut TaskTestContext) {
        ctx.create("alice", "2");
        ctx.create("bob", "Second");
        ctx.create("bob", "Shared");
        ctx.create("alice", "Shared");

        // "2" matches the ID of task 2 before the title of task 1.
        assert_eq!(ctx.tasks.delete("2").unwrap().title, "Second");

        let deleted = ctx.tasks.delete("Shared").unwrap();
        assert_eq!(deleted.id, 3);
        let remaining: Vec<u32> = ctx.tasks.fetch(TaskFilter::All).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![1, 4]);

        assert!(matches!(ctx.tasks.delete("Missing"), Err(TaskError::NotFound(_))));
        assert!(ctx.backups() >= 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_filters(ctx: &mut TaskTestContext) {
        let a = ctx.create("alice", "A");
        ctx.create("bob", "B");
        ctx.tasks.mark_complete(a).unwrap();

        let alice = ctx.tasks.fetch(TaskFilter::Owner("alice".to_string())).unwrap();
        assert_eq!(alice.len(), 1);
        let completed = ctx.tasks.fetch(TaskFilter::Completed).unwrap();
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_task_set_is_pure() {
        let mut set = TaskSet::default();
        assert!(matches!(set.mark_complete(1), Err(TaskError::NotFound(_))));
        assert_eq!(set.next_id().unwrap(), 1);
        assert!(set.tasks().is_empty());
    }
}
