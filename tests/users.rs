#[cfg(test)]
mod tests {
    use std::fs;
    use taskman::db::store::{RecordKind, RecordStore};
    use taskman::db::users::Users;
    use taskman::libs::error::TaskError;
    use taskman::libs::user::Role;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct UserTestContext {
        temp_dir: TempDir,
        store: RecordStore,
        users: Users,
    }

    impl TestContext for UserTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = RecordStore::in_dir(temp_dir.path());
            let users = Users::new(store.clone());
            UserTestContext { temp_dir, store, users }
        }
    }

    fn backups(ctx: &UserTestContext) -> usize {
        fs::read_dir(ctx.temp_dir.path())
            .unwrap()
            .filter(|e| e.as_ref().unwrap().file_name().to_string_lossy().contains(".backup_"))
            .count()
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_register_and_list(ctx: &mut UserTestContext) {
        ctx.users.register("alice", "secret1", Role::Admin).unwrap();
        ctx.users.register("bob", "secret2", Role::NonAdmin).unwrap();

        let users = ctx.users.list().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert!(users[0].is_admin());
        assert_eq!(users[1].role, Role::NonAdmin);
        assert!(ctx.users.exists("bob").unwrap());
        assert!(!ctx.users.exists("Bob").unwrap());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_duplicate_username_rejected(ctx: &mut UserTestContext) {
        ctx.users.register("alice", "secret1", Role::Admin).unwrap();

        let err = ctx.users.register("alice", "another1", Role::NonAdmin).unwrap_err();
        assert!(matches!(err, TaskError::DuplicateUsername(ref name) if name == "alice"));
        assert_eq!(ctx.users.list().unwrap().len(), 1);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_register_validates_fields(ctx: &mut UserTestContext) {
        assert!(matches!(
            ctx.users.register("al", "secret1", Role::Admin),
            Err(TaskError::Validation(_))
        ));
        assert!(matches!(
            ctx.users.register("alice", "short", Role::Admin),
            Err(TaskError::Validation(_))
        ));
        assert!(ctx.users.list().unwrap().is_empty());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_authentication_errors_are_identical(ctx: &mut UserTestContext) {
        ctx.users.register("alice", "secret1", Role::Admin).unwrap();

        let unknown = ctx.users.authenticate("mallory", "secret1").unwrap_err();
        let wrong = ctx.users.authenticate("alice", "wrong-password").unwrap_err();
        assert!(matches!(unknown, TaskError::Authentication));
        assert!(matches!(wrong, TaskError::Authentication));
        assert_eq!(unknown.to_string(), wrong.to_string());

        let user = ctx.users.authenticate("alice", "secret1").unwrap();
        assert_eq!(user.role, Role::Admin);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_legacy_user_cannot_log_in_until_backfilled(ctx: &mut UserTestContext) {
        fs::write(ctx.store.path(RecordKind::Users), "admin, adminpw, Admin\nbob, secret1\n").unwrap();

        assert_eq!(ctx.users.legacy_count().unwrap(), 1);
        assert!(ctx.users.authenticate("bob", "secret1").is_err());
        assert_eq!(ctx.users.list().unwrap().len(), 1);
        // Legacy names still count as taken.
        assert!(ctx.users.register("bob", "secret9", Role::Admin).is_err());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_backfill_assigns_roles_and_backs_up(ctx: &mut UserTestContext) {
        fs::write(
            ctx.store.path(RecordKind::Users),
            "admin, adminpw, Admin\nbob, secret1\ncarol, secret2\n",
        )
        .unwrap();

        let mut asked = Vec::new();
        let assigned = ctx
            .users
            .backfill_roles(|username| {
                asked.push(username.to_string());
                Ok(if username == "bob" { Role::Admin } else { Role::NonAdmin })
            })
            .unwrap();

        assert_eq!(asked, vec!["bob", "carol"]);
        assert_eq!(
            assigned,
            vec![("bob".to_string(), Role::Admin), ("carol".to_string(), Role::NonAdmin)]
        );
        assert_eq!(backups(ctx), 1);
        assert_eq!(
            fs::read_to_string(ctx.store.path(RecordKind::Users)).unwrap(),
            "admin, adminpw, Admin\nbob, secret1, Admin\ncarol, secret2, Non-Admin\n"
        );
        assert!(ctx.users.authenticate("carol", "secret2").is_ok());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_backfill_is_idempotent(ctx: &mut UserTestContext) {
        ctx.users.register("alice", "secret1", Role::Admin).unwrap();
        let before = fs::read_to_string(ctx.store.path(RecordKind::Users)).unwrap();

        let assigned = ctx
            .users
            .backfill_roles(|_| panic!("no record should need a role"))
            .unwrap();

        assert!(assigned.is_empty());
        assert_eq!(backups(ctx), 0);
        assert_eq!(fs::read_to_string(ctx.store.path(RecordKind::Users)).unwrap(), before);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_backfill_failure_leaves_file_untouched(ctx: &mut UserTestContext) {
        let content = "bob, secret1\n";
        fs::write(ctx.store.path(RecordKind::Users), content).unwrap();

        let result = ctx
            .users
            .backfill_roles(|_| Err(TaskError::Validation("cancelled".to_string())));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(ctx.store.path(RecordKind::Users)).unwrap(), content);
        assert_eq!(ctx.users.legacy_count().unwrap(), 1);
    }
}
