#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskman::libs::error::TaskError;
    use taskman::libs::user::Role;
    use taskman::libs::validation;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_username_rules() {
        assert!(validation::username("alice").is_ok());
        assert!(validation::username("bob_42").is_ok());
        assert!(validation::username("abc").is_ok());
        assert!(validation::username("a".repeat(20).as_str()).is_ok());

        assert!(validation::username("").is_err());
        assert!(validation::username("ab").is_err());
        assert!(validation::username("a".repeat(21).as_str()).is_err());
        assert!(validation::username("bob smith").is_err());
        assert!(validation::username("bob-smith").is_err());
    }

    #[test]
    fn test_username_reason_is_reported() {
        let err = validation::username("ab").unwrap_err();
        assert_eq!(err.to_string(), "Username must be at least 3 characters long.");
    }

    #[test]
    fn test_credential_rules() {
        assert!(validation::credential("secret1").is_ok());
        assert!(validation::credential("123456").is_ok());

        assert!(validation::credential("").is_err());
        assert!(validation::credential("12345").is_err());
        assert!(validation::credential("pass, word").is_err());
        assert!(validation::credential("pass\nword").is_err());
    }

    #[test]
    fn test_date_format() {
        assert_eq!(validation::date_format("2025-03-09").unwrap(), date(2025, 3, 9));

        assert!(validation::date_format("").is_err());
        assert!(validation::date_format("09/03/2025").is_err());
        assert!(validation::date_format("2025-02-30").is_err());
    }

    #[test]
    fn test_future_due_date_boundary() {
        let today = date(2025, 6, 15);

        assert_eq!(validation::future_due_date("2025-06-15", today).unwrap(), today);
        assert!(validation::future_due_date("2025-06-16", today).is_ok());

        let err = validation::future_due_date("2025-06-14", today).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert_eq!(err.to_string(), "Due date cannot be in the past.");
    }

    #[test]
    fn test_record_text_rejects_separator() {
        assert!(validation::record_text("Write docs", "Task title").is_ok());

        assert!(validation::record_text("   ", "Task title").is_err());
        assert!(validation::record_text("docs, tests", "Task title").is_err());
        assert!(validation::record_text("line\nbreak", "Task title").is_err());
        // A comma without the following space does not split a record.
        assert!(validation::record_text("docs,tests", "Task title").is_ok());
    }

    #[test]
    fn test_non_empty_names_field() {
        let err = validation::non_empty("", "Description").unwrap_err();
        assert_eq!(err.to_string(), "Description cannot be empty.");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(validation::role("Admin").unwrap(), Role::Admin);
        assert_eq!(validation::role("ADMIN").unwrap(), Role::Admin);
        assert_eq!(validation::role("non-admin").unwrap(), Role::NonAdmin);
        assert!(validation::role("guest").is_err());
    }
}
