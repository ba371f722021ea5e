use super::task::Task;
use super::user::User;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Prints tasks with an owner column.
    pub fn tasks(tasks: &[Task]) {
        let mut table = Self::table();

        table.set_titles(row!["ID", "USERNAME", "TITLE", "DESCRIPTION", "DUE DATE", "ASSIGNED", "COMPLETED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.owner,
                task.title,
                task.description,
                task.due_date,
                task.created_date,
                task.status.as_token()
            ]);
        }
        table.printstd();
    }

    /// Prints one user's tasks; the owner column is implied.
    pub fn own_tasks(tasks: &[Task]) {
        let mut table = Self::table();

        table.set_titles(row!["ID", "TITLE", "DESCRIPTION", "DUE DATE", "ASSIGNED", "COMPLETED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.description,
                task.due_date,
                task.created_date,
                task.status.as_token()
            ]);
        }
        table.printstd();
    }

    pub fn users(users: &[User]) {
        let mut table = Self::table();

        table.set_titles(row!["USERNAME", "ROLE"]);
        for user in users {
            table.add_row(row![user.username, user.role]);
        }
        table.printstd();
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }
}
