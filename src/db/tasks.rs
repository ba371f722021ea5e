//! Task repository: every mutation loads the full task file, applies one
//! lifecycle operation to the snapshot and writes the full file back.

use super::store::{RecordKind, RecordStore};
use crate::libs::error::Result;
use crate::libs::lifecycle::TaskSet;
use crate::libs::task::{NewTask, Task, TaskEdit, TaskFilter};
use crate::libs::user::UserSet;
use chrono::{Local, NaiveDate};

pub struct Tasks {
    store: RecordStore,
}

impl Tasks {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn snapshot(&self) -> Result<TaskSet> {
        Ok(TaskSet::new(self.store.load_tasks()?.records))
    }

    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        Ok(self.snapshot()?.filter(&filter))
    }

    pub fn get(&self, id: u32) -> Result<Option<Task>> {
        Ok(self.snapshot()?.get(id).cloned())
    }

    pub fn next_id(&self) -> Result<u32> {
        self.snapshot()?.next_id()
    }

    pub fn create(&self, new_task: NewTask) -> Result<Task> {
        self.create_on(new_task, today())
    }

    /// Creates a task as if the current date were `today`.
    pub fn create_on(&self, new_task: NewTask, today: NaiveDate) -> Result<Task> {
        let users = UserSet::new(self.store.load_users()?.records);
        let mut tasks = self.snapshot()?;
        let task = tasks.create(new_task, &users, today)?;
        self.store.save_tasks(tasks.tasks())?;

        tracing::info!(id = task.id, title = %task.title, owner = %task.owner, "task created");
        Ok(task)
    }

    pub fn toggle_status(&self, id: u32) -> Result<Task> {
        let task = self.mutate(|tasks| tasks.toggle_status(id))?;
        tracing::info!(id, status = task.status.as_token(), "task status toggled");
        Ok(task)
    }

    pub fn edit(&self, id: u32, edit: TaskEdit) -> Result<Task> {
        let task = self.mutate(|tasks| tasks.edit(id, edit))?;
        tracing::info!(id, owner = %task.owner, due = %task.due_date, "task updated");
        Ok(task)
    }

    pub fn mark_complete(&self, id: u32) -> Result<Task> {
        let task = self.mutate(|tasks| tasks.mark_complete(id))?;
        tracing::info!(id, "task marked as complete");
        Ok(task)
    }

    pub fn reset_incomplete(&self, id: u32) -> Result<Task> {
        let task = self.mutate(|tasks| tasks.reset_incomplete(id))?;
        tracing::info!(id, "task reset to incomplete");
        Ok(task)
    }

    /// Deletes by exact ID text, else by exact title. Backs up the task file first.
    pub fn delete(&self, key: &str) -> Result<Task> {
        let mut tasks = self.snapshot()?;
        let task = tasks.delete(key)?;
        self.store.backup(RecordKind::Tasks);
        self.store.save_tasks(tasks.tasks())?;

        tracing::info!(id = task.id, title = %task.title, "task deleted");
        Ok(task)
    }

    /// Load, apply `op`, and save only if it succeeded.
    fn mutate<F>(&self, op: F) -> Result<Task>
    where
        F: FnOnce(&mut TaskSet) -> Result<Task>,
    {
        let mut tasks = self.snapshot()?;
        let task = op(&mut tasks)?;
        self.store.save_tasks(tasks.tasks())?;
        Ok(task)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
