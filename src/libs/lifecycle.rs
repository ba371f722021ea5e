//! Task lifecycle rules applied to an in-memory task snapshot.
//!
//! [`TaskSet`] owns the full list of tasks loaded from the record store.
//! Each operation edits the snapshot in place and returns the affected task;
//! nothing here touches the filesystem. The repository in
//! [`crate::db::tasks`] wraps every call in load → operate → save.
//!
//! ## Rules
//!
//! - New IDs are `max(existing) + 1`, or 1 for an empty set; creation fails
//!   rather than wrap once `u32::MAX` is taken
//! - Creation requires an existing owner and a due date no earlier than today
//! - A completed task is edit-locked until it is reset to incomplete
//! - Status toggling is always allowed
//! - Deletion matches the exact ID text first, then the exact title

use super::error::{Result, TaskError};
use super::task::{NewTask, RecordDate, Task, TaskEdit, TaskFilter, TaskStatus};
use super::user::UserSet;
use super::validation;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn filter(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Fails once the largest stored ID is `u32::MAX`.
    pub fn next_id(&self) -> Result<u32> {
        match self.tasks.iter().map(|t| t.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| TaskError::Validation("Task ID space exhausted.".to_string())),
        }
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    pub fn create(&mut self, new_task: NewTask, users: &UserSet, today: NaiveDate) -> Result<Task> {
        validation::record_text(&new_task.owner, "Username")?;
        if !users.contains(&new_task.owner) {
            return Err(TaskError::UnknownOwner(new_task.owner));
        }
        validation::record_text(&new_task.title, "Task title")?;
        validation::record_text(&new_task.description, "Task description")?;
        let due = validation::future_due_date(&new_task.due_date, today)?;
        let id = self.next_id()?;

        let task = Task {
            id,
            owner: new_task.owner,
            title: new_task.title,
            description: new_task.description,
            due_date: due.into(),
            created_date: today.into(),
            status: TaskStatus::Incomplete,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn toggle_status(&mut self, id: u32) -> Result<Task> {
        let task = self.find_mut(id)?;
        task.status = task.status.toggled();
        Ok(task.clone())
    }

    /// Applies the supplied fields; rejects any edit of a completed task.
    ///
    /// All fields are validated before anything is changed, so a rejected
    /// edit leaves the task untouched.
    pub fn edit(&mut self, id: u32, edit: TaskEdit) -> Result<Task> {
        let task = self.find_mut(id)?;
        if task.is_complete() {
            return Err(TaskError::EditLocked(id));
        }

        if let Some(owner) = &edit.owner {
            validation::record_text(owner, "Username")?;
        }
        if let Some(due) = &edit.due_date {
            validation::date_format(due)?;
        }
        if let Some(title) = &edit.title {
            validation::record_text(title, "Task title")?;
        }
        if let Some(description) = &edit.description {
            validation::record_text(description, "Task description")?;
        }

        if let Some(owner) = edit.owner {
            task.owner = owner;
        }
        if let Some(due) = edit.due_date {
            task.due_date = RecordDate::from_text(&due);
        }
        if let Some(title) = edit.title {
            task.title = title;
        }
        if let Some(description) = edit.description {
            task.description = description;
        }
        Ok(task.clone())
    }

    pub fn mark_complete(&mut self, id: u32) -> Result<Task> {
        let task = self.find_mut(id)?;
        task.status = TaskStatus::Complete;
        Ok(task.clone())
    }

    pub fn reset_incomplete(&mut self, id: u32) -> Result<Task> {
        let task = self.find_mut(id)?;
        if !task.is_complete() {
            return Err(TaskError::AlreadyIncomplete(id));
        }
        task.status = TaskStatus::Incomplete;
        Ok(task.clone())
    }

    /// Removes the task whose ID text equals `key`, otherwise the first whose title does.
    pub fn delete(&mut self, key: &str) -> Result<Task> {
        let position = self
            .tasks
            .iter()
            .position(|t| t.id.to_string() == key)
            .or_else(|| self.tasks.iter().position(|t| t.title == key))
            .ok_or_else(|| TaskError::NotFound(key.to_string()))?;
        Ok(self.tasks.remove(position))
    }
}
