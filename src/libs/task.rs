use super::validation::{self, DATE_FORMAT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Incomplete,
    Complete,
}

impl TaskStatus {
    /// Token stored in the status column: `Yes` means complete.
    pub fn as_token(&self) -> &'static str {
        match self {
            TaskStatus::Complete => "Yes",
            TaskStatus::Incomplete => "No",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "yes" => Some(TaskStatus::Complete),
            "no" => Some(TaskStatus::Incomplete),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Complete => TaskStatus::Incomplete,
            TaskStatus::Incomplete => TaskStatus::Complete,
        }
    }
}

/// A calendar date as stored in a record.
///
/// Keeps the original text so records with a malformed date survive a
/// load/save cycle byte for byte; [`RecordDate::date`] parses on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDate(String);

impl RecordDate {
    pub fn from_text(text: &str) -> Self {
        RecordDate(text.to_string())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        validation::date_format(&self.0).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        RecordDate(date.format(DATE_FORMAT).to_string())
    }
}

impl Display for RecordDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub owner: String,
    pub title: String,
    pub description: String,
    pub due_date: RecordDate,
    pub created_date: RecordDate,
    pub status: TaskStatus,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Complete
    }

    /// Incomplete with a parsable due date strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_complete() && self.due_date.date().is_some_and(|due| due < today)
    }
}

/// Input for creating a task; raw field values from the prompt layer.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub owner: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
}

/// Fields to change on an existing task. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub owner: Option<String>,
    pub due_date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.due_date.is_none() && self.title.is_none() && self.description.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Owner(String),
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Owner(owner) => &task.owner == owner,
            TaskFilter::Completed => task.is_complete(),
        }
    }
}
