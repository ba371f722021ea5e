//! Role-based authorization gate.
//!
//! A single static table decides which operations a role may invoke. The
//! session layer consults it once per menu selection, before any engine call;
//! a denial changes nothing and carries a fixed message.

use super::error::{Result, TaskError};
use super::user::Role;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    AdminOnly,
    AnyAuthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Register,
    AddTask,
    ViewAllTasks,
    ViewMyTasks,
    ViewAllUsers,
    VerifyRoles,
    DeleteTask,
    ViewCompleted,
    MarkComplete,
    ResetIncomplete,
    GenerateReports,
    DisplayStatistics,
}

impl Operation {
    /// Menu order.
    pub const ALL: [Operation; 12] = [
        Operation::Register,
        Operation::AddTask,
        Operation::ViewAllTasks,
        Operation::ViewMyTasks,
        Operation::ViewAllUsers,
        Operation::VerifyRoles,
        Operation::DeleteTask,
        Operation::ViewCompleted,
        Operation::MarkComplete,
        Operation::ResetIncomplete,
        Operation::GenerateReports,
        Operation::DisplayStatistics,
    ];

    pub fn access(&self) -> Access {
        match self {
            Operation::Register
            | Operation::ViewAllUsers
            | Operation::VerifyRoles
            | Operation::DeleteTask
            | Operation::ViewCompleted
            | Operation::ResetIncomplete
            | Operation::GenerateReports
            | Operation::DisplayStatistics => Access::AdminOnly,
            Operation::AddTask | Operation::ViewAllTasks | Operation::ViewMyTasks | Operation::MarkComplete => {
                Access::AnyAuthenticated
            }
        }
    }

    pub fn is_allowed(&self, role: Role) -> bool {
        match self.access() {
            Access::AnyAuthenticated => true,
            Access::AdminOnly => role.is_admin(),
        }
    }

    pub fn menu_key(&self) -> &'static str {
        match self {
            Operation::Register => "r",
            Operation::AddTask => "a",
            Operation::ViewAllTasks => "va",
            Operation::ViewMyTasks => "vm",
            Operation::ViewAllUsers => "vu",
            Operation::VerifyRoles => "vr",
            Operation::DeleteTask => "dt",
            Operation::ViewCompleted => "vc",
            Operation::MarkComplete => "uc",
            Operation::ResetIncomplete => "rc",
            Operation::GenerateReports => "gr",
            Operation::DisplayStatistics => "ds",
        }
    }

    pub fn from_menu_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|op| op.menu_key() == key)
    }

    /// Operations a role may see in its menu.
    pub fn available_to(role: Role) -> Vec<Operation> {
        Self::ALL.into_iter().filter(|op| op.is_allowed(role)).collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Register => "Register a user",
            Operation::AddTask => "Add task",
            Operation::ViewAllTasks => "View all tasks",
            Operation::ViewMyTasks => "View my tasks",
            Operation::ViewAllUsers => "View all users",
            Operation::VerifyRoles => "Verify and update user roles",
            Operation::DeleteTask => "Delete task",
            Operation::ViewCompleted => "View completed tasks",
            Operation::MarkComplete => "Update task completion status",
            Operation::ResetIncomplete => "Reset completed task to incomplete",
            Operation::GenerateReports => "Generate reports",
            Operation::DisplayStatistics => "Display statistics",
        }
    }
}

/// Phrase completing "Only Admin users can ...".
impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let action = match self {
            Operation::Register => "register new users",
            Operation::AddTask => "add tasks",
            Operation::ViewAllTasks => "view all tasks",
            Operation::ViewMyTasks => "view their tasks",
            Operation::ViewAllUsers => "view all users",
            Operation::VerifyRoles => "verify and update roles",
            Operation::DeleteTask => "delete tasks",
            Operation::ViewCompleted => "view completed tasks",
            Operation::MarkComplete => "update task completion status",
            Operation::ResetIncomplete => "reset completed tasks to incomplete",
            Operation::GenerateReports => "generate reports",
            Operation::DisplayStatistics => "view statistics",
        };
        f.write_str(action)
    }
}

/// Allows or denies `operation` for `role`.
pub fn authorize(role: Role, operation: Operation) -> Result<()> {
    if operation.is_allowed(role) {
        Ok(())
    } else {
        tracing::warn!(?operation, %role, "authorization denied");
        Err(TaskError::Unauthorized(operation))
    }
}
