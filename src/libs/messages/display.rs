//! Display implementation for taskman messages.
//!
//! All user-facing text lives here, so the wording of a prompt or a result
//! line can be changed in one place. Section headers render as a banner
//! framed by `=` rules.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

const RULE_WIDTH: usize = 80;

fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{}\n  {:^76}\n{}", rule, title, rule)
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Welcome => banner("WELCOME TO TASK MANAGER"),
            Message::LoginHeader => banner("USER LOGIN"),
            Message::LoginSuccess(username, role) => format!("Welcome, {}! Role: {}", username, role),
            Message::LoggedOut(username) => format!("Goodbye, {}!", username),
            Message::ExitGoodbye => "Goodbye!!!".to_string(),
            Message::NoUsersFound => "No users found. Create the first Admin account to get started.".to_string(),
            Message::AdminMenuHeader => banner("ADMIN MENU"),
            Message::UserMenuHeader => banner("USER MENU"),
            Message::MenuItem(key, label) => format!("  {:<3} - {}", key, label),
            Message::MenuLogout => format!("  {:<3} - {}", "lo", "Logout"),
            Message::MenuExit => format!("  {:<3} - {}", "e", "Exit"),
            Message::InvalidMenuChoice => "You have entered an invalid input. Please try again.".to_string(),

            // === USER MESSAGES ===
            Message::RegisterHeader => banner("REGISTER NEW USER"),
            Message::UserCreated(username, role) => format!("User '{}' successfully created with role {}.", username, role),
            Message::UsersHeader => banner("ALL USERS"),
            Message::NoUsersRegistered => "No users found.".to_string(),
            Message::TotalUsers(count) => format!("Total users: {}", count),
            Message::RoleVerificationHeader => banner("USER ROLE VERIFICATION"),
            Message::UserWithoutRole(username) => format!("User '{}' found without a role assignment.", username),
            Message::RoleAssigned(role, username) => format!("Role '{}' assigned to '{}'.", role, username),
            Message::AllUsersUpdated => "All users have been updated with roles!".to_string(),
            Message::AllUsersHaveRoles => "All existing users already have roles assigned.".to_string(),
            Message::PasswordMismatch => "Passwords do not match. Please try again.".to_string(),

            // === TASK MESSAGES ===
            Message::AddTaskHeader => banner("ADD NEW TASK"),
            Message::TaskCreated { id, title, owner } => {
                format!("Task '{}' successfully added with ID {} and assigned to {}.", title, id, owner)
            }
            Message::TasksHeader => banner("ALL TASKS"),
            Message::MyTasksHeader(username) => banner(&format!("MY TASKS - {}", username.to_uppercase())),
            Message::CompletedTasksHeader => banner("COMPLETED TASKS"),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoTasksForUser(username) => format!("No tasks found for user '{}'.", username),
            Message::NoCompletedTasks => "No completed tasks found.".to_string(),
            Message::TotalTasks(count) => format!("Total tasks: {}", count),
            Message::InvalidTaskId(input) => format!("'{}' is not a valid task ID.", input),
            Message::TaskNotInList(id) => format!("Task ID '{}' not found in your tasks.", id),
            Message::TaskOptionsHeader(title) => banner(&format!("TASK OPTIONS - {}", title)),
            Message::CurrentStatus(status) => format!("Current Status: {}", status),
            Message::TaskMarked { title, complete } => {
                format!("Task '{}' has been marked as {}!", title, if *complete { "complete" } else { "incomplete" })
            }
            Message::EditTaskHeader { title, owner, due } => format!(
                "{}\n  Task: {}\n  Current Assigned User: {}\n  Current Due Date: {}",
                banner("EDIT TASK"),
                title,
                owner,
                due
            ),
            Message::TaskUpdated(title) => format!("Task '{}' has been updated!", title),
            Message::MarkCompleteHeader => banner("MARK TASK AS COMPLETE"),
            Message::TaskMarkedComplete(id, title) => format!("Task ID {} ('{}') has been marked as complete!", id, title),
            Message::ResetTaskHeader => banner("RESET TASK TO INCOMPLETE"),
            Message::TaskReset(id, title) => format!("Task ID {} ('{}') has been reset to incomplete!", id, title),
            Message::DeleteTaskHeader => banner("DELETE TASK"),
            Message::TaskDeleted(id, title) => format!("Task ID {} ('{}') has been deleted.", id, title),

            // === TASK ACTIONS ===
            Message::ActionToggleStatus => "Mark as complete/incomplete".to_string(),
            Message::ActionEditTask => "Edit task (reassign or change due date)".to_string(),
            Message::ActionBack => "Back to task list".to_string(),
            Message::EditOwnerOnly => "Change assigned user only".to_string(),
            Message::EditDueDateOnly => "Change due date only".to_string(),
            Message::EditOwnerAndDueDate => "Change both assigned user and due date".to_string(),
            Message::EditCancel => "Cancel (back to task list)".to_string(),

            // === REPORT MESSAGES ===
            Message::GeneratingReportsHeader => banner("GENERATING REPORTS"),
            Message::ReportsGenerated(tasks, users) => {
                format!("Reports generated successfully!\n    - {}\n    - {}", tasks, users)
            }
            Message::GeneratingReportsFirst => "Report files not found. Generating reports first...".to_string(),
            Message::StatisticsHeader => banner("TASK MANAGER STATISTICS"),
            Message::TaskOverviewHeader => banner("TASK OVERVIEW STATISTICS"),
            Message::UserOverviewHeader => banner("USER OVERVIEW STATISTICS"),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::ConfigModuleLogging => "Logging".to_string(),

            // === PROMPTS ===
            Message::PromptMenuChoice => "Enter your choice".to_string(),
            Message::PromptUsername => "Enter your username".to_string(),
            Message::PromptPassword => "Enter your password".to_string(),
            Message::PromptNewUsername => "Enter a username".to_string(),
            Message::PromptNewPassword => "Enter a password".to_string(),
            Message::PromptConfirmPassword => "Confirm your password".to_string(),
            Message::PromptSelectRole => "Select user role".to_string(),
            Message::PromptAssignRole(username) => format!("Assign role for '{}'", username),
            Message::PromptAssignee => "Enter the username to assign the task to".to_string(),
            Message::PromptTaskTitle => "Enter the task title".to_string(),
            Message::PromptTaskDescription => "Enter the task description".to_string(),
            Message::PromptDueDate => "Enter the due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskIdOrReturn => "Enter a task ID to update its status/edit (or -1 to return)".to_string(),
            Message::PromptTaskAction => "What would you like to do?".to_string(),
            Message::PromptEditChoice => "What would you like to edit?".to_string(),
            Message::PromptNewOwner => "Enter new username to assign this task to".to_string(),
            Message::PromptNewDueDate => "Enter new due date (YYYY-MM-DD)".to_string(),
            Message::PromptSelectAnother => "Select another task?".to_string(),
            Message::PromptMarkCompleteId => "Enter the task ID to mark as complete".to_string(),
            Message::PromptResetId => "Enter the task ID to reset to incomplete".to_string(),
            Message::PromptDeleteKey => "Enter the task ID or task title to delete".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptDataDir => "Data directory (empty for the default location)".to_string(),
            Message::PromptUsersFile => "User records file".to_string(),
            Message::PromptTasksFile => "Task records file".to_string(),
            Message::PromptTaskOverviewFile => "Task overview report file".to_string(),
            Message::PromptUserOverviewFile => "User overview report file".to_string(),
            Message::PromptLogFile => "Log file".to_string(),
            Message::PromptLogLevel => "Log level (error, warn, info, debug, trace)".to_string(),
        };

        write!(f, "{}", text)
    }
}
