use super::{recover, App};
use crate::{
    libs::{
        error::{self, TaskError},
        messages::Message,
        task::{NewTask, Task, TaskEdit, TaskFilter},
        user::User,
        validation,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

pub fn add(app: &App) -> Result<()> {
    msg_print!(Message::AddTaskHeader, true);

    let users = app.users.snapshot()?;
    let today = Local::now().date_naive();

    let owner = prompt_owner(Message::PromptAssignee, |name| users.contains(name))?;
    let title = prompt_text(Message::PromptTaskTitle, "Title")?;
    let description = prompt_text(Message::PromptTaskDescription, "Description")?;
    let due_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDueDate.to_string())
        .validate_with(|input: &String| validation::future_due_date(input.trim(), today).map(|_| ()))
        .interact_text()?;

    let task = app.tasks.create(NewTask {
        owner,
        title,
        description,
        due_date: due_date.trim().to_string(),
    })?;

    msg_success!(Message::TaskCreated {
        id: task.id,
        title: task.title,
        owner: task.owner,
    });
    Ok(())
}

pub fn view_all(app: &App) -> Result<()> {
    let tasks = app.tasks.fetch(TaskFilter::All)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks);
    msg_print!(Message::TotalTasks(tasks.len()));
    Ok(())
}

pub fn view_completed(app: &App) -> Result<()> {
    let tasks = app.tasks.fetch(TaskFilter::Completed)?;
    if tasks.is_empty() {
        msg_info!(Message::NoCompletedTasks);
        return Ok(());
    }

    msg_print!(Message::CompletedTasksHeader, true);
    View::tasks(&tasks);
    msg_print!(Message::TotalTasks(tasks.len()));
    Ok(())
}

/// Lists the user's own tasks and lets them toggle or edit one at a time.
pub fn view_mine(app: &App, user: &User) -> Result<()> {
    loop {
        let tasks = app.tasks.fetch(TaskFilter::Owner(user.username.clone()))?;
        if tasks.is_empty() {
            msg_info!(Message::NoTasksForUser(user.username.clone()));
            return Ok(());
        }

        msg_print!(Message::MyTasksHeader(user.username.clone()), true);
        View::own_tasks(&tasks);
        msg_print!(Message::TotalTasks(tasks.len()));

        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskIdOrReturn.to_string())
            .validate_with(|input: &String| -> Result<(), Message> {
                let input = input.trim();
                if input == "-1" {
                    return Ok(());
                }
                match input.parse::<u32>() {
                    Ok(id) if ids.contains(&id) => Ok(()),
                    Ok(_) => Err(Message::TaskNotInList(input.to_string())),
                    Err(_) => Err(Message::InvalidTaskId(input.to_string())),
                }
            })
            .interact_text()?;

        let Ok(id) = input.trim().parse::<u32>() else {
            return Ok(());
        };
        if let Some(task) = tasks.into_iter().find(|t| t.id == id) {
            recover(task_options(app, task))?;
        }

        let another = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAnother.to_string())
            .default(true)
            .interact()?;
        if !another {
            return Ok(());
        }
    }
}

fn task_options(app: &App, task: Task) -> Result<()> {
    msg_print!(Message::TaskOptionsHeader(task.title.clone()), true);
    msg_print!(Message::CurrentStatus(
        if task.is_complete() { "Complete" } else { "Incomplete" }.to_string()
    ));

    let actions = [Message::ActionToggleStatus, Message::ActionEditTask, Message::ActionBack];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskAction.to_string())
        .items(&actions.iter().map(ToString::to_string).collect::<Vec<_>>())
        .default(0)
        .interact()?;

    match actions[selection] {
        Message::ActionToggleStatus => {
            let task = app.tasks.toggle_status(task.id)?;
            msg_success!(Message::TaskMarked {
                complete: task.is_complete(),
                title: task.title,
            });
        }
        Message::ActionEditTask => edit(app, task)?,
        _ => {}
    }
    Ok(())
}

fn edit(app: &App, task: Task) -> Result<()> {
    if task.is_complete() {
        return Err(TaskError::EditLocked(task.id).into());
    }

    msg_print!(Message::EditTaskHeader {
        title: task.title.clone(),
        owner: task.owner.clone(),
        due: task.due_date.to_string(),
    });

    let choices = [
        Message::EditOwnerOnly,
        Message::EditDueDateOnly,
        Message::EditOwnerAndDueDate,
        Message::EditCancel,
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEditChoice.to_string())
        .items(&choices.iter().map(ToString::to_string).collect::<Vec<_>>())
        .default(0)
        .interact()?;

    let users = app.users.snapshot()?;
    let mut changes = TaskEdit::default();
    if matches!(choices[selection], Message::EditOwnerOnly | Message::EditOwnerAndDueDate) {
        changes.owner = Some(prompt_owner(Message::PromptNewOwner, |name| users.contains(name))?);
    }
    if matches!(choices[selection], Message::EditDueDateOnly | Message::EditOwnerAndDueDate) {
        let due_date: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNewDueDate.to_string())
            .validate_with(|input: &String| validation::date_format(input.trim()).map(|_| ()))
            .interact_text()?;
        changes.due_date = Some(due_date.trim().to_string());
    }
    if changes.is_empty() {
        return Ok(());
    }

    let task = app.tasks.edit(task.id, changes)?;
    msg_success!(Message::TaskUpdated(task.title));
    Ok(())
}

pub fn mark_complete(app: &App) -> Result<()> {
    msg_print!(Message::MarkCompleteHeader, true);

    let id = prompt_task_id(Message::PromptMarkCompleteId)?;
    let task = app.tasks.mark_complete(id)?;
    msg_success!(Message::TaskMarkedComplete(task.id, task.title));
    Ok(())
}

pub fn reset_incomplete(app: &App) -> Result<()> {
    msg_print!(Message::ResetTaskHeader, true);

    let id = prompt_task_id(Message::PromptResetId)?;
    let task = app.tasks.reset_incomplete(id)?;
    msg_success!(Message::TaskReset(task.id, task.title));
    Ok(())
}

pub fn delete(app: &App) -> Result<()> {
    msg_print!(Message::DeleteTaskHeader, true);

    let key: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDeleteKey.to_string())
        .validate_with(|input: &String| validation::non_empty(input, "Task ID or title"))
        .interact_text()?;

    let task = app.tasks.delete(key.trim())?;
    msg_success!(Message::TaskDeleted(task.id, task.title));
    Ok(())
}

fn prompt_task_id(prompt: Message) -> Result<u32> {
    let id: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .interact_text()?;
    Ok(id)
}

fn prompt_text(prompt: Message, field: &'static str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &String| validation::record_text(input.trim(), field))
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_owner<F>(prompt: Message, exists: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    let owner: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &String| -> error::Result<()> {
            let input = input.trim();
            validation::non_empty(input, "Username")?;
            if !exists(input) {
                return Err(TaskError::UnknownOwner(input.to_string()));
            }
            Ok(())
        })
        .interact_text()?;
    Ok(owner.trim().to_string())
}
