use super::App;
use crate::{
    libs::{error::TaskError, messages::Message, user::Role, validation, view::View},
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

const ROLES: [Role; 2] = [Role::Admin, Role::NonAdmin];

pub fn register(app: &App) -> Result<()> {
    msg_print!(Message::RegisterHeader, true);

    let role_names: Vec<String> = ROLES.iter().map(ToString::to_string).collect();
    let (username, credential) = prompt_credentials(app)?;
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectRole.to_string())
        .items(&role_names)
        .default(1)
        .interact()?;

    let user = app.users.register(&username, &credential, ROLES[selection])?;
    msg_success!(Message::UserCreated(user.username, user.role.to_string()));
    Ok(())
}

/// Creates the initial Admin account for an empty user file.
pub fn register_first_admin(app: &App) -> Result<()> {
    msg_print!(Message::RegisterHeader, true);

    let (username, credential) = prompt_credentials(app)?;
    let user = app.users.register(&username, &credential, Role::Admin)?;
    msg_success!(Message::UserCreated(user.username, user.role.to_string()));
    Ok(())
}

fn prompt_credentials(app: &App) -> Result<(String, String)> {
    let existing = app.users.snapshot()?;

    let username: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewUsername.to_string())
        .validate_with(|input: &String| -> crate::libs::error::Result<()> {
            let input = input.trim();
            validation::username(input)?;
            if existing.contains(input) {
                return Err(TaskError::DuplicateUsername(input.to_string()));
            }
            Ok(())
        })
        .interact_text()?;

    let credential = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewPassword.to_string())
        .with_confirmation(Message::PromptConfirmPassword.to_string(), Message::PasswordMismatch.to_string())
        .validate_with(|input: &String| validation::credential(input))
        .interact()?;

    Ok((username.trim().to_string(), credential))
}

pub fn view_all(app: &App) -> Result<()> {
    let users = app.users.list()?;
    if users.is_empty() {
        msg_info!(Message::NoUsersRegistered);
        return Ok(());
    }

    msg_print!(Message::UsersHeader, true);
    View::users(&users);
    msg_print!(Message::TotalUsers(users.len()));
    Ok(())
}

/// Prompts for a role for every record that lacks one.
pub fn verify_roles(app: &App) -> Result<()> {
    if app.users.legacy_count()? == 0 {
        msg_info!(Message::AllUsersHaveRoles);
        return Ok(());
    }

    msg_print!(Message::RoleVerificationHeader, true);
    let role_names: Vec<String> = ROLES.iter().map(ToString::to_string).collect();

    let assigned = app.users.backfill_roles(|username| {
        msg_warning!(Message::UserWithoutRole(username.to_string()));
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAssignRole(username.to_string()).to_string())
            .items(&role_names)
            .default(1)
            .interact()
            .map_err(std::io::Error::other)?;
        Ok(ROLES[selection])
    })?;

    for (username, role) in assigned {
        msg_success!(Message::RoleAssigned(role.to_string(), username));
    }
    msg_success!(Message::AllUsersUpdated, true);
    Ok(())
}
