//! Interactive session: login loop and the role-specific menu.
//!
//! Every menu selection goes through [`access::authorize`] before its handler
//! runs, so typing the key of an admin operation from the user menu gets the
//! same denial as any other unauthorized call.

use super::{recover, report, task, user, App};
use crate::{
    libs::{
        access::{self, Operation},
        export::ExportFormat,
        messages::Message,
        user::User,
    },
    msg_debug, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};

enum SessionEnd {
    Logout,
    Exit,
}

pub fn cmd(app: &App) -> Result<()> {
    msg_print!(Message::Welcome, true);

    if app.users.legacy_count()? > 0 {
        user::verify_roles(app)?;
    }
    if app.users.snapshot()?.records().is_empty() {
        msg_info!(Message::NoUsersFound);
        user::register_first_admin(app)?;
    }

    loop {
        let user = login(app)?;
        match menu(app, &user)? {
            SessionEnd::Logout => msg_success!(Message::LoggedOut(user.username)),
            SessionEnd::Exit => {
                msg_print!(Message::ExitGoodbye);
                return Ok(());
            }
        }
    }
}

/// Prompts for credentials until they match an account.
pub fn login(app: &App) -> Result<User> {
    msg_print!(Message::LoginHeader, true);

    loop {
        let username: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?;
        let credential = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?;

        match app.users.authenticate(username.trim(), &credential) {
            Ok(user) => {
                msg_success!(Message::LoginSuccess(user.username.clone(), user.role.to_string()));
                return Ok(user);
            }
            Err(e) => msg_error!(e),
        }
    }
}

fn menu(app: &App, user: &User) -> Result<SessionEnd> {
    loop {
        print_menu(user);

        let choice: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .interact_text()?;

        match choice.trim().to_lowercase().as_str() {
            "lo" => return Ok(SessionEnd::Logout),
            "e" => return Ok(SessionEnd::Exit),
            key => match Operation::from_menu_key(key) {
                Some(operation) => {
                    if let Err(e) = access::authorize(user.role, operation) {
                        msg_error!(e);
                        continue;
                    }
                    msg_debug!(format!("{} selected {:?}", user.username, operation));
                    recover(dispatch(app, user, operation))?;
                }
                None => msg_error!(Message::InvalidMenuChoice),
            },
        }
    }
}

fn print_menu(user: &User) {
    if user.is_admin() {
        msg_print!(Message::AdminMenuHeader, true);
    } else {
        msg_print!(Message::UserMenuHeader, true);
    }

    for operation in Operation::available_to(user.role) {
        msg_print!(Message::MenuItem(operation.menu_key().to_string(), operation.label().to_string()));
    }
    msg_print!(Message::MenuLogout);
    msg_print!(Message::MenuExit);
}

fn dispatch(app: &App, user: &User, operation: Operation) -> Result<()> {
    match operation {
        Operation::Register => user::register(app),
        Operation::AddTask => task::add(app),
        Operation::ViewAllTasks => task::view_all(app),
        Operation::ViewMyTasks => task::view_mine(app, user),
        Operation::ViewAllUsers => user::view_all(app),
        Operation::VerifyRoles => user::verify_roles(app),
        Operation::DeleteTask => task::delete(app),
        Operation::ViewCompleted => task::view_completed(app),
        Operation::MarkComplete => task::mark_complete(app),
        Operation::ResetIncomplete => task::reset_incomplete(app),
        Operation::GenerateReports => report::generate(app, ExportFormat::Text),
        Operation::DisplayStatistics => report::display_statistics(app),
    }
}
