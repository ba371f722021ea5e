//! Command-line entry points.
//!
//! Running `taskman` with no subcommand starts the interactive session.
//! `init` runs the configuration wizard. `report` and `stats` give
//! non-interactive access to the admin report operations after a login.

pub mod init;
pub mod report;
pub mod session;
pub mod task;
pub mod user;

use crate::{
    db::{store::RecordStore, tasks::Tasks, users::Users},
    libs::{config::Config, error::TaskError, logging},
    msg_error, msg_info,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log in and open the task menu (default)")]
    Session,
    #[command(about = "Generate the task and user overview reports")]
    Report(report::ReportArgs),
    #[command(about = "Display the overview statistics")]
    Stats,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::read()?;
        let _guard = logging::init(&config)?;

        match cli.command.unwrap_or(Commands::Session) {
            Commands::Init(args) => init::cmd(args),
            Commands::Session => session::cmd(&App::new(config)?),
            Commands::Report(args) => report::cmd(&App::new(config)?, args),
            Commands::Stats => report::stats(&App::new(config)?),
        }
    }
}

/// Configuration and repositories shared by every handler.
pub struct App {
    pub config: Config,
    pub users: Users,
    pub tasks: Tasks,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let store = RecordStore::from_config(&config)?;
        Ok(Self {
            users: Users::new(store.clone()),
            tasks: Tasks::new(store),
            config,
        })
    }
}

/// Prints an engine error and carries on. Anything else, such as a closed
/// terminal, is passed through.
pub(crate) fn recover(result: Result<()>) -> Result<()> {
    let Err(err) = result else {
        return Ok(());
    };

    match err.downcast_ref::<TaskError>() {
        Some(task_err) if task_err.is_informational() => {
            msg_info!(task_err);
            Ok(())
        }
        Some(task_err) => {
            msg_error!(task_err);
            Ok(())
        }
        None => Err(err),
    }
}
