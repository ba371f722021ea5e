use super::{session, App};
use crate::{
    libs::{
        access::{self, Operation},
        export::{ExportFormat, Exporter},
        messages::Message,
        report::{build_task_report, build_user_report},
        task::TaskFilter,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output format of the overview files
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,
}

pub fn cmd(app: &App, report_args: ReportArgs) -> Result<()> {
    authorized_login(app, Operation::GenerateReports)?;
    generate(app, report_args.format)
}

pub fn stats(app: &App) -> Result<()> {
    authorized_login(app, Operation::DisplayStatistics)?;
    display_statistics(app)
}

fn authorized_login(app: &App, operation: Operation) -> Result<()> {
    if app.users.list()?.is_empty() {
        msg_bail_anyhow!(Message::NoUsersRegistered);
    }
    let user = session::login(app)?;
    if let Err(e) = access::authorize(user.role, operation) {
        msg_bail_anyhow!(e);
    }
    Ok(())
}

fn exporter(app: &App, format: ExportFormat) -> Result<Exporter> {
    Ok(Exporter::new(
        format,
        app.config.task_overview_path()?,
        app.config.user_overview_path()?,
    ))
}

/// Rebuilds both reports from the current records and writes them.
pub fn generate(app: &App, format: ExportFormat) -> Result<()> {
    msg_print!(Message::GeneratingReportsHeader, true);

    let exporter = exporter(app, format)?;
    let users = app.users.list()?;
    let tasks = app.tasks.fetch(TaskFilter::All)?;
    let today = Local::now().date_naive();

    exporter.export(&build_task_report(&tasks, today), &build_user_report(&users, &tasks, today))?;

    msg_success!(Message::ReportsGenerated(
        exporter.task_path().display().to_string(),
        exporter.user_path().display().to_string()
    ));
    Ok(())
}

/// Prints the text reports, generating them first when either is missing.
pub fn display_statistics(app: &App) -> Result<()> {
    let exporter = exporter(app, ExportFormat::Text)?;
    if !exporter.exists() {
        msg_info!(Message::GeneratingReportsFirst);
        generate(app, ExportFormat::Text)?;
    }

    let (task_overview, user_overview) = exporter.read()?;
    msg_print!(Message::StatisticsHeader, true);
    msg_print!(Message::TaskOverviewHeader);
    msg_print!(task_overview);
    msg_print!(Message::UserOverviewHeader);
    msg_print!(user_overview);
    Ok(())
}
