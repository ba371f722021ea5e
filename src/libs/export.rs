//! Overview report files.
//!
//! Writes the task and user overview reports built by [`crate::libs::report`]
//! as plain text, JSON or CSV. Text is the default and is what the statistics
//! display reads back. JSON and CSV files sit next to it with the same stem
//! and their own extension.
//!
//! ```rust,no_run
//! use taskman::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Json, "task_overview.txt", "user_overview.txt");
//! assert!(exporter.task_path().ends_with("task_overview.json"));
//! ```

use super::error::Result;
use super::report::{TaskReport, UserReport};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Human-readable overview, also used by the statistics display.
    #[default]
    Text,
    /// Pretty-printed JSON of the report structures.
    Json,
    /// One header row plus one row per report entry.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    task_path: PathBuf,
    user_path: PathBuf,
}

impl Exporter {
    /// The given paths are the text report locations; other formats swap the extension.
    pub fn new(format: ExportFormat, task_overview: impl Into<PathBuf>, user_overview: impl Into<PathBuf>) -> Self {
        let task_path = task_overview.into().with_extension(format.extension());
        let user_path = user_overview.into().with_extension(format.extension());

        Self {
            format,
            task_path,
            user_path,
        }
    }

    pub fn task_path(&self) -> &Path {
        &self.task_path
    }

    pub fn user_path(&self) -> &Path {
        &self.user_path
    }

    /// Both report files are present.
    pub fn exists(&self) -> bool {
        self.task_path.exists() && self.user_path.exists()
    }

    /// Writes both reports, replacing earlier versions.
    pub fn export(&self, tasks: &TaskReport, users: &UserReport) -> Result<()> {
        for path in [&self.task_path, &self.user_path] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        match self.format {
            ExportFormat::Text => {
                File::create(&self.task_path)?.write_all(render_task_overview(tasks).as_bytes())?;
                File::create(&self.user_path)?.write_all(render_user_overview(users).as_bytes())?;
            }
            ExportFormat::Json => {
                serde_json::to_writer_pretty(File::create(&self.task_path)?, tasks)?;
                serde_json::to_writer_pretty(File::create(&self.user_path)?, users)?;
            }
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.task_path)?;
                wtr.serialize(tasks)?;
                wtr.flush()?;

                let mut wtr = csv::Writer::from_path(&self.user_path)?;
                for user in &users.users {
                    wtr.serialize(user)?;
                }
                wtr.flush()?;
            }
        }

        tracing::info!(
            format = ?self.format,
            tasks = %self.task_path.display(),
            users = %self.user_path.display(),
            "reports generated"
        );
        Ok(())
    }

    /// Contents of both report files as written.
    pub fn read(&self) -> Result<(String, String)> {
        Ok((fs::read_to_string(&self.task_path)?, fs::read_to_string(&self.user_path)?))
    }
}

pub fn render_task_overview(report: &TaskReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{}\nTASK OVERVIEW REPORT\n{}\n\n", rule, rule));
    out.push_str(&format!("Total number of tasks tracked: {}\n", report.total));
    out.push_str(&format!("Total number of completed tasks: {}\n", report.completed));
    out.push_str(&format!("Total number of uncompleted tasks: {}\n", report.incomplete));
    out.push_str(&format!("Total number of uncompleted and overdue tasks: {}\n", report.overdue));
    out.push_str(&format!("Percentage of completed tasks: {:.2}%\n", report.completed_pct));
    out.push_str(&format!("Percentage of incomplete tasks: {:.2}%\n", report.incomplete_pct));
    out.push_str(&format!("Percentage of overdue tasks: {:.2}%\n", report.overdue_pct));
    out.push_str(&format!("{}\n", rule));
    out
}

pub fn render_user_overview(report: &UserReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{}\nUSER OVERVIEW REPORT\n{}\n\n", rule, rule));
    out.push_str(&format!("Total number of users registered: {}\n", report.total_users));
    out.push_str(&format!("Total number of tasks tracked: {}\n", report.total_tasks));
    out.push_str(&format!("\n{}\nUSER TASK STATISTICS:\n{}\n\n", thin, thin));

    for user in &report.users {
        out.push_str(&format!("User: {}\n", user.username));
        out.push_str(&format!("  Total tasks assigned: {}\n", user.task_count));
        out.push_str(&format!("  Percentage of total tasks: {:.2}%\n", user.share_pct));
        out.push_str(&format!("  Percentage of assigned tasks completed: {:.2}%\n", user.completed_pct));
        out.push_str(&format!("  Percentage of assigned tasks incomplete: {:.2}%\n", user.incomplete_pct));
        out.push_str(&format!("  Percentage of assigned tasks overdue: {:.2}%\n", user.overdue_pct));
        out.push('\n');
    }

    out.push_str(&format!("{}\n", rule));
    out
}
