//! Configuration management for taskman.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file is not an error: every field has a
//! default, so the application runs without any setup.
//!
//! ## Configuration Structure
//!
//! - **Storage**: where the user and task records and the overview reports live
//! - **Logging**: log file name and default level
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskman::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.logging.level = "debug".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Locations of the record files and generated reports.
///
/// File names are resolved against `data_dir` when it is set, otherwise
/// against the platform data directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding records and reports. `None` means the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub users_file: String,
    pub tasks_file: String,
    pub task_overview_file: String,
    pub user_overview_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            data_dir: None,
            users_file: "user.txt".to_string(),
            tasks_file: "task.txt".to_string(),
            task_overview_file: "task_overview.txt".to_string(),
            user_overview_file: "user_overview.txt".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file name, resolved against the data directory.
    pub file: String,
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: "taskman.log".to_string(),
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Directory that record, report and log file names resolve against.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                Ok(dir.clone())
            }
            None => DataStorage::new().base_path(),
        }
    }

    pub fn task_overview_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.storage.task_overview_file))
    }

    pub fn user_overview_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.storage.user_overview_file))
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.logging.file))
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleStorage, Message::ConfigModuleLogging];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(ToString::to_string).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                Message::ConfigModuleStorage => {
                    msg_print!(Message::ConfigModuleStorage);
                    let default = config.storage.clone();
                    let data_dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDataDir.to_string())
                        .default(default.data_dir.map(|d| d.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.storage = StorageConfig {
                        data_dir: if data_dir.trim().is_empty() { None } else { Some(PathBuf::from(data_dir.trim())) },
                        users_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUsersFile.to_string())
                            .default(default.users_file)
                            .interact_text()?,
                        tasks_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTasksFile.to_string())
                            .default(default.tasks_file)
                            .interact_text()?,
                        task_overview_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTaskOverviewFile.to_string())
                            .default(default.task_overview_file)
                            .interact_text()?,
                        user_overview_file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUserOverviewFile.to_string())
                            .default(default.user_overview_file)
                            .interact_text()?,
                    };
                }
                Message::ConfigModuleLogging => {
                    msg_print!(Message::ConfigModuleLogging);
                    let default = config.logging.clone();
                    config.logging = LoggingConfig {
                        file: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLogFile.to_string())
                            .default(default.file)
                            .interact_text()?,
                        level: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLogLevel.to_string())
                            .default(default.level)
                            .interact_text()?,
                    };
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
