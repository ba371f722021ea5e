//! File logging setup.
//!
//! Engine events (logins, task mutations, backups, skipped records) go to a
//! log file through `tracing`. The filter comes from `RUST_LOG` when set,
//! otherwise from the configured level. In debug mode the console messages
//! are tracing events too, so a second layer mirrors everything to stderr.

use crate::libs::config::Config;
use crate::libs::messages::macros::is_debug_mode;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. The returned guard must be held until
/// shutdown so buffered entries are flushed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let log_path = config.log_path()?;
    let log_dir = log_path.parent().context("log file has no parent directory")?;
    let file_name = log_path.file_name().context("log file has no name")?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
    let console_layer = is_debug_mode().then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(guard)
}
