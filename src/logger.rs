//! Logging setup for debugging and error tracking
//!
//! The datetime helpers log through the `log` facade macros; this module
//! wires those records to a file sink with `fern`. Initialization is driven
//! by [`LoggingConfig`] so a library consumer that installs its own logger
//! can leave it disabled.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;

/// Install the file logger described by `config`
///
/// A disabled config is a no-op. Calling this twice (or after another logger
/// has been installed) is an error, since the `log` facade only accepts one
/// global sink.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level_filter()?;
    let log_path = log_file_path()?;

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(
            fern::log_file(&log_path)
                .with_context(|| format!("Failed to open log file: {}", log_path.display()))?,
        )
        .apply()
        .context("A global logger is already installed")?;

    Ok(())
}

/// Path of the log file inside the platform data directory
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("course-dates").join("course-dates.log"))
}
