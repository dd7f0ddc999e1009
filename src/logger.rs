//! File logging for the CLI.
//!
//! Library code only uses the `log` macros; the binary decides whether a
//! logger is installed. When `[logging] enabled = true` a `fern` dispatcher
//! writes one line per record to `<data_dir>/ajaxctl/ajaxctl.log`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Default log file location
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build a dispatcher writing to `path` at the configured level.
pub fn build_dispatch(config: &LoggingConfig, path: &Path) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Install the global logger if logging is enabled.
///
/// Returns the log file path when a logger was installed.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    build_dispatch(config, &path)?
        .apply()
        .context("A global logger is already installed")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
