//! File logging setup.
//!
//! When logging is enabled in the configuration, a `fern` dispatch sends
//! `log` records to `penstock.log` in the platform state directory. The TUI
//! owns the terminal, so nothing is ever logged to stdout or stderr.

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Install the global logger according to the logging configuration.
///
/// A no-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("penstock"))
        .context("Could not determine a state directory for the log file")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_path = log_dir.join("penstock.log");

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&log_path).with_context(|| format!("Failed to open {}", log_path.display()))?)
        .apply()
        .context("Failed to install the logger")?;

    log::info!("logging started");
    Ok(())
}
