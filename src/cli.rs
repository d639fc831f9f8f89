//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, AppConfig, ConfigError};

#[derive(Parser, Debug, Default)]
#[clap(
    name = "fitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log workouts, review weekly totals and track a weekly goal"
)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Disable the periodic activity reminder
    #[clap(long)]
    pub no_reminder: bool,

    /// Seconds between reminders
    #[clap(long, value_name = "SECS")]
    pub reminder_interval: Option<u64>,

    /// Write the effective settings back to the config file before starting
    #[clap(long)]
    pub save_config: bool,
}

impl Cli {
    /// Config file to read, and to write with `--save-config`.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config::get_config_path)
    }

    /// Apply command-line overrides to a loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if self.no_reminder {
            config.reminder.enabled = false;
        }
        if let Some(secs) = self.reminder_interval {
            config.reminder.interval_secs = secs;
        }
    }

    /// Save `config` if `--save-config` was given. Returns the written path.
    pub fn save_if_requested(&self, config: &AppConfig) -> Result<Option<PathBuf>, ConfigError> {
        if !self.save_config {
            return Ok(None);
        }

        let path = self.config_path();
        crate::config::save_config_to(config, &path)?;
        tracing::info!("Saved configuration to {}", path.display());
        Ok(Some(path))
    }
}
