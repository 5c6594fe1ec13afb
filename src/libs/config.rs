//! Configuration management for the taskpilot application.
//!
//! Settings live in `config.json` next to the task stores. Every section is
//! optional: a missing file or a missing section means "use the defaults",
//! so the application runs without any setup.
//!
//! - [`AlarmConfig`]: how often the scanner polls, how long notifications
//!   stay up and how far ahead `upcoming` looks
//! - `owner`: the default user whose store is opened when `--user` is not
//!   given
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpilot::libs::config::Config;
//!
//! # fn demo() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let alarm = config.alarm_or_default();
//! println!("polling every {}s", alarm.poll_interval);
//!
//! Config::init()?.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::ErrorKind;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const MIN_POLL_INTERVAL: u64 = 1;
pub const MAX_POLL_INTERVAL: u64 = 60;

/// Alarm scanner settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AlarmConfig {
    /// Seconds between two scans of the task store.
    pub poll_interval: u64,

    /// Seconds a notification stays visible, passed through to the notifier.
    pub notification_timeout: u64,

    /// Minutes ahead that `upcoming` looks for due tasks.
    pub upcoming_window: i64,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        AlarmConfig {
            poll_interval: 30,
            notification_timeout: 10,
            upcoming_window: 60,
        }
    }
}

impl AlarmConfig {
    /// The scanner matches due times by minute, so every minute needs at least
    /// one scan. Intervals are kept within 1..=60 seconds.
    pub fn poll_interval_secs(&self) -> u64 {
        self.poll_interval.clamp(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm: Option<AlarmConfig>,

    /// Default owner name used when no `--user` is passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Config {
    /// Reads the configuration from the default data directory, falling back
    /// to defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Removing a file that does not exist
    /// is not an error.
    pub fn delete() -> Result<()> {
        Self::delete_from(&DataStorage::new())
    }

    pub fn delete_from(storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        match fs::remove_file(config_file_path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    pub fn alarm_or_default(&self) -> AlarmConfig {
        self.alarm.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.alarm_or_default();

        msg_print!(Message::ConfigModuleAlarm);
        config.alarm = Some(AlarmConfig {
            poll_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPollInterval.to_string())
                .default(default.poll_interval)
                .validate_with(|value: &u64| -> std::result::Result<(), Message> {
                    if (MIN_POLL_INTERVAL..=MAX_POLL_INTERVAL).contains(value) {
                        Ok(())
                    } else {
                        Err(Message::PollIntervalOutOfRange(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL))
                    }
                })
                .interact_text()?,
            notification_timeout: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptNotificationTimeout.to_string())
                .default(default.notification_timeout)
                .interact_text()?,
            upcoming_window: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUpcomingWindow.to_string())
                .default(default.upcoming_window)
                .interact_text()?,
        });

        let owner: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultOwner.to_string())
            .default(config.owner.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let owner = owner.trim();
        config.owner = if owner.is_empty() { None } else { Some(owner.to_string()) };

        Ok(config)
    }
}
