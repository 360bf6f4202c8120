//! Configuration management for the tsk application.
//!
//! Settings live in a JSON file in the platform data directory. Each module
//! section is optional so users only configure what they use; `tsk init`
//! runs an interactive wizard that fills the selected sections in place.
//!
//! File locations:
//! - **Windows**: `%LOCALAPPDATA%\jesan\tsk\config.json`
//! - **macOS**: `~/Library/Application Support/jesan/tsk/config.json`
//! - **Linux**: `~/.local/share/jesan/tsk/config.json`
//!
//! The Gemini API key is never stored here; it goes through the encrypted
//! secret storage (`libs::secret`).

use crate::api::gemini::GeminiConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Reminder watcher configuration settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReminderConfig {
    /// Poll interval in seconds for checking due triggers.
    ///
    /// Reminder triggers fire at 09:00, so sub-minute polling buys nothing;
    /// the default keeps the watcher essentially idle.
    pub poll_interval: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig { poll_interval: 60 }
    }
}

/// Main configuration container for the entire application.
///
/// All module sections are optional; unconfigured sections are omitted from
/// the JSON output entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Reminder watcher settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<ReminderConfig>,

    /// Gemini AI assistant settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error; it yields the default configuration
    /// with all modules disabled.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Presents a multi-select of available modules, then walks the selected
    /// ones. Existing values are offered as defaults so re-running the
    /// wizard only changes what the user touches.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![
            ConfigModule {
                key: "reminders".to_string(),
                name: "Reminders".to_string(),
            },
            GeminiConfig::module(),
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "reminders" => {
                    let default = config.reminders.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleReminders);
                    config.reminders = Some(ReminderConfig {
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReminderPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                    });
                }
                "gemini" => config.gemini = Some(GeminiConfig::init(&config.gemini)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
