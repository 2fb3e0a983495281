//! Settings store for the launcher.
//!
//! A single small record holds everything the launcher needs across runs:
//! the greeting banner, build service credentials, the installed build
//! version, and the auto-update flag. The record is created interactively
//! on first run and afterwards only the version field changes, rewritten
//! once per successful install.
//!
//! ## Storage
//!
//! Persisted as JSON in the platform-specific application data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\bretb\patchup\settings.json`
//! - **macOS**: `~/Library/Application Support/bretb/patchup/settings.json`
//! - **Linux**: `~/.local/share/bretb/patchup/settings.json`
//!
//! The persisted `version` field is the single source of truth for what is
//! currently installed; it is monotonically non-decreasing across
//! successful updates.

use crate::libs::confirm::Confirm;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::PatchError;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Settings file name inside the application data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Sentinel version meaning "never installed".
pub const NEVER_INSTALLED: i64 = -1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppSettings {
    /// Banner printed at the start of every run.
    pub greeting: String,
    /// Organization identifier on the build service.
    pub org_id: String,
    /// Project identifier on the build service.
    pub project_id: String,
    /// API key, sent as the basic-auth username with an empty password.
    pub api_key: String,
    /// Installed build number, or [`NEVER_INSTALLED`].
    pub version: i64,
    /// When true, updates apply without operator confirmation.
    pub auto_update: bool,
}

impl AppSettings {
    /// Loads the settings record from disk.
    ///
    /// Returns `Ok(None)` when no settings file exists yet (first run). A
    /// file that exists but cannot be parsed is reported as
    /// [`PatchError::CorruptSettings`] instead of being silently replaced.
    pub fn load() -> Result<Option<AppSettings>> {
        let path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let settings = serde_json::from_str(&raw).map_err(|e| PatchError::CorruptSettings(e.to_string()))?;
        Ok(Some(settings))
    }

    /// Interactive first-run creation of the settings record.
    ///
    /// Prompts for the greeting, organization id, project id, and API key,
    /// then asks the auto-update question through the injected confirmation
    /// provider. The new record starts at version [`NEVER_INSTALLED`] and
    /// is saved before returning.
    pub fn bootstrap(confirm: &mut dyn Confirm) -> Result<AppSettings> {
        msg_print!(Message::SettingsBootstrapIntro, true);

        let settings = AppSettings {
            greeting: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGreeting.to_string())
                .allow_empty(true)
                .interact_text()?,
            org_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptOrgId.to_string())
                .interact_text()?,
            project_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptProjectId.to_string())
                .interact_text()?,
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiKey.to_string())
                .interact_text()?,
            version: NEVER_INSTALLED,
            auto_update: confirm.confirm(&Message::PromptAutoUpdate.to_string())?,
        };

        settings.save()?;
        Ok(settings)
    }

    /// Saves the full settings record as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, &self)?;
        Ok(())
    }

    /// Records a newly installed build number, leaving every other field
    /// untouched. Callers treat a failure here as non-fatal: the run keeps
    /// going with the stale on-disk version.
    pub fn persist_version(&mut self, version: i64) -> Result<()> {
        self.version = version;
        self.save().map_err(|e| PatchError::Persistence(e.to_string()).into())
    }

    /// Removes the settings file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(SETTINGS_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
