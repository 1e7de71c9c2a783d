use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::localize::Language;

/// Top-level configuration stored on disk.
///
/// Only the display-language preference lives here; the weather pipeline
/// itself reads no files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Saved display language, e.g. "en" or "ar".
    pub language: Option<String>,
}

impl Config {
    /// Return the saved language as a strongly-typed Language.
    ///
    /// Falls back to English when nothing has been saved yet, matching the
    /// app's first-launch behavior.
    pub fn saved_language(&self) -> Result<Language> {
        match self.language.as_ref() {
            Some(s) => Language::try_from(s.as_str()),
            None => Ok(Language::English),
        }
    }

    /// Store the language preference as a string.
    pub fn set_language(&mut self, lang: Language) {
        self.language = Some(lang.as_str().to_string());
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "sahab", "sahab-app")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
