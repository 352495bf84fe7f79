//! Wizard configuration persisted alongside the session file.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::WizardError;
use crate::utils;

/// Behaviour knobs for the wizard host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// How long a saved session remains resumable.
    pub session_ttl_hours: i64,
    pub locale: String,
    pub currency: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            session_ttl_hours: 24,
            locale: "en-US".into(),
            currency: "USD".into(),
        }
    }
}

/// Loads and saves the configuration file, falling back to defaults when no
/// file exists yet.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(utils::config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<WizardConfig, WizardError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(WizardConfig::default())
        }
    }

    pub fn save(&self, config: &WizardConfig) -> Result<(), WizardError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = ConfigManager::with_path(dir.path().join("config.json"));
        let config = manager.load().expect("load");
        assert_eq!(config, WizardConfig::default());
        assert_eq!(config.session_ttl_hours, 24);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = ConfigManager::with_path(dir.path().join("config.json"));
        let config = WizardConfig {
            session_ttl_hours: 6,
            locale: "pt-PT".into(),
            currency: "EUR".into(),
        };
        manager.save(&config).expect("save");
        assert_eq!(manager.load().expect("load"), config);
    }
}
