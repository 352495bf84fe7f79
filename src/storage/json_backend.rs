//! Filesystem-backed JSON persistence for the wizard session.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::WizardError;
use crate::storage::{SavedSession, SessionStore};
use crate::utils;

/// Stores the session snapshot as pretty-printed JSON at a fixed path,
/// staging writes through a temporary file so readers never see a torn file.
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    /// Uses the well-known session file under the application data directory.
    pub fn new() -> Self {
        Self::with_path(utils::session_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Result<Option<SavedSession>, WizardError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&data) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                // Corrupt snapshots are treated as absent, never surfaced.
                tracing::warn!(path = %self.path.display(), %err, "discarding unreadable wizard session");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &SavedSession) -> Result<(), WizardError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), WizardError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
