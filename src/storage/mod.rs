//! Persistence port for the single in-progress wizard session.

pub mod json_backend;
pub mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::WizardState;
use crate::errors::WizardError;

pub use json_backend::JsonSessionStore;
pub use memory::MemorySessionStore;

/// Snapshot of an in-progress session as persisted between visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    pub user_id: String,
    pub current_step: u8,
    pub data: WizardState,
    pub timestamp: DateTime<Utc>,
}

impl SavedSession {
    pub fn new(user_id: impl Into<String>, data: &WizardState) -> Self {
        Self {
            user_id: user_id.into(),
            current_step: data.step.index(),
            data: data.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Age of the snapshot relative to now.
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.timestamp
    }
}

/// Abstraction over wherever the session snapshot lives. Only one snapshot is
/// retained at a time; saving replaces any previous one.
pub trait SessionStore: Send + Sync {
    /// Returns the stored snapshot, or `None` when absent or unreadable.
    fn load(&self) -> Result<Option<SavedSession>, WizardError>;
    fn save(&self, session: &SavedSession) -> Result<(), WizardError>;
    fn clear(&self) -> Result<(), WizardError>;
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<SavedSession>, WizardError> {
        (**self).load()
    }

    fn save(&self, session: &SavedSession) -> Result<(), WizardError> {
        (**self).save(session)
    }

    fn clear(&self) -> Result<(), WizardError> {
        (**self).clear()
    }
}
