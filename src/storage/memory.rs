//! In-memory session store for tests and hosts that opt out of persistence.

use std::sync::Mutex;

use crate::errors::WizardError;
use crate::storage::{SavedSession, SessionStore};

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<SavedSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an existing snapshot, as if a prior visit saved it.
    pub fn seeded(session: SavedSession) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SavedSession>, WizardError> {
        Ok(self
            .inner
            .lock()
            .map_err(|_| WizardError::InvalidOperation("session store poisoned".into()))?
            .clone())
    }

    fn save(&self, session: &SavedSession) -> Result<(), WizardError> {
        *self
            .inner
            .lock()
            .map_err(|_| WizardError::InvalidOperation("session store poisoned".into()))? =
            Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), WizardError> {
        *self
            .inner
            .lock()
            .map_err(|_| WizardError::InvalidOperation("session store poisoned".into()))? = None;
        Ok(())
    }
}
