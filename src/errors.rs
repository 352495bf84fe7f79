use thiserror::Error;

/// Error type that captures wizard-session failures.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Service call failed: {0}")]
    Service(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl WizardError {
    /// Returns `true` for errors the user can clear by correcting input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WizardError::Validation(_) | WizardError::Service(_) | WizardError::InvalidOperation(_)
        )
    }
}
