//! Step 2: income collection.

use uuid::Uuid;

use crate::domain::{IncomeSource, WizardState};
use crate::errors::WizardError;

/// Appends a source to the working list.
pub fn add(state: &mut WizardState, source: IncomeSource) {
    state.income_sources.push(source);
}

/// Removes a source. Removing the last remaining one is blocked.
pub fn remove(state: &mut WizardState, id: Uuid) -> Result<(), WizardError> {
    if state.income_sources.len() <= 1 {
        return Err(WizardError::Validation(
            "at least one income source is required".into(),
        ));
    }
    let before = state.income_sources.len();
    state.income_sources.retain(|source| source.id != id);
    if state.income_sources.len() == before {
        return Err(WizardError::InvalidOperation(format!(
            "income source {id} not found"
        )));
    }
    Ok(())
}

pub fn source_mut(state: &mut WizardState, id: Uuid) -> Option<&mut IncomeSource> {
    state.income_sources.iter_mut().find(|source| source.id == id)
}

/// Drops invalid rows and validates what remains. Called on advance: entries
/// without a name or a positive amount are silently excluded, not blocked.
pub fn commit(state: &mut WizardState) -> Result<(), WizardError> {
    state.income_sources.retain(IncomeSource::is_valid);
    if state.income_sources.is_empty() {
        return Err(WizardError::Validation(
            "add at least one income source with a name and an amount".into(),
        ));
    }
    Ok(())
}
