//! Step 4: category selection. Thin wrappers over the selection model plus
//! the advance gate.

use crate::domain::WizardState;
use crate::errors::WizardError;

pub fn toggle_category(state: &mut WizardState, category: &str) {
    state.selection.toggle_category(category);
}

pub fn toggle_subcategory(state: &mut WizardState, category: &str, subcategory: &str) {
    state.selection.toggle_subcategory(category, subcategory);
}

pub fn essential_only(state: &mut WizardState) {
    state.selection.essential_only();
}

pub fn select_all(state: &mut WizardState) {
    state.selection.select_all();
}

pub fn deselect_all(state: &mut WizardState) {
    state.selection.deselect_all();
}

/// Advancing requires at least one category and one subcategory selected.
pub fn validate(state: &WizardState) -> Result<(), WizardError> {
    if state.selection.is_valid() {
        Ok(())
    } else {
        Err(WizardError::Validation(
            "select at least one category and one subcategory".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_follows_selection_validity() {
        let mut state = WizardState::new();
        assert!(validate(&state).is_ok());
        deselect_all(&mut state);
        assert!(validate(&state).is_err());
        toggle_subcategory(&mut state, "Food", "Groceries");
        assert!(validate(&state).is_ok());
    }
}
