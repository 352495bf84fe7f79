//! Step 1: priority selection.

use crate::domain::{PresetPriority, Priority, WizardState};
use crate::errors::WizardError;

/// Records a preset choice.
pub fn choose_preset(state: &mut WizardState, preset: PresetPriority) {
    state.priority = Some(Priority::Preset(preset));
}

/// Records raw input, preset id or free text alike. Whitespace-only input
/// clears the choice.
pub fn set(state: &mut WizardState, raw: &str) {
    state.priority = Priority::parse(raw);
}

/// Advancing requires a non-empty priority.
pub fn validate(state: &WizardState) -> Result<(), WizardError> {
    match &state.priority {
        Some(_) => Ok(()),
        None => Err(WizardError::Validation(
            "select a priority or describe your own".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_requires_a_priority() {
        let mut state = WizardState::new();
        assert!(validate(&state).is_err());
        set(&mut state, "   ");
        assert!(validate(&state).is_err());
        set(&mut state, "save for a boat");
        assert!(validate(&state).is_ok());
        choose_preset(&mut state, PresetPriority::LiveWithinMeans);
        assert_eq!(state.priority_str(), Some("live-within-means"));
    }
}
