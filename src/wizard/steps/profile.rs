//! Step 3: optional personal profile. Never gates navigation.

use crate::domain::{profile::coerce_dependents, Profile, WizardState};

/// Writes the captured profile into the accumulator.
pub fn apply(state: &mut WizardState, profile: Profile) {
    state.profile = profile;
}

/// "Skip" keeps whatever profile is already there, possibly empty.
pub fn skip(state: &mut WizardState) {
    let _ = state;
}

/// Applies raw dependent-count input with the non-negative coercion.
pub fn set_dependents(state: &mut WizardState, raw: &str) {
    state.profile.dependents = coerce_dependents(raw);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_and_coerce() {
        let mut state = WizardState::new();
        apply(
            &mut state,
            Profile {
                age_range: Some("25-34".into()),
                ..Profile::default()
            },
        );
        set_dependents(&mut state, "-3");
        assert_eq!(state.profile.dependents, 0);
        set_dependents(&mut state, "2");
        assert_eq!(state.profile.dependents, 2);
        assert_eq!(state.profile.age_range.as_deref(), Some("25-34"));
    }
}
