//! Step 5: accept a generated recommendation or start from zero.

use crate::domain::{BudgetDraft, WizardState};
use crate::errors::WizardError;
use crate::services::{RecommendationRequest, RecommendationResponse};

/// Builds the collaborator request from the accumulator.
pub fn build_request(state: &WizardState) -> Result<RecommendationRequest, WizardError> {
    let priority = state
        .priority_str()
        .ok_or_else(|| WizardError::InvalidOperation("priority not set".into()))?
        .to_string();
    Ok(RecommendationRequest {
        income: state.total_annual_income(),
        priority,
        profile: state.profile.clone(),
        selected_categories: state.selection.clone(),
    })
}

/// Populates the draft from a successful recommendation.
pub fn apply_response(state: &mut WizardState, response: RecommendationResponse) {
    state.budget = Some(BudgetDraft::from_entries(
        response.categories,
        state.total_annual_income(),
    ));
}

/// Declining leaves an empty draft; the review screen seeds defaults itself.
pub fn decline(state: &mut WizardState) {
    state.budget = Some(BudgetDraft::empty(state.total_annual_income()));
}

/// Advancing past this screen requires a decision either way.
pub fn validate(state: &WizardState) -> Result<(), WizardError> {
    match &state.budget {
        Some(_) => Ok(()),
        None => Err(WizardError::Validation(
            "accept the recommendation or choose to start from zero".into(),
        )),
    }
}
