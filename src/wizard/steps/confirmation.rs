//! Step 7: derived summary and final submission payload.

use serde::{Deserialize, Serialize};

use crate::domain::{BudgetEntry, CategoryGroup, WizardState};
use crate::errors::WizardError;
use crate::services::{BudgetCreationRequest, BudgetPeriod, IncomeSummary};

/// Per-group subtotals shown before the user commits. Annual figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub essential_total: f64,
    pub lifestyle_total: f64,
    pub savings_total: f64,
    pub total_allocated: f64,
    pub total_income: f64,
    /// Savings subtotal over income; zero when there is no income.
    pub savings_rate: f64,
}

fn group_total(categories: &[BudgetEntry], group: CategoryGroup) -> f64 {
    categories
        .iter()
        .filter(|entry| entry.group == group)
        .map(BudgetEntry::annual)
        .sum()
}

/// Computes the summary from the final draft's explicit group tags.
pub fn summarize(state: &WizardState) -> Result<BudgetSummary, WizardError> {
    let draft = state
        .budget
        .as_ref()
        .ok_or_else(|| WizardError::InvalidOperation("no budget draft to summarize".into()))?;
    let savings_total = group_total(&draft.categories, CategoryGroup::Savings);
    let savings_rate = if draft.total_income > 0.0 {
        savings_total / draft.total_income
    } else {
        0.0
    };
    Ok(BudgetSummary {
        essential_total: group_total(&draft.categories, CategoryGroup::Essential),
        lifestyle_total: group_total(&draft.categories, CategoryGroup::Lifestyle),
        savings_total,
        total_allocated: draft.total_allocated,
        total_income: draft.total_income,
        savings_rate,
    })
}

/// Assembles the creation-service payload from the accumulator.
pub fn build_request(
    state: &WizardState,
    period: BudgetPeriod,
) -> Result<BudgetCreationRequest, WizardError> {
    let draft = state
        .budget
        .as_ref()
        .ok_or_else(|| WizardError::InvalidOperation("no budget draft to submit".into()))?;
    let priority = state
        .priority_str()
        .ok_or_else(|| WizardError::InvalidOperation("priority not set".into()))?
        .to_string();
    Ok(BudgetCreationRequest {
        period,
        income: IncomeSummary::from_sources(state.income_sources.clone()),
        categories: draft.categories.clone(),
        creation_method: "guided".into(),
        user_profile: state.profile.clone(),
        priority,
    })
}
