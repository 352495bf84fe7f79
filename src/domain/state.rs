//! The single accumulator a wizard session mutates.

use serde::{Deserialize, Serialize};

use crate::domain::{income, BudgetDraft, IncomeSource, Priority, Profile, WizardStep};
use crate::selection::CategorySelection;

/// Everything collected across the seven screens. Plain serializable data;
/// all mutation rules live in the wizard step modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub step: WizardStep,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub selection: CategorySelection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetDraft>,
}

impl WizardState {
    /// A fresh accumulator positioned on the first screen, with the category
    /// selection pre-seeded to the essential defaults.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Priority,
            priority: None,
            income_sources: Vec::new(),
            profile: Profile::default(),
            selection: CategorySelection::essential_defaults(),
            budget: None,
        }
    }

    /// Annualized sum over all income sources.
    pub fn total_annual_income(&self) -> f64 {
        income::total_annual_income(&self.income_sources)
    }

    /// The priority in its single-string contract form, if set.
    pub fn priority_str(&self) -> Option<&str> {
        self.priority.as_ref().map(Priority::as_str)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
