//! Collaborator ports the wizard calls into.
//!
//! The recommendation and budget-creation backends are external services;
//! the wizard only knows these contracts. `RuleBasedRecommender` is the local
//! implementation hosts use when no backend is reachable (or in tests).

use serde::{Deserialize, Serialize};

use crate::allocation;
use crate::domain::{BudgetEntry, IncomeSource, Profile, MONTHS_PER_YEAR};
use crate::errors::WizardError;
use crate::selection::CategorySelection;

/// Request for a generated starting budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub income: f64,
    pub priority: String,
    pub profile: Profile,
    pub selected_categories: CategorySelection,
}

/// A generated starting budget, honoring the 50/30/20 split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub categories: Vec<BudgetEntry>,
    pub total_allocated: f64,
}

pub trait RecommendationService: Send + Sync {
    fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResponse, WizardError>;
}

/// Local recommender backed by the crate's own allocation rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedRecommender;

impl RecommendationService for RuleBasedRecommender {
    fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResponse, WizardError> {
        if request.income <= 0.0 {
            return Err(WizardError::Validation(
                "cannot recommend a budget without income".into(),
            ));
        }
        let recommendation = allocation::recommend(request.income, &request.selected_categories);
        Ok(RecommendationResponse {
            categories: recommendation.categories,
            total_allocated: recommendation.total_allocated,
        })
    }
}

/// The period a budget is created for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BudgetPeriod {
    /// A monthly budget, `"YYYY-MM"`.
    Month { month: String },
    /// An annual budget.
    Year { year: i32 },
}

/// Income figures as the creation service expects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSummary {
    pub monthly: f64,
    pub annual: f64,
    pub sources: Vec<IncomeSource>,
}

impl IncomeSummary {
    pub fn from_sources(sources: Vec<IncomeSource>) -> Self {
        let annual = crate::domain::income::total_annual_income(&sources);
        Self {
            monthly: annual / MONTHS_PER_YEAR,
            annual,
            sources,
        }
    }
}

/// Final payload handed to the budget-creation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCreationRequest {
    #[serde(flatten)]
    pub period: BudgetPeriod,
    pub income: IncomeSummary,
    pub categories: Vec<BudgetEntry>,
    pub creation_method: String,
    pub user_profile: Profile,
    pub priority: String,
}

/// The persisted budget record, echoed back to the host on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBudget {
    pub id: String,
    #[serde(flatten)]
    pub period: BudgetPeriod,
    pub categories: Vec<BudgetEntry>,
    pub total_allocated: f64,
}

pub trait BudgetCreationService: Send + Sync {
    fn create(&self, request: &BudgetCreationRequest) -> Result<CreatedBudget, WizardError>;
}
