//! Budget entries and the draft assembled during review.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Broad budgeting group every entry carries from the moment it is created,
/// whether it came from the default taxonomy, a recommendation, or a custom
/// row. Confirmation subtotals read this tag instead of guessing from names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGroup {
    Essential,
    Lifestyle,
    Savings,
}

impl CategoryGroup {
    pub fn label(self) -> &'static str {
        match self {
            CategoryGroup::Essential => "Essential",
            CategoryGroup::Lifestyle => "Lifestyle",
            CategoryGroup::Savings => "Savings & Goals",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side of the monthly/annual pair a screen is showing or editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetView {
    Monthly,
    Annual,
}

/// One budgeted line item: a category/subcategory pair with an amount kept in
/// monthly and annual form simultaneously.
///
/// The amounts are private so the 12x relationship between them can never
/// drift; editing either side recomputes the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEntry {
    pub id: Uuid,
    pub category: String,
    pub subcategory: String,
    monthly_budget: f64,
    annual_budget: f64,
    pub group: CategoryGroup,
    pub is_essential: bool,
    /// A regular periodic expense, as opposed to an occasional one.
    #[serde(default)]
    pub is_recurring: bool,
    pub is_custom: bool,
}

impl BudgetEntry {
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        group: CategoryGroup,
        is_essential: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            subcategory: subcategory.into(),
            monthly_budget: 0.0,
            annual_budget: 0.0,
            group,
            is_essential,
            is_recurring: false,
            is_custom: false,
        }
    }

    /// A user-added row: blank names, zero amounts, immediately editable.
    pub fn custom() -> Self {
        let mut entry = Self::new("", "", CategoryGroup::Lifestyle, false);
        entry.is_custom = true;
        entry
    }

    pub fn with_annual(mut self, amount: f64) -> Self {
        self.set_annual(amount);
        self
    }

    pub fn with_recurring(mut self, recurring: bool) -> Self {
        self.is_recurring = recurring;
        self
    }

    pub fn monthly(&self) -> f64 {
        self.monthly_budget
    }

    pub fn annual(&self) -> f64 {
        self.annual_budget
    }

    /// Sets the monthly amount and re-derives the annual side.
    pub fn set_monthly(&mut self, amount: f64) {
        self.monthly_budget = amount;
        self.annual_budget = amount * MONTHS_PER_YEAR;
    }

    /// Sets the annual amount and re-derives the monthly side.
    pub fn set_annual(&mut self, amount: f64) {
        self.annual_budget = amount;
        self.monthly_budget = amount / MONTHS_PER_YEAR;
    }

    pub fn amount_for(&self, view: BudgetView) -> f64 {
        match view {
            BudgetView::Monthly => self.monthly_budget,
            BudgetView::Annual => self.annual_budget,
        }
    }

    pub fn set_amount_for(&mut self, view: BudgetView, amount: f64) {
        match view {
            BudgetView::Monthly => self.set_monthly(amount),
            BudgetView::Annual => self.set_annual(amount),
        }
    }
}

/// The working budget assembled on the review screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDraft {
    pub categories: Vec<BudgetEntry>,
    pub total_income: f64,
    pub total_allocated: f64,
}

impl BudgetDraft {
    /// An empty draft for users building their budget from zero.
    pub fn empty(total_income: f64) -> Self {
        Self {
            categories: Vec::new(),
            total_income,
            total_allocated: 0.0,
        }
    }

    pub fn from_entries(categories: Vec<BudgetEntry>, total_income: f64) -> Self {
        let mut draft = Self {
            categories,
            total_income,
            total_allocated: 0.0,
        };
        draft.recompute_total();
        draft
    }

    /// Annualized sum across every entry. Kept current after each mutation.
    pub fn recompute_total(&mut self) {
        self.total_allocated = self.categories.iter().map(BudgetEntry::annual).sum();
    }

    pub fn entry(&self, id: Uuid) -> Option<&BudgetEntry> {
        self.categories.iter().find(|entry| entry.id == id)
    }

    pub fn entry_mut(&mut self, id: Uuid) -> Option<&mut BudgetEntry> {
        self.categories.iter_mut().find(|entry| entry.id == id)
    }

    /// Total allocated in the requested view.
    pub fn allocated_for(&self, view: BudgetView) -> f64 {
        self.categories
            .iter()
            .map(|entry| entry.amount_for(view))
            .sum()
    }

    /// Income expressed in the requested view's period.
    pub fn income_for(&self, view: BudgetView) -> f64 {
        match view {
            BudgetView::Monthly => self.total_income / MONTHS_PER_YEAR,
            BudgetView::Annual => self.total_income,
        }
    }

    /// Allocated amount as a percentage of income for the requested view.
    /// Zero income yields zero rather than a division error.
    pub fn allocation_percentage(&self, view: BudgetView) -> f64 {
        let income = self.income_for(view);
        if income <= 0.0 {
            return 0.0;
        }
        self.allocated_for(view) / income * 100.0
    }
}
