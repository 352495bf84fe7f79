//! End-to-end wizard scenarios driven through the session facade.

use wizard_core::domain::{BudgetView, Frequency, IncomeSource, WizardStep};
use wizard_core::errors::WizardError;
use wizard_core::services::{
    BudgetCreationRequest, BudgetCreationService, BudgetPeriod, CreatedBudget,
    RuleBasedRecommender,
};
use wizard_core::storage::MemorySessionStore;
use wizard_core::wizard::steps::review::AllocationStatus;
use wizard_core::wizard::WizardSession;

/// Creation backend double that echoes the payload back, as the real service
/// echoes the persisted record.
struct EchoCreationService;

impl BudgetCreationService for EchoCreationService {
    fn create(&self, request: &BudgetCreationRequest) -> Result<CreatedBudget, WizardError> {
        Ok(CreatedBudget {
            id: "budget-123".into(),
            period: request.period.clone(),
            categories: request.categories.clone(),
            total_allocated: request.categories.iter().map(|c| c.annual()).sum(),
        })
    }
}

struct UnreachableCreationService;

impl BudgetCreationService for UnreachableCreationService {
    fn create(&self, _request: &BudgetCreationRequest) -> Result<CreatedBudget, WizardError> {
        Err(WizardError::Service("connection refused".into()))
    }
}

#[test]
fn guided_flow_with_declined_recommendation() {
    let mut session = WizardSession::new("user-1", MemorySessionStore::new());

    session.set_priority("increase-savings");
    session.advance().expect("past priority");

    session.add_income(IncomeSource::new("Job", 100_000.0, Frequency::Monthly));
    session.advance().expect("past income");
    assert_eq!(session.total_annual_income(), 1_200_000.0);

    session.advance().expect("profile is optional");

    // Only Housing (essential) and Entertainment (lifestyle), one
    // subcategory each.
    session.deselect_all_categories();
    session.toggle_subcategory("Housing", "Rent/Mortgage");
    session.toggle_subcategory("Entertainment", "Streaming & Media");
    session.advance().expect("past categories");

    session.decline_recommendation().expect("start from zero");
    assert_eq!(session.current_step(), WizardStep::Review);

    let draft = session.state().budget.as_ref().expect("seeded draft");
    assert_eq!(draft.categories.len(), 2, "one seed row per selected pair");
    assert_eq!(draft.total_allocated, 0.0);
    assert_eq!(session.allocation_percentage(BudgetView::Annual), 0.0);

    let housing_id = draft
        .categories
        .iter()
        .find(|entry| entry.category == "Housing")
        .expect("housing row")
        .id;
    session
        .set_budget_amount(housing_id, BudgetView::Monthly, 30_000.0)
        .expect("edit housing");

    let pct = session.allocation_percentage(BudgetView::Annual);
    assert!((pct - 30.0).abs() < 1e-9, "30,000 * 12 / 1,200,000 = 30%");
    // 30% sits below the on-target band: no banner either way.
    assert_eq!(session.allocation_status(BudgetView::Annual), AllocationStatus::Neutral);
    assert_eq!(
        session.allocation_status(BudgetView::Monthly),
        AllocationStatus::Neutral
    );

    session.advance().expect("past review");
    assert_eq!(session.current_step(), WizardStep::Confirmation);

    let summary = session.summary().expect("summary");
    assert_eq!(summary.essential_total, 360_000.0);
    assert_eq!(summary.lifestyle_total, 0.0);
    assert_eq!(summary.savings_total, 0.0);
    assert_eq!(summary.savings_rate, 0.0);

    let created = session
        .confirm(&EchoCreationService, BudgetPeriod::Year { year: 2026 })
        .expect("create budget");
    assert_eq!(created.id, "budget-123");
    assert_eq!(created.categories.len(), 2);
}

#[test]
fn accepted_recommendation_prefills_review() {
    let mut session = WizardSession::new("user-2", MemorySessionStore::new());
    session.set_priority("live-within-means");
    session.advance().expect("past priority");
    let source = IncomeSource::new("Job", 50_000.0, Frequency::Annual);
    let source_id = source.id;
    session.add_income(source);
    session
        .update_income(source_id, |income| {
            income.amount = 100_000.0;
            income.frequency = Frequency::Monthly;
        })
        .expect("edit income");
    session.advance().expect("past income");
    session.skip_profile().expect("skip profile");
    session.advance().expect("past categories");

    session
        .accept_recommendation(&RuleBasedRecommender)
        .expect("recommendation");
    assert_eq!(session.current_step(), WizardStep::Review);

    let draft = session.state().budget.as_ref().expect("draft");
    // Defaults select essential + savings; 50% + 20% of income.
    assert!((draft.total_allocated - 840_000.0).abs() < 0.01);
    let pct = session.allocation_percentage(BudgetView::Monthly);
    assert!((pct - 70.0).abs() < 0.01);
}

#[test]
fn review_gate_blocks_overshoot_past_tolerance() {
    let mut session = WizardSession::new("user-3", MemorySessionStore::new());
    session.set_priority("responsible-spending");
    session.advance().expect("past priority");
    session.add_income(IncomeSource::new("Job", 1_000.0, Frequency::Monthly));
    session.advance().expect("past income");
    session.advance().expect("past profile");
    session.advance().expect("past categories");
    session.decline_recommendation().expect("decline");

    let id = session.state().budget.as_ref().expect("draft").categories[0].id;
    session
        .set_budget_amount(id, BudgetView::Monthly, 1_060.0)
        .expect("edit");
    assert_eq!(
        session.allocation_status(BudgetView::Monthly),
        AllocationStatus::Blocked
    );
    let err = session.advance().expect_err("106% is past the tolerance");
    assert!(matches!(err, WizardError::Validation(_)));

    session
        .set_budget_amount(id, BudgetView::Monthly, 1_040.0)
        .expect("edit");
    assert_eq!(
        session.allocation_status(BudgetView::Monthly),
        AllocationStatus::OverBudget
    );
    session.advance().expect("104% passes under the tolerance");
}

#[test]
fn failed_submission_is_resubmittable() {
    let mut session = WizardSession::new("user-4", MemorySessionStore::new());
    session.set_priority("specific-goal");
    session.advance().expect("past priority");
    session.add_income(IncomeSource::new("Job", 4_000.0, Frequency::Monthly));
    session.advance().expect("past income");
    session.advance().expect("past profile");
    session.advance().expect("past categories");
    session.decline_recommendation().expect("decline");
    session.advance().expect("past review");

    let period = BudgetPeriod::Month {
        month: "2026-09".into(),
    };
    let err = session
        .confirm(&UnreachableCreationService, period.clone())
        .expect_err("backend down");
    assert!(matches!(err, WizardError::Service(_)));
    assert_eq!(session.current_step(), WizardStep::Confirmation);

    session
        .confirm(&EchoCreationService, period)
        .expect("retry succeeds");
}

#[test]
fn completion_clears_the_saved_session() {
    let store = std::sync::Arc::new(MemorySessionStore::new());
    let mut session = WizardSession::new("user-5", store.clone());
    session.set_priority("increase-savings");
    session.advance().expect("past priority");
    session.add_income(IncomeSource::new("Job", 4_000.0, Frequency::Monthly));
    session.advance().expect("past income");
    session.advance().expect("past profile");
    session.advance().expect("past categories");
    session.decline_recommendation().expect("decline");
    session.advance().expect("past review");
    session
        .confirm(&EchoCreationService, BudgetPeriod::Year { year: 2026 })
        .expect("create");

    // A fresh visit to the same store starts clean.
    let next = WizardSession::new("user-5", store);
    assert!(!next.was_resumed());
    assert_eq!(next.current_step(), WizardStep::Priority);
}
