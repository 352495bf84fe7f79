//! The wizard orchestrator: owns the accumulator, drives navigation through
//! the step gates, and persists progress through the injected session store.

use chrono::Duration;
use uuid::Uuid;

use crate::config::WizardConfig;
use crate::domain::{
    BudgetView, IncomeSource, PresetPriority, Profile, WizardState, WizardStep,
};
use crate::errors::WizardError;
use crate::services::{
    BudgetCreationRequest, BudgetCreationService, BudgetPeriod, CreatedBudget,
    RecommendationRequest, RecommendationResponse, RecommendationService,
};
use crate::storage::{SavedSession, SessionStore};
use crate::wizard::progress::{self, StepProgress};
use crate::wizard::steps::{
    categories, confirmation, income, priority, recommendation, review,
};

/// Identifies the session revision a recommendation call was issued against.
/// Responses resolved against a different revision are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationTicket {
    revision: u64,
}

/// Same fencing for budget submissions: a ticket issued by
/// [`begin_submission`] must come back to [`resolve_submission`].
///
/// [`begin_submission`]: WizardSession::begin_submission
/// [`resolve_submission`]: WizardSession::resolve_submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    revision: u64,
}

/// A live wizard session for one user.
///
/// Every mutation runs through here so progress can be persisted after each
/// change; the host renders `state()` and calls back in. Completion and
/// cancellation are reported through the return values of [`confirm`] and
/// [`cancel`]; the session never navigates the host itself.
///
/// [`confirm`]: WizardSession::confirm
/// [`cancel`]: WizardSession::cancel
pub struct WizardSession<S: SessionStore> {
    state: WizardState,
    user_id: String,
    store: S,
    config: WizardConfig,
    revision: u64,
    pending_recommendation: bool,
    pending_creation: bool,
    resumed: bool,
}

impl<S: SessionStore> WizardSession<S> {
    /// Opens a session with the default configuration, resuming from the
    /// store when a fresh-enough snapshot for this user exists.
    pub fn new(user_id: impl Into<String>, store: S) -> Self {
        Self::with_config(user_id, store, WizardConfig::default())
    }

    pub fn with_config(user_id: impl Into<String>, store: S, config: WizardConfig) -> Self {
        let user_id = user_id.into();
        let mut state = WizardState::new();
        let mut resumed = false;
        match store.load() {
            Ok(Some(saved)) => {
                let ttl = Duration::hours(config.session_ttl_hours);
                if saved.user_id != user_id {
                    tracing::debug!("ignoring saved wizard session for another user");
                } else if saved.age() > ttl {
                    tracing::debug!("ignoring expired wizard session");
                } else {
                    state = saved.data;
                    state.step = WizardStep::from_index(saved.current_step);
                    resumed = true;
                    tracing::info!(step = state.step.index(), "resumed wizard session");
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%err, "failed to read saved wizard session, starting fresh");
            }
        }
        Self {
            state,
            user_id,
            store,
            config,
            revision: 0,
            pending_recommendation: false,
            pending_creation: false,
            resumed,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.step
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// `true` when this session was restored from a saved snapshot, so the
    /// host can tell the user their progress was picked up.
    pub fn was_resumed(&self) -> bool {
        self.resumed
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        progress::progress(self.state.step)
    }

    pub fn percent_complete(&self) -> u8 {
        progress::percent_complete(self.state.step)
    }

    // --- step 1: priority ---

    pub fn set_priority(&mut self, raw: &str) {
        priority::set(&mut self.state, raw);
        self.persist();
    }

    pub fn choose_preset_priority(&mut self, preset: PresetPriority) {
        priority::choose_preset(&mut self.state, preset);
        self.persist();
    }

    // --- step 2: income ---

    pub fn add_income(&mut self, source: IncomeSource) {
        income::add(&mut self.state, source);
        self.persist();
    }

    pub fn remove_income(&mut self, id: Uuid) -> Result<(), WizardError> {
        income::remove(&mut self.state, id)?;
        self.persist();
        Ok(())
    }

    /// Edits a source in place (name, amount, or frequency). A frequency
    /// change never rewrites the stored amount.
    pub fn update_income<F>(&mut self, id: Uuid, edit: F) -> Result<(), WizardError>
    where
        F: FnOnce(&mut IncomeSource),
    {
        let source = income::source_mut(&mut self.state, id)
            .ok_or_else(|| WizardError::InvalidOperation(format!("income source {id} not found")))?;
        edit(source);
        self.persist();
        Ok(())
    }

    pub fn total_annual_income(&self) -> f64 {
        self.state.total_annual_income()
    }

    // --- step 3: profile ---

    pub fn apply_profile(&mut self, profile: Profile) {
        crate::wizard::steps::profile::apply(&mut self.state, profile);
        self.persist();
    }

    pub fn set_dependents(&mut self, raw: &str) {
        crate::wizard::steps::profile::set_dependents(&mut self.state, raw);
        self.persist();
    }

    /// "Skip" keeps whatever profile is already captured and moves on; the
    /// profile screen never blocks.
    pub fn skip_profile(&mut self) -> Result<(), WizardError> {
        if self.state.step != WizardStep::Profile {
            return Err(WizardError::InvalidOperation(
                "skip applies only to the profile step".into(),
            ));
        }
        crate::wizard::steps::profile::skip(&mut self.state);
        self.advance()
    }

    // --- step 4: categories ---

    pub fn toggle_category(&mut self, category: &str) {
        categories::toggle_category(&mut self.state, category);
        self.persist();
    }

    pub fn toggle_subcategory(&mut self, category: &str, subcategory: &str) {
        categories::toggle_subcategory(&mut self.state, category, subcategory);
        self.persist();
    }

    pub fn essential_only(&mut self) {
        categories::essential_only(&mut self.state);
        self.persist();
    }

    pub fn select_all_categories(&mut self) {
        categories::select_all(&mut self.state);
        self.persist();
    }

    pub fn deselect_all_categories(&mut self) {
        categories::deselect_all(&mut self.state);
        self.persist();
    }

    // --- step 5: recommendation ---

    /// Starts a recommendation call: validates the step, marks the call in
    /// flight, and hands back the request plus the ticket the response must
    /// be resolved with.
    pub fn begin_recommendation(
        &mut self,
    ) -> Result<(RecommendationTicket, RecommendationRequest), WizardError> {
        if self.state.step != WizardStep::Recommendation {
            return Err(WizardError::InvalidOperation(
                "recommendations are only offered on the recommendation step".into(),
            ));
        }
        if self.pending_recommendation {
            return Err(WizardError::InvalidOperation(
                "a recommendation request is already in flight".into(),
            ));
        }
        let request = recommendation::build_request(&self.state)?;
        self.pending_recommendation = true;
        Ok((
            RecommendationTicket {
                revision: self.revision,
            },
            request,
        ))
    }

    /// Applies the outcome of a recommendation call. A response whose ticket
    /// no longer matches the session revision (the user navigated away and
    /// possibly back) is discarded without touching state.
    pub fn resolve_recommendation(
        &mut self,
        ticket: RecommendationTicket,
        outcome: Result<RecommendationResponse, WizardError>,
    ) -> Result<(), WizardError> {
        if ticket.revision != self.revision {
            // The in-flight flag stays untouched: it now belongs to whatever
            // request the current revision may have started.
            tracing::debug!("discarding stale recommendation response");
            return Ok(());
        }
        self.pending_recommendation = false;
        let response = outcome.map_err(|err| match err {
            WizardError::Service(_) => err,
            other => WizardError::Service(other.to_string()),
        })?;
        recommendation::apply_response(&mut self.state, response);
        self.navigate(self.state.step.next());
        self.persist();
        Ok(())
    }

    /// Convenience wrapper for hosts using an in-process recommender: begin,
    /// call, resolve.
    pub fn accept_recommendation(
        &mut self,
        service: &dyn RecommendationService,
    ) -> Result<(), WizardError> {
        let (ticket, request) = self.begin_recommendation()?;
        let outcome = service.recommend(&request);
        self.resolve_recommendation(ticket, outcome)
    }

    /// Declines the offer and moves on; the review screen seeds defaults.
    pub fn decline_recommendation(&mut self) -> Result<(), WizardError> {
        if self.state.step != WizardStep::Recommendation {
            return Err(WizardError::InvalidOperation(
                "recommendations are only offered on the recommendation step".into(),
            ));
        }
        recommendation::decline(&mut self.state);
        self.navigate(self.state.step.next());
        self.persist();
        Ok(())
    }

    // --- step 6: review ---

    pub fn set_budget_amount(
        &mut self,
        id: Uuid,
        view: BudgetView,
        amount: f64,
    ) -> Result<(), WizardError> {
        review::set_amount(&mut self.state, id, view, amount)?;
        self.persist();
        Ok(())
    }

    pub fn add_custom_entry(&mut self) -> Result<Uuid, WizardError> {
        let id = review::add_custom(&mut self.state)?;
        self.persist();
        Ok(id)
    }

    pub fn rename_custom_entry(
        &mut self,
        id: Uuid,
        category: &str,
        subcategory: &str,
    ) -> Result<(), WizardError> {
        review::rename_entry(&mut self.state, id, category, subcategory)?;
        self.persist();
        Ok(())
    }

    pub fn remove_budget_entry(&mut self, id: Uuid) -> Result<(), WizardError> {
        review::remove_entry(&mut self.state, id)?;
        self.persist();
        Ok(())
    }

    pub fn allocation_percentage(&self, view: BudgetView) -> f64 {
        review::allocation_percentage(&self.state, view)
    }

    pub fn allocation_status(&self, view: BudgetView) -> review::AllocationStatus {
        review::status_for(self.allocation_percentage(view))
    }

    // --- step 7: confirmation ---

    pub fn summary(&self) -> Result<confirmation::BudgetSummary, WizardError> {
        confirmation::summarize(&self.state)
    }

    /// Starts a budget submission: validates the step, marks the submission
    /// in flight, and hands back the request plus its resolution ticket.
    pub fn begin_submission(
        &mut self,
        period: BudgetPeriod,
    ) -> Result<(SubmissionTicket, BudgetCreationRequest), WizardError> {
        if self.state.step != WizardStep::Confirmation {
            return Err(WizardError::InvalidOperation(
                "the budget can only be submitted from the final step".into(),
            ));
        }
        if self.pending_creation {
            return Err(WizardError::InvalidOperation(
                "a submission is already in flight".into(),
            ));
        }
        let request = confirmation::build_request(&self.state, period)?;
        self.pending_creation = true;
        Ok((
            SubmissionTicket {
                revision: self.revision,
            },
            request,
        ))
    }

    /// Applies the outcome of a submission. A stale ticket resolves to
    /// `Ok(None)` without touching state; on success the saved session is
    /// cleared and the created record comes back for the host's completion
    /// callback; on failure the step stays active and the submission can
    /// simply be restarted.
    pub fn resolve_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<CreatedBudget, WizardError>,
    ) -> Result<Option<CreatedBudget>, WizardError> {
        if ticket.revision != self.revision {
            tracing::debug!("discarding stale budget submission outcome");
            return Ok(None);
        }
        self.pending_creation = false;
        let created = outcome.map_err(|err| match err {
            WizardError::Service(_) => err,
            other => WizardError::Service(other.to_string()),
        })?;
        if let Err(err) = self.store.clear() {
            tracing::warn!(%err, "failed to clear completed wizard session");
        }
        tracing::info!(budget = %created.id, "wizard completed");
        Ok(Some(created))
    }

    /// Convenience wrapper for hosts using an in-process creation backend:
    /// begin, call, resolve.
    pub fn confirm(
        &mut self,
        service: &dyn BudgetCreationService,
        period: BudgetPeriod,
    ) -> Result<CreatedBudget, WizardError> {
        let (ticket, request) = self.begin_submission(period)?;
        let outcome = service.create(&request);
        self.resolve_submission(ticket, outcome)?.ok_or_else(|| {
            WizardError::InvalidOperation("submission resolved against a stale session".into())
        })
    }

    // --- navigation ---

    /// Moves forward through the current step's gate.
    pub fn advance(&mut self) -> Result<(), WizardError> {
        match self.state.step {
            WizardStep::Priority => priority::validate(&self.state)?,
            WizardStep::Income => income::commit(&mut self.state)?,
            WizardStep::Profile => {}
            WizardStep::Categories => categories::validate(&self.state)?,
            WizardStep::Recommendation => recommendation::validate(&self.state)?,
            WizardStep::Review => review::validate(&self.state)?,
            WizardStep::Confirmation => {
                return Err(WizardError::InvalidOperation(
                    "already at the final step".into(),
                ))
            }
        }
        self.navigate(self.state.step.next());
        self.persist();
        Ok(())
    }

    /// Moves backward. Never gated; a no-op on the first screen.
    pub fn retreat(&mut self) {
        if self.state.step.is_first() {
            return;
        }
        self.navigate(self.state.step.previous());
        self.persist();
    }

    /// Jumps directly to an earlier (or the current) step by 1-based index,
    /// clamped into range. Skipping ahead is not allowed.
    pub fn jump_to(&mut self, step_index: u8) -> Result<(), WizardError> {
        let target = WizardStep::from_index(step_index);
        if target > self.state.step {
            return Err(WizardError::InvalidOperation(
                "cannot skip ahead to an unvisited step".into(),
            ));
        }
        self.navigate(target);
        self.persist();
        Ok(())
    }

    /// Abandons the wizard: clears the saved snapshot and resets the
    /// accumulator. The host's cancel callback takes over from here.
    pub fn cancel(&mut self) -> Result<(), WizardError> {
        self.store.clear()?;
        self.state = WizardState::new();
        self.revision += 1;
        self.pending_recommendation = false;
        self.pending_creation = false;
        self.resumed = false;
        Ok(())
    }

    fn navigate(&mut self, to: WizardStep) {
        if to == self.state.step {
            return;
        }
        self.state.step = to;
        self.revision += 1;
        // An orphaned in-flight call stops blocking; its late response is
        // fenced off by the revision check.
        self.pending_recommendation = false;
        self.pending_creation = false;
        if to == WizardStep::Review {
            review::seed_defaults(&mut self.state);
        }
    }

    /// Saves a snapshot once the user is past the first screen. Persistence
    /// trouble never interrupts the flow; the worst case is re-entering the
    /// current step after a reload.
    fn persist(&self) {
        if self.state.step.index() <= 1 {
            return;
        }
        let snapshot = SavedSession::new(self.user_id.clone(), &self.state);
        if let Err(err) = self.store.save(&snapshot) {
            tracing::warn!(%err, "failed to save wizard session");
        }
    }
}
