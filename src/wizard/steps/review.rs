//! Step 6: budget review and adjustment.

use uuid::Uuid;

use crate::domain::{BudgetDraft, BudgetEntry, BudgetView, WizardState};
use crate::errors::WizardError;
use crate::taxonomy::DEFAULT_TAXONOMY;

/// Overshoot tolerance: advance stays possible up to 105% of income.
pub const MAX_ALLOCATION_PERCENT: f64 = 105.0;
/// Lower edge of the on-target band.
pub const ON_TARGET_FLOOR_PERCENT: f64 = 95.0;

/// Banner band for the running allocation percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStatus {
    /// Below the on-target band; nothing to flag.
    Neutral,
    /// 95-100%: the budget uses income nearly fully without overshooting.
    OnTarget,
    /// Above 100%: spending exceeds income.
    OverBudget,
    /// Above 105%: advancing is blocked.
    Blocked,
}

/// Classifies an allocation percentage into its banner band.
pub fn status_for(percentage: f64) -> AllocationStatus {
    if percentage > MAX_ALLOCATION_PERCENT {
        AllocationStatus::Blocked
    } else if percentage > 100.0 {
        AllocationStatus::OverBudget
    } else if percentage >= ON_TARGET_FLOOR_PERCENT {
        AllocationStatus::OnTarget
    } else {
        AllocationStatus::Neutral
    }
}

/// Seeds zero-amount rows from the default taxonomy when the user declined
/// recommendations. Only categories still selected in step 4 contribute rows,
/// and within them only the selected subcategories. Runs on every entry into
/// the screen, so the draft's income total always matches the income sources,
/// which the user may have edited after the draft was created.
pub fn seed_defaults(state: &mut WizardState) {
    let total_income = state.total_annual_income();
    let draft = state
        .budget
        .get_or_insert_with(|| BudgetDraft::empty(total_income));
    draft.total_income = total_income;
    if !draft.categories.is_empty() {
        return;
    }
    for template in DEFAULT_TAXONOMY {
        if !state.selection.is_category_selected(template.name) {
            continue;
        }
        for sub in template.subcategories {
            if !state.selection.is_subcategory_selected(template.name, sub.name) {
                continue;
            }
            draft.categories.push(
                BudgetEntry::new(template.name, sub.name, template.group, template.is_essential)
                    .with_recurring(sub.recurring),
            );
        }
    }
    draft.recompute_total();
}

fn draft_mut(state: &mut WizardState) -> Result<&mut BudgetDraft, WizardError> {
    state
        .budget
        .as_mut()
        .ok_or_else(|| WizardError::InvalidOperation("no budget draft to edit".into()))
}

/// Edits one side of an entry's amount; the other side re-derives at the 12x
/// ratio and the running total updates.
pub fn set_amount(
    state: &mut WizardState,
    id: Uuid,
    view: BudgetView,
    amount: f64,
) -> Result<(), WizardError> {
    if amount < 0.0 {
        return Err(WizardError::Validation("amounts cannot be negative".into()));
    }
    let draft = draft_mut(state)?;
    let entry = draft
        .entry_mut(id)
        .ok_or_else(|| WizardError::InvalidOperation(format!("budget entry {id} not found")))?;
    entry.set_amount_for(view, amount);
    draft.recompute_total();
    Ok(())
}

/// Renames a row. Only custom rows accept a name edit.
pub fn rename_entry(
    state: &mut WizardState,
    id: Uuid,
    category: &str,
    subcategory: &str,
) -> Result<(), WizardError> {
    let draft = draft_mut(state)?;
    let entry = draft
        .entry_mut(id)
        .ok_or_else(|| WizardError::InvalidOperation(format!("budget entry {id} not found")))?;
    if !entry.is_custom {
        return Err(WizardError::Validation(
            "only custom entries can be renamed".into(),
        ));
    }
    entry.category = category.to_string();
    entry.subcategory = subcategory.to_string();
    Ok(())
}

/// Adds a blank custom row and returns its id.
pub fn add_custom(state: &mut WizardState) -> Result<Uuid, WizardError> {
    let draft = draft_mut(state)?;
    let entry = BudgetEntry::custom();
    let id = entry.id;
    draft.categories.push(entry);
    Ok(id)
}

/// Removes a row. Non-custom rows are never removable, only zeroable.
pub fn remove_entry(state: &mut WizardState, id: Uuid) -> Result<(), WizardError> {
    let draft = draft_mut(state)?;
    let entry = draft
        .entry(id)
        .ok_or_else(|| WizardError::InvalidOperation(format!("budget entry {id} not found")))?;
    if !entry.is_custom {
        return Err(WizardError::Validation(
            "default entries cannot be removed, set them to zero instead".into(),
        ));
    }
    draft.categories.retain(|entry| entry.id != id);
    draft.recompute_total();
    Ok(())
}

/// The running percentage for the requested view.
pub fn allocation_percentage(state: &WizardState, view: BudgetView) -> f64 {
    state
        .budget
        .as_ref()
        .map(|draft| draft.allocation_percentage(view))
        .unwrap_or(0.0)
}

/// Advancing is blocked above the 105% tolerance. Both views yield the same
/// percentage (amounts and income scale by the same factor), so the gate
/// checks the annual figure.
pub fn validate(state: &WizardState) -> Result<(), WizardError> {
    let percentage = allocation_percentage(state, BudgetView::Annual);
    if percentage > MAX_ALLOCATION_PERCENT {
        return Err(WizardError::Validation(format!(
            "budget allocates {percentage:.1}% of income, above the {MAX_ALLOCATION_PERCENT:.0}% limit"
        )));
    }
    Ok(())
}
