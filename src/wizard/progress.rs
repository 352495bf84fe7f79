//! Progress-indicator model: a pure mapping from the active step to per-step
//! visual states. No access to the accumulator.

use crate::domain::WizardStep;

/// Visual state of one step in the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

/// One indicator slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepProgress {
    pub step: WizardStep,
    pub label: &'static str,
    pub state: StepState,
}

/// Maps the active step to the full indicator row.
pub fn progress(current: WizardStep) -> Vec<StepProgress> {
    WizardStep::ALL
        .into_iter()
        .map(|step| StepProgress {
            step,
            label: step.label(),
            state: if step < current {
                StepState::Completed
            } else if step == current {
                StepState::Active
            } else {
                StepState::Upcoming
            },
        })
        .collect()
}

/// Integer percentage of the flow completed: 0 on the first screen, 100 on
/// the last.
pub fn percent_complete(current: WizardStep) -> u8 {
    let position = u32::from(current.index() - 1);
    let span = u32::from(WizardStep::TOTAL - 1);
    (position * 100 / span) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_partition_around_the_active_step() {
        let row = progress(WizardStep::Categories);
        assert_eq!(row.len(), 7);
        assert_eq!(row[0].state, StepState::Completed);
        assert_eq!(row[2].state, StepState::Completed);
        assert_eq!(row[3].state, StepState::Active);
        assert_eq!(row[4].state, StepState::Upcoming);
        assert_eq!(row[6].state, StepState::Upcoming);
    }

    #[test]
    fn percent_spans_zero_to_hundred() {
        assert_eq!(percent_complete(WizardStep::Priority), 0);
        assert_eq!(percent_complete(WizardStep::Categories), 50);
        assert_eq!(percent_complete(WizardStep::Confirmation), 100);
    }
}
