//! The seven wizard screens and their ordering.

use serde::{Deserialize, Serialize};

/// One of the seven wizard screens, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    Priority,
    Income,
    Profile,
    Categories,
    Recommendation,
    Review,
    Confirmation,
}

impl WizardStep {
    pub const TOTAL: u8 = 7;

    pub const ALL: [WizardStep; 7] = [
        WizardStep::Priority,
        WizardStep::Income,
        WizardStep::Profile,
        WizardStep::Categories,
        WizardStep::Recommendation,
        WizardStep::Review,
        WizardStep::Confirmation,
    ];

    /// 1-based position within the flow.
    pub fn index(self) -> u8 {
        match self {
            WizardStep::Priority => 1,
            WizardStep::Income => 2,
            WizardStep::Profile => 3,
            WizardStep::Categories => 4,
            WizardStep::Recommendation => 5,
            WizardStep::Review => 6,
            WizardStep::Confirmation => 7,
        }
    }

    /// Resolves a 1-based index, clamping out-of-range values into [1, 7].
    pub fn from_index(index: u8) -> WizardStep {
        let clamped = index.clamp(1, Self::TOTAL);
        Self::ALL[(clamped - 1) as usize]
    }

    /// The following step, saturating at the terminal screen.
    pub fn next(self) -> WizardStep {
        Self::from_index(self.index().saturating_add(1))
    }

    /// The preceding step, saturating at the first screen.
    pub fn previous(self) -> WizardStep {
        Self::from_index(self.index().saturating_sub(1))
    }

    pub fn is_first(self) -> bool {
        self == WizardStep::Priority
    }

    pub fn is_terminal(self) -> bool {
        self == WizardStep::Confirmation
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Priority => "Priority",
            WizardStep::Income => "Income",
            WizardStep::Profile => "About You",
            WizardStep::Categories => "Categories",
            WizardStep::Recommendation => "Recommendation",
            WizardStep::Review => "Review",
            WizardStep::Confirmation => "Confirm",
        }
    }
}
