//! Optional demographic capture from the third screen.

use serde::{Deserialize, Serialize};

/// Free-form demographic attributes. Every field is optional; nothing here
/// gates navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub living_situation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub dependents: u32,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        self.age_range.is_none()
            && self.living_situation.is_none()
            && self.life_stage.is_none()
            && self.location.is_none()
            && self.dependents == 0
    }
}

/// Coerces free-form dependent-count input to a non-negative integer.
/// Anything unparseable or negative becomes 0.
pub fn coerce_dependents(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}
