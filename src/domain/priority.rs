//! The user's stated budgeting priority, captured on the first screen.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Fixed priorities the first screen offers alongside a free-text option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetPriority {
    LiveWithinMeans,
    IncreaseSavings,
    DetailedTracking,
    HealthyLifestyle,
    ResponsibleSpending,
    SpecificGoal,
}

impl PresetPriority {
    pub const ALL: [PresetPriority; 6] = [
        PresetPriority::LiveWithinMeans,
        PresetPriority::IncreaseSavings,
        PresetPriority::DetailedTracking,
        PresetPriority::HealthyLifestyle,
        PresetPriority::ResponsibleSpending,
        PresetPriority::SpecificGoal,
    ];

    /// Stable identifier shared with downstream consumers.
    pub fn id(self) -> &'static str {
        match self {
            PresetPriority::LiveWithinMeans => "live-within-means",
            PresetPriority::IncreaseSavings => "increase-savings",
            PresetPriority::DetailedTracking => "detailed-tracking",
            PresetPriority::HealthyLifestyle => "healthy-lifestyle",
            PresetPriority::ResponsibleSpending => "responsible-spending",
            PresetPriority::SpecificGoal => "specific-goal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PresetPriority::LiveWithinMeans => "Live within my means",
            PresetPriority::IncreaseSavings => "Increase my savings",
            PresetPriority::DetailedTracking => "Track spending in detail",
            PresetPriority::HealthyLifestyle => "Support a healthy lifestyle",
            PresetPriority::ResponsibleSpending => "Spend more responsibly",
            PresetPriority::SpecificGoal => "Save for a specific goal",
        }
    }

    pub fn from_id(id: &str) -> Option<PresetPriority> {
        Self::ALL.into_iter().find(|preset| preset.id() == id)
    }
}

/// A preset priority or the user's own words.
///
/// Downstream consumers (persisted sessions, collaborator payloads) always see
/// a single plain string: preset ids round-trip as themselves and anything
/// else round-trips as custom text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    Preset(PresetPriority),
    Custom(String),
}

impl Priority {
    /// Parses raw input into a priority; whitespace-only text yields `None`.
    pub fn parse(raw: &str) -> Option<Priority> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match PresetPriority::from_id(trimmed) {
            Some(preset) => Priority::Preset(preset),
            None => Priority::Custom(trimmed.to_string()),
        })
    }

    /// The single-string form of the external contract.
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Preset(preset) => preset.id(),
            Priority::Custom(text) => text,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Priority::Custom(_))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Priority::parse(&raw)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&raw), &"a non-empty priority string"))
    }
}
