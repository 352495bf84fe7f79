//! Income sources collected on the second screen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::budget::MONTHS_PER_YEAR;

/// How often an income amount recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Annual,
}

/// A single stream of income as the user entered it.
///
/// The stored amount is never mutated by frequency changes; conversion to an
/// annual figure happens only at computation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default)]
    pub kind: String,
}

impl IncomeSource {
    pub fn new(name: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            frequency,
            kind: "salary".into(),
        }
    }

    /// The amount expressed per year.
    pub fn annualized(&self) -> f64 {
        match self.frequency {
            Frequency::Monthly => self.amount * MONTHS_PER_YEAR,
            Frequency::Annual => self.amount,
        }
    }

    /// A source counts toward the budget only with a name and a positive amount.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.amount > 0.0
    }
}

/// Annualized sum over every source, valid or not.
pub fn total_annual_income(sources: &[IncomeSource]) -> f64 {
    sources.iter().map(IncomeSource::annualized).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annualizes_by_frequency() {
        let monthly = IncomeSource::new("Job", 100_000.0, Frequency::Monthly);
        let annual = IncomeSource::new("Bonus", 50_000.0, Frequency::Annual);
        assert_eq!(monthly.annualized(), 1_200_000.0);
        assert_eq!(annual.annualized(), 50_000.0);
        assert_eq!(total_annual_income(&[monthly, annual]), 1_250_000.0);
    }

    #[test]
    fn validity_requires_name_and_positive_amount() {
        assert!(!IncomeSource::new("  ", 500.0, Frequency::Monthly).is_valid());
        assert!(!IncomeSource::new("Job", 0.0, Frequency::Monthly).is_valid());
        assert!(!IncomeSource::new("Job", -1.0, Frequency::Annual).is_valid());
        assert!(IncomeSource::new("Job", 1.0, Frequency::Annual).is_valid());
    }
}
