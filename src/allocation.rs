//! Rule-based budget recommendation.
//!
//! Partitions annual income 50/30/20 across the Essential, Lifestyle, and
//! Savings & Goals groups, then distributes each bucket over the selected
//! subcategories in that group, proportionally to the taxonomy weights.

use crate::domain::{BudgetEntry, CategoryGroup};
use crate::selection::CategorySelection;
use crate::taxonomy;

pub const ESSENTIAL_SHARE: f64 = 0.50;
pub const LIFESTYLE_SHARE: f64 = 0.30;
pub const SAVINGS_SHARE: f64 = 0.20;

/// A computed starting budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub categories: Vec<BudgetEntry>,
    pub total_allocated: f64,
}

/// Income share assigned to a group's bucket.
pub fn group_share(group: CategoryGroup) -> f64 {
    match group {
        CategoryGroup::Essential => ESSENTIAL_SHARE,
        CategoryGroup::Lifestyle => LIFESTYLE_SHARE,
        CategoryGroup::Savings => SAVINGS_SHARE,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the recommended allocation for the given income and selection.
///
/// Each bucket's total is spread over the subcategories selected within it.
/// A bucket with no selected subcategory allocates nothing; its share is
/// simply absent from `total_allocated`. Amounts are rounded to cents, with
/// the final entry of each bucket absorbing the rounding remainder so bucket
/// totals come out exact.
pub fn recommend(total_annual_income: f64, selection: &CategorySelection) -> Recommendation {
    let mut categories = Vec::new();
    let mut total_allocated = 0.0;

    for group in [
        CategoryGroup::Essential,
        CategoryGroup::Lifestyle,
        CategoryGroup::Savings,
    ] {
        let picks: Vec<_> = selection
            .selected_pairs()
            .filter_map(|(category, subcategory)| {
                taxonomy::find_subcategory(category, subcategory)
                    .filter(|(template, _)| template.group == group)
            })
            .collect();
        let weight_sum: f64 = picks.iter().map(|(_, sub)| sub.weight).sum();
        if picks.is_empty() || weight_sum <= 0.0 {
            continue;
        }

        let bucket_total = round_cents(total_annual_income * group_share(group));
        let mut distributed = 0.0;
        let last = picks.len() - 1;
        for (position, (template, sub)) in picks.iter().enumerate() {
            let annual = if position == last {
                round_cents(bucket_total - distributed)
            } else {
                round_cents(bucket_total * sub.weight / weight_sum)
            };
            distributed += annual;
            categories.push(
                BudgetEntry::new(template.name, sub.name, group, template.is_essential)
                    .with_recurring(sub.recurring)
                    .with_annual(annual),
            );
        }
        total_allocated += distributed;
    }

    Recommendation {
        categories,
        total_allocated: round_cents(total_allocated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::CategorySelection;

    fn group_total(recommendation: &Recommendation, group: CategoryGroup) -> f64 {
        recommendation
            .categories
            .iter()
            .filter(|entry| entry.group == group)
            .map(|entry| entry.annual())
            .sum()
    }

    #[test]
    fn buckets_follow_the_50_30_20_split() {
        let mut selection = CategorySelection::essential_defaults();
        // Bring a lifestyle pick in so all three buckets participate.
        selection.toggle_subcategory("Entertainment", "Streaming & Media");

        let recommendation = recommend(1_200_000.0, &selection);
        assert!((group_total(&recommendation, CategoryGroup::Essential) - 600_000.0).abs() < 0.01);
        assert!((group_total(&recommendation, CategoryGroup::Lifestyle) - 360_000.0).abs() < 0.01);
        assert!((group_total(&recommendation, CategoryGroup::Savings) - 240_000.0).abs() < 0.01);
        assert!((recommendation.total_allocated - 1_200_000.0).abs() < 0.01);
    }

    #[test]
    fn distribution_is_weight_proportional() {
        let mut selection = CategorySelection::essential_defaults();
        selection.deselect_all();
        selection.toggle_subcategory("Housing", "Rent/Mortgage"); // weight 3.0
        selection.toggle_subcategory("Housing", "Utilities"); // weight 1.0

        let recommendation = recommend(100_000.0, &selection);
        let rent = recommendation
            .categories
            .iter()
            .find(|e| e.subcategory == "Rent/Mortgage")
            .expect("rent entry");
        let utilities = recommendation
            .categories
            .iter()
            .find(|e| e.subcategory == "Utilities")
            .expect("utilities entry");
        assert!((rent.annual() - 37_500.0).abs() < 0.01);
        assert!((utilities.annual() - 12_500.0).abs() < 0.01);
    }

    #[test]
    fn empty_bucket_allocates_nothing() {
        let selection = CategorySelection::essential_defaults();
        // Defaults select no lifestyle subcategory.
        let recommendation = recommend(1_200_000.0, &selection);
        assert_eq!(group_total(&recommendation, CategoryGroup::Lifestyle), 0.0);
        assert!((recommendation.total_allocated - 840_000.0).abs() < 0.01);
    }

    #[test]
    fn entries_keep_monthly_and_annual_in_sync() {
        let selection = CategorySelection::essential_defaults();
        let recommendation = recommend(60_000.0, &selection);
        for entry in &recommendation.categories {
            assert!(
                (entry.annual() - entry.monthly() * 12.0).abs() < 1e-9,
                "{} out of sync",
                entry.subcategory
            );
        }
    }

    #[test]
    fn nothing_selected_yields_an_empty_recommendation() {
        let mut selection = CategorySelection::essential_defaults();
        selection.deselect_all();
        let recommendation = recommend(50_000.0, &selection);
        assert!(recommendation.categories.is_empty());
        assert_eq!(recommendation.total_allocated, 0.0);
    }
}
