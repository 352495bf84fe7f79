//! Recommendation math checked through the public service port.

use wizard_core::domain::{CategoryGroup, Profile};
use wizard_core::selection::CategorySelection;
use wizard_core::services::{
    RecommendationRequest, RecommendationService, RuleBasedRecommender,
};

fn request(income: f64, selection: CategorySelection) -> RecommendationRequest {
    RecommendationRequest {
        income,
        priority: "increase-savings".into(),
        profile: Profile::default(),
        selected_categories: selection,
    }
}

fn group_total(
    response: &wizard_core::services::RecommendationResponse,
    group: CategoryGroup,
) -> f64 {
    response
        .categories
        .iter()
        .filter(|entry| entry.group == group)
        .map(|entry| entry.annual())
        .sum()
}

#[test]
fn full_selection_splits_income_50_30_20() {
    let mut selection = CategorySelection::essential_defaults();
    selection.select_all();

    let response = RuleBasedRecommender
        .recommend(&request(1_200_000.0, selection))
        .expect("recommendation");

    assert!(
        (group_total(&response, CategoryGroup::Essential) - 600_000.0).abs() < 0.01,
        "essential bucket is half of income"
    );
    assert!(
        (group_total(&response, CategoryGroup::Lifestyle) - 360_000.0).abs() < 0.01,
        "lifestyle bucket is 30% of income"
    );
    assert!(
        (group_total(&response, CategoryGroup::Savings) - 240_000.0).abs() < 0.01,
        "savings bucket is 20% of income"
    );
    assert!((response.total_allocated - 1_200_000.0).abs() < 0.01);
}

#[test]
fn bucket_totals_are_exact_despite_cent_rounding() {
    let mut selection = CategorySelection::essential_defaults();
    selection.select_all();

    // An income that does not divide evenly across the weights.
    let response = RuleBasedRecommender
        .recommend(&request(77_777.77, selection))
        .expect("recommendation");

    let sum: f64 = response.categories.iter().map(|entry| entry.annual()).sum();
    assert!((sum - response.total_allocated).abs() < 0.005);
    for entry in &response.categories {
        let cents = entry.annual() * 100.0;
        assert!(
            (cents - cents.round()).abs() < 1e-6,
            "{} is not cent-aligned",
            entry.subcategory
        );
    }
}

#[test]
fn only_selected_subcategories_receive_money() {
    let mut selection = CategorySelection::essential_defaults();
    selection.deselect_all();
    selection.toggle_subcategory("Housing", "Rent/Mortgage");
    selection.toggle_subcategory("Goals", "Goal Savings");

    let response = RuleBasedRecommender
        .recommend(&request(120_000.0, selection))
        .expect("recommendation");

    assert_eq!(response.categories.len(), 2);
    let rent = &response.categories[0];
    assert_eq!(rent.subcategory, "Rent/Mortgage");
    assert!((rent.annual() - 60_000.0).abs() < 0.01, "whole essential bucket");
    let goals = &response.categories[1];
    assert_eq!(goals.subcategory, "Goal Savings");
    assert!((goals.annual() - 24_000.0).abs() < 0.01, "whole savings bucket");
    // The lifestyle 30% stays unallocated.
    assert!((response.total_allocated - 84_000.0).abs() < 0.01);
}

#[test]
fn entries_carry_group_essential_and_recurring_tags() {
    let mut selection = CategorySelection::essential_defaults();
    selection.select_all();
    let response = RuleBasedRecommender
        .recommend(&request(50_000.0, selection))
        .expect("recommendation");

    let rent = response
        .categories
        .iter()
        .find(|entry| entry.subcategory == "Rent/Mortgage")
        .expect("rent entry");
    assert_eq!(rent.group, CategoryGroup::Essential);
    assert!(rent.is_essential);
    assert!(rent.is_recurring, "rent is charged monthly");
    assert!(!rent.is_custom);

    let trips = response
        .categories
        .iter()
        .find(|entry| entry.subcategory == "Trips")
        .expect("trips entry");
    assert_eq!(trips.group, CategoryGroup::Lifestyle);
    assert!(!trips.is_essential);
    assert!(!trips.is_recurring, "trips are occasional spends");
}
