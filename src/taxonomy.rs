//! The fixed default category taxonomy.
//!
//! Three groups (Essential, Lifestyle, Savings & Goals) with fixed
//! category/subcategory templates. The `essential` flags drive default
//! selection on the category screen; the weights drive proportional
//! distribution inside each group's allocation bucket.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::CategoryGroup;

/// A subcategory template within the fixed taxonomy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubcategoryTemplate {
    pub name: &'static str,
    pub essential: bool,
    /// Charged on a regular cadence (rent, subscriptions) rather than
    /// incidentally (repairs, trips).
    pub recurring: bool,
    pub weight: f64,
}

/// A category template with its subcategories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTemplate {
    pub name: &'static str,
    pub group: CategoryGroup,
    pub is_essential: bool,
    pub subcategories: &'static [SubcategoryTemplate],
}

const fn sub(
    name: &'static str,
    essential: bool,
    recurring: bool,
    weight: f64,
) -> SubcategoryTemplate {
    SubcategoryTemplate {
        name,
        essential,
        recurring,
        weight,
    }
}

pub const DEFAULT_TAXONOMY: &[CategoryTemplate] = &[
    CategoryTemplate {
        name: "Housing",
        group: CategoryGroup::Essential,
        is_essential: true,
        subcategories: &[
            sub("Rent/Mortgage", true, true, 3.0),
            sub("Utilities", true, true, 1.0),
            sub("Home Maintenance", false, false, 0.5),
        ],
    },
    CategoryTemplate {
        name: "Food",
        group: CategoryGroup::Essential,
        is_essential: true,
        subcategories: &[
            sub("Groceries", true, true, 2.0),
            sub("Dining Out", false, true, 1.0),
        ],
    },
    CategoryTemplate {
        name: "Transportation",
        group: CategoryGroup::Essential,
        is_essential: true,
        subcategories: &[
            sub("Fuel & Transit", true, true, 1.0),
            sub("Vehicle Maintenance", false, false, 0.5),
            sub("Insurance", true, true, 1.0),
        ],
    },
    CategoryTemplate {
        name: "Health",
        group: CategoryGroup::Essential,
        is_essential: true,
        subcategories: &[
            sub("Medical", true, false, 1.0),
            sub("Pharmacy", true, true, 0.5),
            sub("Fitness", false, true, 0.5),
        ],
    },
    CategoryTemplate {
        name: "Entertainment",
        group: CategoryGroup::Lifestyle,
        is_essential: false,
        subcategories: &[
            sub("Streaming & Media", false, true, 1.0),
            sub("Events & Hobbies", false, false, 1.0),
        ],
    },
    CategoryTemplate {
        name: "Personal",
        group: CategoryGroup::Lifestyle,
        is_essential: false,
        subcategories: &[
            sub("Clothing", false, false, 1.0),
            sub("Personal Care", false, true, 1.0),
        ],
    },
    CategoryTemplate {
        name: "Travel",
        group: CategoryGroup::Lifestyle,
        is_essential: false,
        subcategories: &[
            sub("Trips", false, false, 1.5),
            sub("Commuting Extras", false, true, 0.5),
        ],
    },
    CategoryTemplate {
        name: "Emergency Fund",
        group: CategoryGroup::Savings,
        is_essential: true,
        subcategories: &[sub("Emergency Fund", true, true, 1.0)],
    },
    CategoryTemplate {
        name: "Retirement",
        group: CategoryGroup::Savings,
        is_essential: true,
        subcategories: &[sub("Retirement Contributions", true, true, 1.5)],
    },
    CategoryTemplate {
        name: "Goals",
        group: CategoryGroup::Savings,
        is_essential: true,
        subcategories: &[sub("Goal Savings", true, true, 1.0)],
    },
];

static CATEGORY_INDEX: Lazy<HashMap<&'static str, &'static CategoryTemplate>> = Lazy::new(|| {
    DEFAULT_TAXONOMY
        .iter()
        .map(|template| (template.name, template))
        .collect()
});

/// Looks a category template up by name.
pub fn find_category(name: &str) -> Option<&'static CategoryTemplate> {
    CATEGORY_INDEX.get(name).copied()
}

/// Looks a subcategory template up within a named category.
pub fn find_subcategory(
    category: &str,
    subcategory: &str,
) -> Option<(&'static CategoryTemplate, &'static SubcategoryTemplate)> {
    let template = find_category(category)?;
    template
        .subcategories
        .iter()
        .find(|sub| sub.name == subcategory)
        .map(|sub| (template, sub))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_group_is_represented() {
        for group in [
            CategoryGroup::Essential,
            CategoryGroup::Lifestyle,
            CategoryGroup::Savings,
        ] {
            assert!(
                DEFAULT_TAXONOMY.iter().any(|t| t.group == group),
                "missing group {group}"
            );
        }
    }

    #[test]
    fn essential_categories_have_an_essential_subcategory() {
        for template in DEFAULT_TAXONOMY.iter().filter(|t| t.is_essential) {
            assert!(
                template.subcategories.iter().any(|s| s.essential),
                "{} has no essential subcategory",
                template.name
            );
        }
    }

    #[test]
    fn lookup_finds_known_pairs() {
        assert!(find_category("Housing").is_some());
        assert!(find_subcategory("Housing", "Utilities").is_some());
        assert!(find_subcategory("Housing", "Groceries").is_none());
        assert!(find_category("Nope").is_none());
    }
}
