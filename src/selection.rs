//! Category/subcategory selection state and its toggle rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::taxonomy::{self, DEFAULT_TAXONOMY};

/// Selection flags for one category and its subcategories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChoice {
    pub selected: bool,
    pub subcategories: BTreeMap<String, bool>,
}

impl CategoryChoice {
    fn any_subcategory_selected(&self) -> bool {
        self.subcategories.values().any(|on| *on)
    }
}

/// Which categories and subcategories the user wants to budget, keyed by the
/// taxonomy's category names. Ordered maps keep serialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    categories: BTreeMap<String, CategoryChoice>,
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self::essential_defaults()
    }
}

impl CategorySelection {
    /// The default state: essential categories selected, with only their
    /// essential subcategories on. Every taxonomy entry is present either way.
    pub fn essential_defaults() -> Self {
        let mut categories = BTreeMap::new();
        for template in DEFAULT_TAXONOMY {
            let subcategories = template
                .subcategories
                .iter()
                .map(|sub| {
                    (
                        sub.name.to_string(),
                        template.is_essential && sub.essential,
                    )
                })
                .collect::<BTreeMap<_, _>>();
            categories.insert(
                template.name.to_string(),
                CategoryChoice {
                    selected: template.is_essential,
                    subcategories,
                },
            );
        }
        Self { categories }
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.categories
            .get(category)
            .map(|choice| choice.selected)
            .unwrap_or(false)
    }

    pub fn is_subcategory_selected(&self, category: &str, subcategory: &str) -> bool {
        self.categories
            .get(category)
            .and_then(|choice| choice.subcategories.get(subcategory))
            .copied()
            .unwrap_or(false)
    }

    /// Flips a category. Deselecting clears every subcategory; selecting turns
    /// on only the essential subcategories (non-essential ones stay off).
    pub fn toggle_category(&mut self, category: &str) {
        let Some(choice) = self.categories.get_mut(category) else {
            return;
        };
        if choice.selected {
            choice.selected = false;
            for flag in choice.subcategories.values_mut() {
                *flag = false;
            }
        } else {
            choice.selected = true;
            for (name, flag) in choice.subcategories.iter_mut() {
                *flag = taxonomy::find_subcategory(category, name)
                    .map(|(_, sub)| sub.essential)
                    .unwrap_or(false);
            }
        }
    }

    /// Flips one subcategory and re-derives the parent's `selected` flag as
    /// the OR of its subcategory flags.
    pub fn toggle_subcategory(&mut self, category: &str, subcategory: &str) {
        let Some(choice) = self.categories.get_mut(category) else {
            return;
        };
        let Some(flag) = choice.subcategories.get_mut(subcategory) else {
            return;
        };
        *flag = !*flag;
        choice.selected = choice.any_subcategory_selected();
    }

    /// Resets to the essential-only default.
    pub fn essential_only(&mut self) {
        *self = Self::essential_defaults();
    }

    pub fn select_all(&mut self) {
        for choice in self.categories.values_mut() {
            choice.selected = true;
            for flag in choice.subcategories.values_mut() {
                *flag = true;
            }
        }
    }

    pub fn deselect_all(&mut self) {
        for choice in self.categories.values_mut() {
            choice.selected = false;
            for flag in choice.subcategories.values_mut() {
                *flag = false;
            }
        }
    }

    /// Proceeding requires at least one category and one subcategory on.
    pub fn is_valid(&self) -> bool {
        self.selected_category_count() >= 1 && self.selected_subcategory_count() >= 1
    }

    pub fn selected_category_count(&self) -> usize {
        self.categories.values().filter(|c| c.selected).count()
    }

    pub fn selected_subcategory_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|c| c.subcategories.values())
            .filter(|on| **on)
            .count()
    }

    /// Iterates (category, subcategory) pairs currently selected.
    pub fn selected_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|(category, choice)| {
            choice
                .subcategories
                .iter()
                .filter(|(_, on)| **on)
                .map(move |(subcategory, _)| (category.as_str(), subcategory.as_str()))
        })
    }

    /// Names of categories whose `selected` flag is on.
    pub fn selected_categories(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter(|(_, choice)| choice.selected)
            .map(|(name, _)| name.as_str())
    }
}
