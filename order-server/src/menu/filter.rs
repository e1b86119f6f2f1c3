//! Menu filter engine
//!
//! Pure, synchronous filtering rules. The filter is stable: input order is
//! preserved and nothing is re-sorted. An item survives only if no active
//! profile restriction maps to a true hazard flag and no calorie ceiling
//! is violated.

use shared::models::{DietaryProfile, FoodItem};
use shared::tags::{HazardFlag, Restriction};

/// Warning labels for an item, in vocabulary display order
///
/// An item with no warnings is safe for all diners.
pub fn compute_warnings(item: &FoodItem) -> Vec<&'static str> {
    HazardFlag::ALL
        .iter()
        .filter(|hazard| hazard.is_set(item))
        .map(|hazard| hazard.label())
        .collect()
}

/// True when the item triggers no warnings at all
pub fn is_safe_for_all(item: &FoodItem) -> bool {
    HazardFlag::ALL.iter().all(|hazard| !hazard.is_set(item))
}

/// Evaluate a single item against a profile
///
/// The calorie rule only applies when the item's calorie count is known;
/// restrictions without an item-side hazard (`HighProtein`) never exclude.
pub fn item_permitted(item: &FoodItem, profile: &DietaryProfile) -> bool {
    if let Some(ceiling) = profile.max_calories
        && let Some(calories) = item.calories
        && calories > ceiling
    {
        return false;
    }

    for restriction in Restriction::ALL {
        if !restriction.is_set(profile) {
            continue;
        }
        if let Some(hazard) = restriction.hazard()
            && hazard.is_set(item)
        {
            return false;
        }
    }

    true
}

/// Filter a menu for a user
///
/// `show_all` is the diagnostic override: the user explicitly opted into
/// seeing unsafe items, so the input is returned unfiltered.
pub fn filter_menu(items: Vec<FoodItem>, profile: &DietaryProfile, show_all: bool) -> Vec<FoodItem> {
    if show_all {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item_permitted(item, profile))
        .collect()
}
