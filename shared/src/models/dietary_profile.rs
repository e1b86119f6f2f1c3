//! Dietary Profile Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dietary/medical profile, keyed by user ID (one per user, upserted)
///
/// `Default` is the empty restriction set: a user without a stored profile
/// behaves exactly like a profile with every flag off, so every item is
/// trivially safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct DietaryProfile {
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub nut_allergy: bool,
    #[serde(default)]
    pub lactose_free: bool,
    #[serde(default)]
    pub hypertension: bool,
    #[serde(default)]
    pub cholesterol: bool,
    #[serde(default)]
    pub low_carb: bool,
    #[serde(default)]
    pub high_protein: bool,
    #[serde(default)]
    pub low_fat: bool,
    /// Per-meal calorie ceiling
    #[serde(default)]
    #[validate(range(min = 1, message = "calorie ceiling must be positive"))]
    pub max_calories: Option<u32>,
}

impl DietaryProfile {
    /// True when no restriction flag is set and no calorie ceiling applies
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }
}
