//! Dietary tag vocabulary
//!
//! The fixed set of dietary/health attributes shared between food items
//! and user profiles. Items carry one boolean hazard flag per vocabulary
//! entry; profiles carry restriction flags that map onto hazards through
//! a single declarative correspondence table ([`Restriction::hazard`]).

use crate::models::{DietaryProfile, FoodItem};
use serde::{Deserialize, Serialize};

/// Item-side hazard attribute
///
/// Declaration order is the display order of menu warnings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardFlag {
    Gluten,
    Lactose,
    NutAllergy,
    Cholesterol,
    Diabetes,
    Hypertension,
    HighCarb,
    HighFat,
}

impl HazardFlag {
    /// All hazards, in warning display order
    pub const ALL: [HazardFlag; 8] = [
        HazardFlag::Gluten,
        HazardFlag::Lactose,
        HazardFlag::NutAllergy,
        HazardFlag::Cholesterol,
        HazardFlag::Diabetes,
        HazardFlag::Hypertension,
        HazardFlag::HighCarb,
        HazardFlag::HighFat,
    ];

    /// Human-readable warning label
    pub fn label(self) -> &'static str {
        match self {
            Self::Gluten => "Gluten",
            Self::Lactose => "Lactose",
            Self::NutAllergy => "Nuts",
            Self::Cholesterol => "High Cholesterol",
            Self::Diabetes => "High Sugar",
            Self::Hypertension => "High Sodium",
            Self::HighCarb => "Not Low Carb",
            Self::HighFat => "High Fat",
        }
    }

    /// Read this hazard's flag from an item
    pub fn is_set(self, item: &FoodItem) -> bool {
        match self {
            Self::Gluten => item.contains_gluten,
            Self::Lactose => item.contains_lactose,
            Self::NutAllergy => item.nut_allergy,
            Self::Cholesterol => item.cholesterol_risk,
            Self::Diabetes => item.diabetes_risk,
            Self::Hypertension => item.hypertension_risk,
            Self::HighCarb => item.high_carb,
            Self::HighFat => item.high_fat,
        }
    }
}

/// Profile-side restriction attribute
///
/// `max_calories` is not part of this enum: the calorie ceiling is a
/// threshold on the profile itself, not a boolean flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Restriction {
    Diabetes,
    GlutenFree,
    NutAllergy,
    LactoseFree,
    Hypertension,
    Cholesterol,
    LowCarb,
    HighProtein,
    LowFat,
}

impl Restriction {
    /// All restrictions
    pub const ALL: [Restriction; 9] = [
        Restriction::Diabetes,
        Restriction::GlutenFree,
        Restriction::NutAllergy,
        Restriction::LactoseFree,
        Restriction::Hypertension,
        Restriction::Cholesterol,
        Restriction::LowCarb,
        Restriction::HighProtein,
        Restriction::LowFat,
    ];

    /// Item hazard this restriction forbids
    ///
    /// `HighProtein` is a dietary goal with no item-side hazard flag and
    /// never excludes an item.
    pub fn hazard(self) -> Option<HazardFlag> {
        match self {
            Self::Diabetes => Some(HazardFlag::Diabetes),
            Self::GlutenFree => Some(HazardFlag::Gluten),
            Self::NutAllergy => Some(HazardFlag::NutAllergy),
            Self::LactoseFree => Some(HazardFlag::Lactose),
            Self::Hypertension => Some(HazardFlag::Hypertension),
            Self::Cholesterol => Some(HazardFlag::Cholesterol),
            Self::LowCarb => Some(HazardFlag::HighCarb),
            Self::HighProtein => None,
            Self::LowFat => Some(HazardFlag::HighFat),
        }
    }

    /// Read this restriction's flag from a profile
    pub fn is_set(self, profile: &DietaryProfile) -> bool {
        match self {
            Self::Diabetes => profile.diabetes,
            Self::GlutenFree => profile.gluten_free,
            Self::NutAllergy => profile.nut_allergy,
            Self::LactoseFree => profile.lactose_free,
            Self::Hypertension => profile.hypertension,
            Self::Cholesterol => profile.cholesterol,
            Self::LowCarb => profile.low_carb,
            Self::HighProtein => profile.high_protein,
            Self::LowFat => profile.low_fat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_diabetes_to_diabetes_hazard() {
        assert_eq!(Restriction::Diabetes.hazard(), Some(HazardFlag::Diabetes));
    }

    #[test]
    fn maps_gluten_free_to_gluten() {
        assert_eq!(Restriction::GlutenFree.hazard(), Some(HazardFlag::Gluten));
    }

    #[test]
    fn maps_nut_allergy_to_nut_allergy() {
        assert_eq!(
            Restriction::NutAllergy.hazard(),
            Some(HazardFlag::NutAllergy)
        );
    }

    #[test]
    fn maps_lactose_free_to_lactose() {
        assert_eq!(
            Restriction::LactoseFree.hazard(),
            Some(HazardFlag::Lactose)
        );
    }

    #[test]
    fn maps_hypertension_to_hypertension_hazard() {
        assert_eq!(
            Restriction::Hypertension.hazard(),
            Some(HazardFlag::Hypertension)
        );
    }

    #[test]
    fn maps_cholesterol_to_cholesterol_hazard() {
        assert_eq!(
            Restriction::Cholesterol.hazard(),
            Some(HazardFlag::Cholesterol)
        );
    }

    #[test]
    fn maps_low_carb_to_high_carb() {
        assert_eq!(Restriction::LowCarb.hazard(), Some(HazardFlag::HighCarb));
    }

    #[test]
    fn maps_low_fat_to_high_fat() {
        assert_eq!(Restriction::LowFat.hazard(), Some(HazardFlag::HighFat));
    }

    #[test]
    fn high_protein_has_no_item_hazard() {
        assert_eq!(Restriction::HighProtein.hazard(), None);
    }

    #[test]
    fn warning_labels_in_display_order() {
        let labels: Vec<&str> = HazardFlag::ALL.iter().map(|h| h.label()).collect();
        assert_eq!(
            labels,
            [
                "Gluten",
                "Lactose",
                "Nuts",
                "High Cholesterol",
                "High Sugar",
                "High Sodium",
                "Not Low Carb",
                "High Fat",
            ]
        );
    }

    #[test]
    fn hazard_flags_read_from_item_fields() {
        let mut item = FoodItem::default();
        for hazard in HazardFlag::ALL {
            assert!(!hazard.is_set(&item));
        }
        item.contains_gluten = true;
        item.high_fat = true;
        assert!(HazardFlag::Gluten.is_set(&item));
        assert!(HazardFlag::HighFat.is_set(&item));
        assert!(!HazardFlag::Lactose.is_set(&item));
    }

    #[test]
    fn restriction_flags_read_from_profile_fields() {
        let mut profile = DietaryProfile::default();
        for restriction in Restriction::ALL {
            assert!(!restriction.is_set(&profile));
        }
        profile.lactose_free = true;
        profile.high_protein = true;
        assert!(Restriction::LactoseFree.is_set(&profile));
        assert!(Restriction::HighProtein.is_set(&profile));
        assert!(!Restriction::GlutenFree.is_set(&profile));
    }
}
