//! Food Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Food item entity
///
/// Hazard flags default to `false` on deserialization, so records written
/// before a vocabulary entry existed read as "not hazardous" rather than
/// failing at the store boundary. `calories` stays optional: an unknown
/// calorie count must never trip the calorie ceiling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Store-assigned ID
    pub id: String,
    /// Owning restaurant (String ID)
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Price in currency unit
    pub price: f64,
    /// Estimated calories for the full meal
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub contains_gluten: bool,
    #[serde(default)]
    pub contains_lactose: bool,
    #[serde(default)]
    pub nut_allergy: bool,
    #[serde(default)]
    pub cholesterol_risk: bool,
    #[serde(default)]
    pub diabetes_risk: bool,
    #[serde(default)]
    pub hypertension_risk: bool,
    #[serde(default)]
    pub high_carb: bool,
    #[serde(default)]
    pub high_fat: bool,
    /// Restaurant-set visibility flag; non-approved items are never surfaced
    #[serde(default)]
    pub allowed: bool,
}

/// Create food item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FoodItemCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
    #[validate(range(min = 1, message = "calories must be positive"))]
    pub calories: Option<u32>,
    #[serde(default)]
    pub contains_gluten: bool,
    #[serde(default)]
    pub contains_lactose: bool,
    #[serde(default)]
    pub nut_allergy: bool,
    #[serde(default)]
    pub cholesterol_risk: bool,
    #[serde(default)]
    pub diabetes_risk: bool,
    #[serde(default)]
    pub hypertension_risk: bool,
    #[serde(default)]
    pub high_carb: bool,
    #[serde(default)]
    pub high_fat: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_hazard_flags_deserialize_as_false() {
        let json = r#"{
            "id": "item-1",
            "restaurant_id": "rest-1",
            "name": "Pad Thai",
            "description": "Rice noodles with peanut sauce",
            "ingredients": ["noodles", "peanuts"],
            "price": 11.5
        }"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert!(!item.contains_gluten);
        assert!(!item.nut_allergy);
        assert!(!item.allowed);
        assert_eq!(item.calories, None);
    }

    #[test]
    fn create_payload_rejects_negative_price() {
        let payload = FoodItemCreate {
            name: "Soup".to_string(),
            description: "Tomato soup".to_string(),
            ingredients: vec![],
            price: -1.0,
            calories: Some(200),
            contains_gluten: false,
            contains_lactose: false,
            nut_allergy: false,
            cholesterol_risk: false,
            diabetes_risk: false,
            hypertension_risk: false,
            high_carb: false,
            high_fat: false,
        };
        assert!(validator::Validate::validate(&payload).is_err());
    }

    #[test]
    fn create_payload_rejects_zero_calories() {
        let payload = FoodItemCreate {
            name: "Soup".to_string(),
            description: "Tomato soup".to_string(),
            ingredients: vec![],
            price: 4.5,
            calories: Some(0),
            contains_gluten: false,
            contains_lactose: false,
            nut_allergy: false,
            cholesterol_risk: false,
            diabetes_risk: false,
            hypertension_risk: false,
            high_carb: false,
            high_fat: false,
        };
        assert!(validator::Validate::validate(&payload).is_err());
    }
}
