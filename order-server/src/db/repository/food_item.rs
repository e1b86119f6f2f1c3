//! Food item repository

use crate::db::{CatalogStore, FOOD_ITEMS_TABLE, StoreResult};
use shared::models::{FoodItem, FoodItemCreate};

/// Insert a new item owned by `restaurant_id`
///
/// The store assigns the ID; items enter the catalog visible (`allowed`),
/// matching the creation flow where the restaurant publishes directly.
pub fn insert(store: &CatalogStore, restaurant_id: &str, payload: FoodItemCreate) -> StoreResult<FoodItem> {
    let item = FoodItem {
        id: uuid::Uuid::new_v4().to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: payload.name,
        description: payload.description,
        ingredients: payload.ingredients,
        price: payload.price,
        calories: payload.calories,
        contains_gluten: payload.contains_gluten,
        contains_lactose: payload.contains_lactose,
        nut_allergy: payload.nut_allergy,
        cholesterol_risk: payload.cholesterol_risk,
        diabetes_risk: payload.diabetes_risk,
        hypertension_risk: payload.hypertension_risk,
        high_carb: payload.high_carb,
        high_fat: payload.high_fat,
        allowed: true,
    };
    store.put(FOOD_ITEMS_TABLE, &item.id, &item)?;
    Ok(item)
}

/// Point lookup
pub fn find(store: &CatalogStore, item_id: &str) -> StoreResult<Option<FoodItem>> {
    store.get(FOOD_ITEMS_TABLE, item_id)
}

/// Catalog of a restaurant as customers see it: `allowed` items only,
/// sorted by name for a stable listing
pub fn list_menu(store: &CatalogStore, restaurant_id: &str) -> StoreResult<Vec<FoodItem>> {
    let mut items: Vec<FoodItem> = store
        .scan(FOOD_ITEMS_TABLE)?
        .into_iter()
        .filter(|item: &FoodItem| item.restaurant_id == restaurant_id && item.allowed)
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(items)
}
