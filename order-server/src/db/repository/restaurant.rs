//! Restaurant directory repository

use crate::db::{CatalogStore, RESTAURANTS_TABLE, StoreResult};
use shared::models::Restaurant;

/// Insert or replace a directory entry
pub fn insert(store: &CatalogStore, restaurant: &Restaurant) -> StoreResult<()> {
    store.put(RESTAURANTS_TABLE, &restaurant.id, restaurant)
}

/// Point lookup
pub fn find(store: &CatalogStore, restaurant_id: &str) -> StoreResult<Option<Restaurant>> {
    store.get(RESTAURANTS_TABLE, restaurant_id)
}

/// Directory as customers see it: approved entries only, sorted by name
pub fn list_approved(store: &CatalogStore) -> StoreResult<Vec<Restaurant>> {
    let mut restaurants: Vec<Restaurant> = store
        .scan(RESTAURANTS_TABLE)?
        .into_iter()
        .filter(|r: &Restaurant| r.approved)
        .collect();
    restaurants.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(restaurants)
}
