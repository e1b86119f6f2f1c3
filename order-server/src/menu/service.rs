//! Menu service
//!
//! Store-backed host for the filter engine: loads the diner's profile and
//! the restaurant catalog, filters, and attaches display warnings.

use crate::db::{CatalogStore, repository};
use crate::menu::filter::{compute_warnings, filter_menu, is_safe_for_all};
use shared::AppResult;
use shared::models::FoodItem;
use std::sync::Arc;

/// One menu row: the item plus its diagnostic labels
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub item: FoodItem,
    /// Warning labels in vocabulary order; empty means safe for all
    pub warnings: Vec<&'static str>,
    pub safe_for_all: bool,
}

/// Read-side menu assembly
#[derive(Debug, Clone)]
pub struct MenuService {
    catalog: Arc<CatalogStore>,
}

impl MenuService {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Menu of `restaurant_id` as seen by `user_id`
    ///
    /// A user without a stored profile gets the empty restriction set, so
    /// everything is shown. `show_all` bypasses filtering but still
    /// attaches warnings.
    pub fn menu_for(
        &self,
        user_id: &str,
        restaurant_id: &str,
        show_all: bool,
    ) -> AppResult<Vec<MenuEntry>> {
        let profile = repository::profile::find(&self.catalog, user_id)?.unwrap_or_default();
        let items = repository::food_item::list_menu(&self.catalog, restaurant_id)?;
        let total = items.len();

        let entries: Vec<MenuEntry> = filter_menu(items, &profile, show_all)
            .into_iter()
            .map(|item| {
                let warnings = compute_warnings(&item);
                let safe_for_all = is_safe_for_all(&item);
                MenuEntry {
                    item,
                    warnings,
                    safe_for_all,
                }
            })
            .collect();

        tracing::debug!(
            user_id = %user_id,
            restaurant_id = %restaurant_id,
            show_all,
            total,
            shown = entries.len(),
            "Menu assembled"
        );
        Ok(entries)
    }
}
