//! Dietary profile repository
//!
//! One profile per user, upsert semantics. A missing profile is not an
//! error: callers fall back to the empty restriction set.

use crate::db::{CatalogStore, PROFILES_TABLE, StoreResult};
use shared::models::DietaryProfile;

/// Insert or replace the profile for `user_id`
pub fn upsert(store: &CatalogStore, user_id: &str, profile: &DietaryProfile) -> StoreResult<()> {
    store.put(PROFILES_TABLE, user_id, profile)
}

/// Point lookup; `None` for users who never filled the medical form
pub fn find(store: &CatalogStore, user_id: &str) -> StoreResult<Option<DietaryProfile>> {
    store.get(PROFILES_TABLE, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_existing_profile() {
        let store = CatalogStore::open_in_memory().unwrap();
        assert_eq!(find(&store, "user-1").unwrap(), None);

        let first = DietaryProfile {
            gluten_free: true,
            ..Default::default()
        };
        upsert(&store, "user-1", &first).unwrap();
        assert_eq!(find(&store, "user-1").unwrap(), Some(first));

        let second = DietaryProfile {
            lactose_free: true,
            max_calories: Some(700),
            ..Default::default()
        };
        upsert(&store, "user-1", &second).unwrap();
        let loaded = find(&store, "user-1").unwrap().unwrap();
        assert!(!loaded.gluten_free);
        assert!(loaded.lactose_free);
        assert_eq!(loaded.max_calories, Some(700));
    }
}
