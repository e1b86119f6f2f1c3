//! User account repository

use crate::db::{CatalogStore, StoreResult, USERS_TABLE};
use shared::models::UserAccount;

/// Insert or replace an account record
pub fn insert(store: &CatalogStore, account: &UserAccount) -> StoreResult<()> {
    store.put(USERS_TABLE, &account.id, account)
}

/// Point lookup
pub fn find(store: &CatalogStore, user_id: &str) -> StoreResult<Option<UserAccount>> {
    store.get(USERS_TABLE, user_id)
}

/// Update the owner-editable delivery address
///
/// Returns the updated record, or `None` when the account does not exist.
pub fn update_address(
    store: &CatalogStore,
    user_id: &str,
    address: &str,
) -> StoreResult<Option<UserAccount>> {
    let Some(mut account) = find(store, user_id)? else {
        return Ok(None);
    };
    account.address = Some(address.to_string());
    store.put(USERS_TABLE, user_id, &account)?;
    Ok(Some(account))
}
