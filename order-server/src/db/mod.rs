//! Embedded catalog store
//!
//! redb-backed document store for everything outside the order log. All
//! records cross this boundary as explicit schemas; the engines never see
//! loosely-typed maps.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `food_items` | `item_id` | `FoodItem` | Menu catalog |
//! | `profiles` | `user_id` | `DietaryProfile` | Dietary profiles (upsert) |
//! | `users` | `user_id` | `UserAccount` | Account records |
//! | `restaurants` | `restaurant_id` | `Restaurant` | Restaurant directory |

pub mod repository;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::AppError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for food items: key = item_id, value = JSON-serialized FoodItem
const FOOD_ITEMS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("food_items");

/// Table for dietary profiles: key = user_id, value = JSON-serialized DietaryProfile
const PROFILES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("profiles");

/// Table for user accounts: key = user_id, value = JSON-serialized UserAccount
const USERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Table for restaurants: key = restaurant_id, value = JSON-serialized Restaurant
const RESTAURANTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("restaurants");

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Catalog store error");
        AppError::database(err.to_string())
    }
}

/// Catalog store backed by redb
#[derive(Clone)]
pub struct CatalogStore {
    db: Arc<Database>,
}

impl CatalogStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    fn init_tables(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(FOOD_ITEMS_TABLE)?;
            let _ = write_txn.open_table(PROFILES_TABLE)?;
            let _ = write_txn.open_table(USERS_TABLE)?;
            let _ = write_txn.open_table(RESTAURANTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Insert or replace a record
    fn put<T: Serialize>(
        &self,
        table: TableDefinition<&str, &[u8]>,
        key: &str,
        value: &T,
    ) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut t = write_txn.open_table(table)?;
            t.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Point lookup by key
    fn get<T: DeserializeOwned>(
        &self,
        table: TableDefinition<&str, &[u8]>,
        key: &str,
    ) -> StoreResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let t = read_txn.open_table(table)?;
        match t.get(key)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Full scan of a table
    fn scan<T: DeserializeOwned>(&self, table: TableDefinition<&str, &[u8]>) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let t = read_txn.open_table(table)?;
        let mut records = Vec::new();
        for entry in t.iter()? {
            let (_, value) = entry?;
            records.push(serde_json::from_slice(value.value())?);
        }
        Ok(records)
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore").finish()
    }
}
