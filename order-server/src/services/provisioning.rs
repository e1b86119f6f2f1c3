//! Restaurant account provisioning
//!
//! Admin-only: creates the restaurant's account record and its approved
//! directory entry in one call. Credential issuance stays with the
//! external identity service.

use crate::auth::Session;
use crate::db::{CatalogStore, repository};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Restaurant, RestaurantCreate, Role, UserAccount};
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Clone)]
pub struct ProvisioningService {
    catalog: Arc<CatalogStore>,
}

impl ProvisioningService {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Provision a restaurant account and its directory entry
    pub fn provision_restaurant(
        &self,
        session: &Session,
        payload: RestaurantCreate,
    ) -> AppResult<Restaurant> {
        if session.role != Role::Admin {
            return Err(AppError::new(ErrorCode::AdminRequired));
        }
        payload.validate()?;

        // The identity service assigns account ids in production; the
        // embedded store generates its own.
        let id = uuid::Uuid::new_v4().to_string();

        if repository::user::find(&self.catalog, &id)?.is_some() {
            return Err(AppError::already_exists("Restaurant account"));
        }

        repository::user::insert(
            &self.catalog,
            &UserAccount {
                id: id.clone(),
                email: payload.email,
                role: Role::Restaurant,
                address: None,
            },
        )?;

        let restaurant = Restaurant {
            id,
            name: payload.name,
            cuisine: payload.cuisine,
            address: payload.address,
            approved: true,
        };
        repository::restaurant::insert(&self.catalog, &restaurant)?;

        tracing::info!(
            restaurant_id = %restaurant.id,
            name = %restaurant.name,
            "Restaurant provisioned"
        );
        Ok(restaurant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> RestaurantCreate {
        RestaurantCreate {
            email: "owner@zen.example".to_string(),
            name: "Zen Garden".to_string(),
            cuisine: "japanese".to_string(),
            address: "1 Garden Way".to_string(),
        }
    }

    #[test]
    fn admin_provisions_account_and_directory_entry() {
        let catalog = Arc::new(CatalogStore::open_in_memory().unwrap());
        let service = ProvisioningService::new(catalog.clone());
        let admin = Session::new("admin-1", Role::Admin);

        let restaurant = service.provision_restaurant(&admin, payload()).unwrap();
        assert!(restaurant.approved);

        let account = repository::user::find(&catalog, &restaurant.id)
            .unwrap()
            .unwrap();
        assert_eq!(account.role, Role::Restaurant);
        assert_eq!(account.email, "owner@zen.example");

        let listed = repository::restaurant::list_approved(&catalog).unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn non_admin_is_rejected() {
        let catalog = Arc::new(CatalogStore::open_in_memory().unwrap());
        let service = ProvisioningService::new(catalog);

        for role in [Role::Customer, Role::Restaurant] {
            let session = Session::new("someone", role);
            let err = service
                .provision_restaurant(&session, payload())
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::AdminRequired);
        }
    }

    #[test]
    fn invalid_email_is_rejected() {
        let catalog = Arc::new(CatalogStore::open_in_memory().unwrap());
        let service = ProvisioningService::new(catalog);
        let admin = Session::new("admin-1", Role::Admin);

        let mut bad = payload();
        bad.email = "not-an-email".to_string();
        let err = service.provision_restaurant(&admin, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
