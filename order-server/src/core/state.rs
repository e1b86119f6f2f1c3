//! Application state
//!
//! Explicit context object wiring the stores, the order manager, the
//! session carts and the optional classifier. Hosts hold one `AppState`
//! and hand services to their surfaces; nothing here is ambient.

use crate::cart::CartRegistry;
use crate::classify::ClassificationService;
use crate::core::Config;
use crate::db::CatalogStore;
use crate::menu::MenuService;
use crate::orders::OrdersManager;
use crate::services::{
    CheckoutService, DashboardService, ItemIntakeService, ProvisioningService,
};
use shared::error::{AppError, AppResult};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<CatalogStore>,
    pub orders: Arc<OrdersManager>,
    pub carts: Arc<CartRegistry>,
    pub classifier: Option<Arc<ClassificationService>>,
}

impl AppState {
    /// Open the stores under `config.work_dir` and wire everything up
    pub fn init(config: Config) -> AppResult<Self> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let catalog = Arc::new(CatalogStore::open(config.catalog_db_path())?);
        let orders = Arc::new(OrdersManager::new(config.orders_db_path())?);

        let classifier = match &config.classifier_url {
            Some(url) => Some(Arc::new(ClassificationService::new(
                url.clone(),
                config.classifier_api_key.clone(),
                config.classifier_model.clone(),
                config.classifier_timeout_ms,
            )?)),
            None => None,
        };
        if classifier.is_none() {
            tracing::info!("Classifier disabled; menu items start with unset tags");
        }

        tracing::info!(work_dir = %config.work_dir, "Application state initialized");
        Ok(Self {
            config,
            catalog,
            orders,
            carts: Arc::new(CartRegistry::new()),
            classifier,
        })
    }

    // ==================== Service accessors ====================

    pub fn menu_service(&self) -> MenuService {
        MenuService::new(self.catalog.clone())
    }

    pub fn checkout_service(&self) -> CheckoutService {
        CheckoutService::new(self.orders.clone(), self.carts.clone())
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService::new(self.orders.clone(), self.catalog.clone())
    }

    pub fn provisioning_service(&self) -> ProvisioningService {
        ProvisioningService::new(self.catalog.clone())
    }

    pub fn item_intake_service(&self) -> ItemIntakeService {
        ItemIntakeService::new(self.catalog.clone(), self.classifier.clone())
    }
}
