//! Restaurant dashboard service
//!
//! Order listing and lifecycle actions for the restaurant surface. Live
//! updates come from `OrdersManager::subscribe`; this service covers the
//! initial load and the accept/complete buttons.

use crate::auth::Session;
use crate::db::{CatalogStore, repository};
use crate::orders::OrdersManager;
use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderCommand, OrderStatus, Role};
use std::sync::Arc;

/// Placeholder when an order references an unresolvable customer
const UNKNOWN_CUSTOMER: &str = "Unknown";

/// Order joined with the customer's contact details
#[derive(Debug, Clone)]
pub struct OrderWithCustomer {
    pub order: Order,
    pub customer_email: String,
    pub customer_address: String,
}

#[derive(Debug, Clone)]
pub struct DashboardService {
    orders: Arc<OrdersManager>,
    catalog: Arc<CatalogStore>,
}

impl DashboardService {
    pub fn new(orders: Arc<OrdersManager>, catalog: Arc<CatalogStore>) -> Self {
        Self { orders, catalog }
    }

    fn require_restaurant(session: &Session) -> AppResult<()> {
        if session.role != Role::Restaurant {
            return Err(AppError::permission_denied("restaurant session required"));
        }
        Ok(())
    }

    /// Orders of the calling restaurant, newest first
    ///
    /// Each order is enriched with the customer's contact; a dangling user
    /// reference degrades to "Unknown" instead of failing the listing.
    pub fn orders(
        &self,
        session: &Session,
        status: Option<OrderStatus>,
    ) -> AppResult<Vec<OrderWithCustomer>> {
        Self::require_restaurant(session)?;

        let orders = self.orders.orders_for_restaurant(&session.user_id, status)?;
        let enriched = orders
            .into_iter()
            .map(|order| {
                let account = repository::user::find(&self.catalog, &order.user_id)
                    .ok()
                    .flatten();
                match account {
                    Some(account) => OrderWithCustomer {
                        customer_email: account.email,
                        customer_address: account
                            .address
                            .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                        order,
                    },
                    None => OrderWithCustomer {
                        customer_email: UNKNOWN_CUSTOMER.to_string(),
                        customer_address: UNKNOWN_CUSTOMER.to_string(),
                        order,
                    },
                }
            })
            .collect();
        Ok(enriched)
    }

    /// Accept a NEW order, declaring its preparation time
    pub fn accept_order(
        &self,
        session: &Session,
        order_id: &str,
        prep_time_minutes: i32,
    ) -> AppResult<Order> {
        Self::require_restaurant(session)?;
        let cmd = OrderCommand::accept_order(session.actor(), order_id, prep_time_minutes);
        Ok(self.orders.execute_command(cmd)?)
    }

    /// Complete an ACCEPTED order
    pub fn complete_order(&self, session: &Session, order_id: &str) -> AppResult<Order> {
        Self::require_restaurant(session)?;
        let cmd = OrderCommand::complete_order(session.actor(), order_id);
        Ok(self.orders.execute_command(cmd)?)
    }
}
