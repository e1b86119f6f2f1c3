//! Checkout and customer order queries
//!
//! Bridges the session cart to the order lifecycle engine. The cart is
//! cleared only after the order is durably placed, so a failed placement
//! leaves everything in place for a retry.

use crate::auth::Session;
use crate::cart::CartRegistry;
use crate::orders::OrdersManager;
use shared::AppResult;
use shared::models::{Order, OrderCommand};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CheckoutService {
    orders: Arc<OrdersManager>,
    carts: Arc<CartRegistry>,
}

impl CheckoutService {
    pub fn new(orders: Arc<OrdersManager>, carts: Arc<CartRegistry>) -> Self {
        Self { orders, carts }
    }

    /// Place an order from the session's cart
    pub fn place_order(&self, session: &Session, payment_method: &str) -> AppResult<Order> {
        let lines = self.carts.snapshot(&session.user_id);
        let cmd = OrderCommand::place_order(session.actor(), lines, payment_method);
        let order = self.orders.execute_command(cmd)?;

        // Only reached on success; a failed placement keeps the cart
        self.carts.clear(&session.user_id);
        Ok(order)
    }

    /// Customer's order history, newest first
    pub fn order_history(&self, session: &Session) -> AppResult<Vec<Order>> {
        Ok(self.orders.orders_for_user(&session.user_id)?)
    }

    /// Customer's orders still in flight (NEW or ACCEPTED)
    pub fn active_orders(&self, session: &Session) -> AppResult<Vec<Order>> {
        Ok(self.orders.active_orders_for_user(&session.user_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::OrderStorage;
    use shared::error::ErrorCode;
    use shared::models::{FoodItem, OrderStatus, Role};

    fn item(id: &str, price: f64) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            restaurant_id: "rest-1".to_string(),
            name: format!("dish {id}"),
            description: String::new(),
            ingredients: vec![],
            price,
            allowed: true,
            ..Default::default()
        }
    }

    fn service() -> CheckoutService {
        CheckoutService::new(
            Arc::new(OrdersManager::with_storage(
                OrderStorage::open_in_memory().unwrap(),
            )),
            Arc::new(CartRegistry::new()),
        )
    }

    #[test]
    fn checkout_places_order_and_clears_cart() {
        let service = service();
        let session = Session::new("user-1", Role::Customer);

        service.carts.with_cart("user-1", |cart| {
            cart.add_item(&item("a", 10.0));
            cart.add_item(&item("a", 10.0));
            cart.add_item(&item("b", 3.5));
        });

        let order = service.place_order(&session, "CASH").unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.total, 23.5);
        assert_eq!(order.restaurant_id, "rest-1");
        assert!(service.carts.snapshot("user-1").is_empty());

        let history = service.order_history(&session).unwrap();
        assert_eq!(history.len(), 1);
        let active = service.active_orders(&session).unwrap();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn empty_cart_checkout_fails_and_keeps_cart() {
        let service = service();
        let session = Session::new("user-1", Role::Customer);

        let err = service.place_order(&session, "CASH").unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn failed_checkout_preserves_the_cart_for_retry() {
        let service = service();
        let session = Session::new("user-1", Role::Customer);

        // Mixed-restaurant cart is rejected at checkout
        service.carts.with_cart("user-1", |cart| {
            cart.add_item(&item("a", 10.0));
            let mut foreign = item("b", 5.0);
            foreign.restaurant_id = "rest-2".to_string();
            cart.add_item(&foreign);
        });

        let err = service.place_order(&session, "CASH").unwrap_err();
        assert_eq!(err.code, ErrorCode::MixedRestaurantCart);
        // Cart untouched, user can fix it and retry
        assert_eq!(service.carts.snapshot("user-1").len(), 2);
    }
}
