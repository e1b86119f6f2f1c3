//! CompleteOrder command handler
//!
//! Restaurant-initiated transition ACCEPTED → COMPLETED. Terminal: a
//! completed order admits no further transitions.

use async_trait::async_trait;

use crate::orders::traits::{
    CommandContext, CommandHandler, CommandMetadata, CommandOutcome, OrderError,
};
use shared::models::{OrderEvent, OrderEventType, OrderStatus, Role};

/// CompleteOrder action
#[derive(Debug, Clone)]
pub struct CompleteOrderAction {
    pub order_id: String,
}

#[async_trait]
impl CommandHandler for CompleteOrderAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<CommandOutcome, OrderError> {
        // 1. Load and check ownership
        let mut order = ctx.load_order(&self.order_id)?;
        if metadata.actor.role != Role::Restaurant
            || metadata.actor.user_id != order.restaurant_id
        {
            return Err(OrderError::NotOrderOwner(self.order_id.clone()));
        }

        // 2. Validate status (must be ACCEPTED)
        match order.status {
            OrderStatus::Accepted => {}
            OrderStatus::New => {
                return Err(OrderError::InvalidOperation(format!(
                    "Cannot complete order {} in NEW status",
                    self.order_id
                )));
            }
            OrderStatus::Completed => {
                return Err(OrderError::OrderAlreadyCompleted(self.order_id.clone()));
            }
        }

        // 3. Apply the transition
        order.status = OrderStatus::Completed;

        let seq = ctx.next_sequence();
        let event = OrderEvent {
            sequence: seq,
            order_id: order.id.clone(),
            event_type: OrderEventType::OrderCompleted,
            timestamp: metadata.timestamp,
            order: order.clone(),
        };

        tracing::info!(order_id = %order.id, "Order completed");
        Ok(CommandOutcome { order, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::storage::OrderStorage;
    use shared::models::{Actor, Order, OrderItem};

    const T0: i64 = 1_700_000_000_000;

    fn restaurant_metadata() -> CommandMetadata {
        CommandMetadata {
            command_id: "cmd-1".to_string(),
            actor: Actor::new("rest-1", Role::Restaurant),
            timestamp: T0,
        }
    }

    fn order_with_status(order_id: &str, status: OrderStatus) -> Order {
        Order {
            id: order_id.to_string(),
            user_id: "user-1".to_string(),
            restaurant_id: "rest-1".to_string(),
            items: vec![OrderItem {
                item_id: "item-1".to_string(),
                name: "Dish".to_string(),
                price: 10.0,
                quantity: 1,
            }],
            total: 10.0,
            payment_method: "CASH".to_string(),
            status,
            created_at: T0 - 120_000,
            prep_time_minutes: Some(20),
            estimated_delivery: Some(T0 + 35 * 60_000),
        }
    }

    fn seed(storage: &OrderStorage, order: &Order) {
        let txn = storage.begin_write().unwrap();
        storage.store_order(&txn, order).unwrap();
        txn.commit().unwrap();
    }

    #[tokio::test]
    async fn test_complete_order_success() {
        let storage = OrderStorage::open_in_memory().unwrap();
        seed(&storage, &order_with_status("order-1", OrderStatus::Accepted));

        let txn = storage.begin_write().unwrap();
        let seq = storage.current_sequence_txn(&txn).unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, seq);

        let action = CompleteOrderAction {
            order_id: "order-1".to_string(),
        };
        let outcome = action
            .execute(&mut ctx, &restaurant_metadata())
            .await
            .unwrap();

        assert_eq!(outcome.order.status, OrderStatus::Completed);
        assert!(!outcome.order.is_active());
        assert_eq!(outcome.event.event_type, OrderEventType::OrderCompleted);
        // Estimate is retained on the record but no longer displayed
        assert!(outcome.order.estimated_delivery.is_some());
        assert_eq!(outcome.order.estimated_delivery_display(), None);
    }

    #[tokio::test]
    async fn test_complete_new_order_fails() {
        let storage = OrderStorage::open_in_memory().unwrap();
        seed(&storage, &order_with_status("order-1", OrderStatus::New));

        let txn = storage.begin_write().unwrap();
        let seq = storage.current_sequence_txn(&txn).unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, seq);

        let action = CompleteOrderAction {
            order_id: "order-1".to_string(),
        };
        let result = action.execute(&mut ctx, &restaurant_metadata()).await;
        assert!(matches!(result, Err(OrderError::InvalidOperation(_))));

        // No mutation: order is still NEW after the rejected transition
        drop(ctx);
        drop(txn);
        let stored = storage.get_order("order-1").unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::New);
    }

    #[tokio::test]
    async fn test_complete_already_completed_order() {
        let storage = OrderStorage::open_in_memory().unwrap();
        seed(
            &storage,
            &order_with_status("order-1", OrderStatus::Completed),
        );

        let txn = storage.begin_write().unwrap();
        let seq = storage.current_sequence_txn(&txn).unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, seq);

        let action = CompleteOrderAction {
            order_id: "order-1".to_string(),
        };
        let result = action.execute(&mut ctx, &restaurant_metadata()).await;
        assert!(matches!(result, Err(OrderError::OrderAlreadyCompleted(_))));
    }

    #[tokio::test]
    async fn test_complete_requires_owning_restaurant() {
        let storage = OrderStorage::open_in_memory().unwrap();
        seed(&storage, &order_with_status("order-1", OrderStatus::Accepted));

        let txn = storage.begin_write().unwrap();
        let seq = storage.current_sequence_txn(&txn).unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, seq);

        let action = CompleteOrderAction {
            order_id: "order-1".to_string(),
        };
        let other = CommandMetadata {
            command_id: "cmd-2".to_string(),
            actor: Actor::new("rest-2", Role::Restaurant),
            timestamp: T0,
        };
        let result = action.execute(&mut ctx, &other).await;
        assert!(matches!(result, Err(OrderError::NotOrderOwner(_))));
    }

    #[tokio::test]
    async fn test_complete_nonexistent_order() {
        let storage = OrderStorage::open_in_memory().unwrap();

        let txn = storage.begin_write().unwrap();
        let seq = storage.current_sequence_txn(&txn).unwrap();
        let mut ctx = CommandContext::new(&txn, &storage, seq);

        let action = CompleteOrderAction {
            order_id: "ghost".to_string(),
        };
        let result = action.execute(&mut ctx, &restaurant_metadata()).await;
        assert!(matches!(result, Err(OrderError::OrderNotFound(_))));
    }
}
