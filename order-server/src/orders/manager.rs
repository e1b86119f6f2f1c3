//! OrdersManager - command processing and event broadcast
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Idempotency check (command_id)
//!     ├─ 2. Begin write transaction
//!     ├─ 3. Create CommandContext
//!     ├─ 4. Convert command to action and execute (precondition guards)
//!     ├─ 5. Persist order, event, sequence, processed command
//!     ├─ 6. Commit transaction
//!     ├─ 7. Broadcast event
//!     └─ 8. Return the post-transition order
//! ```
//!
//! Steps 2–6 form the atomic unit: redb is single-writer, so two
//! near-simultaneous transitions on the same order serialize here and the
//! loser fails its precondition instead of overwriting the winner.

use crate::orders::actions::CommandAction;
use crate::orders::storage::{OrderStorage, StorageError};
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::models::{Order, OrderCommand, OrderEvent, OrderStatus};
use std::path::Path;
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// OrdersManager for command processing
pub struct OrdersManager {
    storage: OrderStorage,
    event_tx: broadcast::Sender<OrderEvent>,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("storage", &"<OrderStorage>")
            .field("event_tx", &"<broadcast::Sender>")
            .finish()
    }
}

impl OrdersManager {
    /// Create a new OrdersManager with the given database path
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, OrderError> {
        let storage = OrderStorage::open(db_path)?;
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self { storage, event_tx })
    }

    /// Create an OrdersManager with existing storage (for testing)
    #[cfg(test)]
    pub fn with_storage(storage: OrderStorage) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { storage, event_tx }
    }

    /// Subscribe to event broadcasts
    ///
    /// This is the live-update feed for restaurant dashboards: every
    /// committed transition arrives here, no polling required.
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.event_tx.subscribe()
    }

    /// Get the underlying storage
    pub fn storage(&self) -> &OrderStorage {
        &self.storage
    }

    /// Execute a command and return the post-transition order
    pub fn execute_command(&self, cmd: OrderCommand) -> Result<Order, OrderError> {
        let (order, event) = self.process_command(cmd)?;
        // Broadcast after successful commit
        if self.event_tx.send(event).is_err() {
            tracing::debug!("Event broadcast skipped: no active receivers");
        }
        Ok(order)
    }

    /// Process a command and return the order with its event
    fn process_command(&self, cmd: OrderCommand) -> Result<(Order, OrderEvent), OrderError> {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        // 1. Idempotency check (before transaction)
        if self.storage.is_command_processed(&cmd.command_id)? {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return Err(OrderError::DuplicateCommand(cmd.command_id));
        }

        // 2. Begin write transaction
        let txn = self.storage.begin_write()?;

        // Double-check idempotency within the transaction
        if self.storage.is_command_processed_txn(&txn, &cmd.command_id)? {
            return Err(OrderError::DuplicateCommand(cmd.command_id));
        }

        // 3. Create context and metadata
        let current_sequence = self.storage.current_sequence_txn(&txn)?;
        let mut ctx = CommandContext::new(&txn, &self.storage, current_sequence);
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            actor: cmd.actor.clone(),
            timestamp: cmd.timestamp,
        };

        // 4. Convert to action and execute
        let action = CommandAction::from(&cmd);
        let outcome = futures::executor::block_on(action.execute(&mut ctx, &metadata))?;
        let final_sequence = ctx.sequence();

        // 5. Persist everything
        self.storage.store_order(&txn, &outcome.order)?;
        self.storage.store_event(&txn, &outcome.event)?;
        self.storage.set_sequence(&txn, final_sequence)?;
        self.storage.mark_command_processed(&txn, &cmd.command_id)?;

        // 6. Commit
        txn.commit().map_err(StorageError::from)?;

        tracing::info!(
            command_id = %cmd.command_id,
            order_id = %outcome.order.id,
            event_type = ?outcome.event.event_type,
            "Order command committed"
        );
        Ok((outcome.order, outcome.event))
    }

    // ==================== Read-side queries ====================

    /// Point lookup of an order
    pub fn order(&self, order_id: &str) -> Result<Option<Order>, OrderError> {
        Ok(self.storage.get_order(order_id)?)
    }

    /// Orders of a restaurant, newest first, optionally filtered by status
    pub fn orders_for_restaurant(
        &self,
        restaurant_id: &str,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.storage.orders_for_restaurant(restaurant_id)?;
        if let Some(status) = status {
            orders.retain(|order| order.status == status);
        }
        Ok(orders)
    }

    /// Orders of a customer, newest first
    pub fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, OrderError> {
        Ok(self.storage.orders_for_user(user_id)?)
    }

    /// Customer's orders still in flight (NEW or ACCEPTED)
    pub fn active_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.storage.orders_for_user(user_id)?;
        orders.retain(Order::is_active);
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Actor, CartLine, OrderEventType, Role};

    fn customer() -> Actor {
        Actor::new("user-1", Role::Customer)
    }

    fn restaurant() -> Actor {
        Actor::new("rest-1", Role::Restaurant)
    }

    fn line(price: f64, quantity: i32) -> CartLine {
        CartLine {
            item_id: "item-1".to_string(),
            restaurant_id: "rest-1".to_string(),
            name: "Dish".to_string(),
            price,
            ingredients: vec![],
            quantity,
        }
    }

    fn manager() -> OrdersManager {
        OrdersManager::with_storage(OrderStorage::open_in_memory().unwrap())
    }

    #[test]
    fn full_lifecycle_place_accept_complete() {
        let manager = manager();
        let mut events = manager.subscribe();

        let placed = manager
            .execute_command(OrderCommand::place_order(
                customer(),
                vec![line(10.0, 2)],
                "CASH",
            ))
            .unwrap();
        assert_eq!(placed.status, OrderStatus::New);
        assert_eq!(placed.total, 20.0);

        let accepted = manager
            .execute_command(OrderCommand::accept_order(restaurant(), &placed.id, 20))
            .unwrap();
        assert_eq!(accepted.status, OrderStatus::Accepted);
        assert!(accepted.estimated_delivery_display().is_some());

        let completed = manager
            .execute_command(OrderCommand::complete_order(restaurant(), &placed.id))
            .unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);

        let types: Vec<OrderEventType> = (0..3).map(|_| events.try_recv().unwrap().event_type).collect();
        assert_eq!(
            types,
            [
                OrderEventType::OrderPlaced,
                OrderEventType::OrderAccepted,
                OrderEventType::OrderCompleted,
            ]
        );

        // Events carry ascending global sequence numbers
        let log = manager.storage().events_for_order(&placed.id).unwrap();
        let seqs: Vec<u64> = log.iter().map(|e| e.sequence).collect();
        assert_eq!(seqs, [1, 2, 3]);
    }

    #[test]
    fn duplicate_command_is_rejected_without_reexecution() {
        let manager = manager();
        let cmd = OrderCommand::place_order(customer(), vec![line(5.0, 1)], "CASH");

        manager.execute_command(cmd.clone()).unwrap();
        let result = manager.execute_command(cmd);
        assert!(matches!(result, Err(OrderError::DuplicateCommand(_))));

        assert_eq!(manager.orders_for_user("user-1").unwrap().len(), 1);
    }

    #[test]
    fn failed_precondition_leaves_state_untouched() {
        let manager = manager();
        let placed = manager
            .execute_command(OrderCommand::place_order(
                customer(),
                vec![line(5.0, 1)],
                "CASH",
            ))
            .unwrap();

        // Completing a NEW order is rejected
        let result =
            manager.execute_command(OrderCommand::complete_order(restaurant(), &placed.id));
        assert!(matches!(result, Err(OrderError::InvalidOperation(_))));

        let stored = manager.order(&placed.id).unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::New);
        // Only the placement event exists
        assert_eq!(
            manager.storage().events_for_order(&placed.id).unwrap().len(),
            1
        );
    }

    #[test]
    fn second_accept_loses_the_race() {
        let manager = manager();
        let placed = manager
            .execute_command(OrderCommand::place_order(
                customer(),
                vec![line(5.0, 1)],
                "CASH",
            ))
            .unwrap();

        // Two dashboards accept the same order; the commands serialize and
        // exactly one wins.
        let first =
            manager.execute_command(OrderCommand::accept_order(restaurant(), &placed.id, 10));
        let second =
            manager.execute_command(OrderCommand::accept_order(restaurant(), &placed.id, 25));

        assert!(first.is_ok());
        assert!(matches!(second, Err(OrderError::OrderAlreadyAccepted(_))));
        let stored = manager.order(&placed.id).unwrap().unwrap();
        assert_eq!(stored.prep_time_minutes, Some(10));
    }

    #[test]
    fn status_filter_and_active_query() {
        let manager = manager();
        let a = manager
            .execute_command(OrderCommand::place_order(
                customer(),
                vec![line(5.0, 1)],
                "CASH",
            ))
            .unwrap();
        let b = manager
            .execute_command(OrderCommand::place_order(
                customer(),
                vec![line(7.0, 1)],
                "CARD",
            ))
            .unwrap();

        manager
            .execute_command(OrderCommand::accept_order(restaurant(), &a.id, 10))
            .unwrap();
        manager
            .execute_command(OrderCommand::complete_order(restaurant(), &a.id))
            .unwrap();

        let new_orders = manager
            .orders_for_restaurant("rest-1", Some(OrderStatus::New))
            .unwrap();
        assert_eq!(new_orders.len(), 1);
        assert_eq!(new_orders[0].id, b.id);

        let active = manager.active_orders_for_user("user-1").unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b.id);

        let all = manager.orders_for_restaurant("rest-1", None).unwrap();
        assert_eq!(all.len(), 2);
    }
}
