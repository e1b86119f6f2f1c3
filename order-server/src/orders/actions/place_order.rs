//! PlaceOrder command handler
//!
//! Creates a NEW order from a cart snapshot taken at checkout.

use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::money;
use crate::orders::traits::{
    CommandContext, CommandHandler, CommandMetadata, CommandOutcome, OrderError,
};
use shared::models::{
    CartLine, Order, OrderEvent, OrderEventType, OrderItem, OrderStatus,
};

/// PlaceOrder action
#[derive(Debug, Clone)]
pub struct PlaceOrderAction {
    pub lines: Vec<CartLine>,
    /// Payment method label; recorded, never processed
    pub payment_method: String,
}

#[async_trait]
impl CommandHandler for PlaceOrderAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<CommandOutcome, OrderError> {
        // 1. Cart must not be empty
        let Some(first) = self.lines.first() else {
            return Err(OrderError::EmptyCart);
        };

        // 2. Every line must be well-formed and belong to one restaurant
        let restaurant_id = first.restaurant_id.clone();
        for line in &self.lines {
            money::validate_line(line)?;
            if line.restaurant_id != restaurant_id {
                return Err(OrderError::MixedRestaurantCart);
            }
        }

        // 3. Build the order snapshot
        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: metadata.actor.user_id.clone(),
            restaurant_id,
            items: self.lines.iter().map(OrderItem::from).collect(),
            total: money::compute_total(&self.lines),
            payment_method: self.payment_method.clone(),
            status: OrderStatus::New,
            created_at: metadata.timestamp,
            prep_time_minutes: None,
            estimated_delivery: None,
        };

        // 4. Allocate sequence and emit the event
        let seq = ctx.next_sequence();
        let event = OrderEvent {
            sequence: seq,
            order_id: order.id.clone(),
            event_type: OrderEventType::OrderPlaced,
            timestamp: metadata.timestamp,
            order: order.clone(),
        };

        tracing::info!(
            order_id = %order.id,
            restaurant_id = %order.restaurant_id,
            total = order.total,
            "Order placed"
        );
        Ok(CommandOutcome { order, event })
    }
}
