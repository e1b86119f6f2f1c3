//! AcceptOrder command handler
//!
//! Restaurant-initiated transition NEW → ACCEPTED, recording the declared
//! preparation time and deriving the delivery estimate.

use async_trait::async_trait;

use crate::orders::traits::{
    CommandContext, CommandHandler, CommandMetadata, CommandOutcome, OrderError,
};
use shared::models::{OrderEvent, OrderEventType, OrderStatus, Role};

/// Fixed delivery-transit buffer added uniformly to the declared prep time
pub const DELIVERY_BUFFER_MINUTES: i64 = 15;

/// Upper bound on declared prep time (24 hours)
const MAX_PREP_TIME_MINUTES: i32 = 1440;

/// AcceptOrder action
#[derive(Debug, Clone)]
pub struct AcceptOrderAction {
    pub order_id: String,
    pub prep_time_minutes: i32,
}

#[async_trait]
impl CommandHandler for AcceptOrderAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<CommandOutcome, OrderError> {
        // 1. Validate prep time before touching state
        if self.prep_time_minutes <= 0 || self.prep_time_minutes > MAX_PREP_TIME_MINUTES {
            return Err(OrderError::InvalidPrepTime(self.prep_time_minutes));
        }

        // 2. Load and check ownership
        let mut order = ctx.load_order(&self.order_id)?;
        if metadata.actor.role != Role::Restaurant
            || metadata.actor.user_id != order.restaurant_id
        {
            return Err(OrderError::NotOrderOwner(self.order_id.clone()));
        }

        // 3. Validate status (must be NEW)
        match order.status {
            OrderStatus::New => {}
            OrderStatus::Accepted => {
                return Err(OrderError::OrderAlreadyAccepted(self.order_id.clone()));
            }
            OrderStatus::Completed => {
                return Err(OrderError::OrderAlreadyCompleted(self.order_id.clone()));
            }
        }

        // 4. Apply the transition
        order.status = OrderStatus::Accepted;
        order.prep_time_minutes = Some(self.prep_time_minutes);
        order.estimated_delivery = Some(
            metadata.timestamp
                + (i64::from(self.prep_time_minutes) + DELIVERY_BUFFER_MINUTES) * 60_000,
        );

        let seq = ctx.next_sequence();
        let event = OrderEvent {
            sequence: seq,
            order_id: order.id.clone(),
            event_type: OrderEventType::OrderAccepted,
            timestamp: metadata.timestamp,
            order: order.clone(),
        };

        tracing::info!(
            order_id = %order.id,
            prep_time_minutes = self.prep_time_minutes,
            "Order accepted"
        );
        Ok(CommandOutcome { order, event })
    }
}
