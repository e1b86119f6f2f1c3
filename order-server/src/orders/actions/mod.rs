//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles one
//! lifecycle transition.

use async_trait::async_trait;

use crate::orders::traits::{
    CommandContext, CommandHandler, CommandMetadata, CommandOutcome, OrderError,
};
use shared::models::{OrderCommand, OrderCommandPayload};

mod accept_order;
mod complete_order;
mod place_order;

pub use accept_order::{AcceptOrderAction, DELIVERY_BUFFER_MINUTES};
pub use complete_order::CompleteOrderAction;
pub use place_order::PlaceOrderAction;

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    PlaceOrder(PlaceOrderAction),
    AcceptOrder(AcceptOrderAction),
    CompleteOrder(CompleteOrderAction),
}

#[async_trait]
impl CommandHandler for CommandAction {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<CommandOutcome, OrderError> {
        match self {
            CommandAction::PlaceOrder(action) => action.execute(ctx, metadata).await,
            CommandAction::AcceptOrder(action) => action.execute(ctx, metadata).await,
            CommandAction::CompleteOrder(action) => action.execute(ctx, metadata).await,
        }
    }
}

/// Convert OrderCommand to CommandAction
///
/// This is the only place with a match on OrderCommandPayload.
impl From<&OrderCommand> for CommandAction {
    fn from(cmd: &OrderCommand) -> Self {
        match &cmd.payload {
            OrderCommandPayload::PlaceOrder {
                lines,
                payment_method,
            } => CommandAction::PlaceOrder(PlaceOrderAction {
                lines: lines.clone(),
                payment_method: payment_method.clone(),
            }),
            OrderCommandPayload::AcceptOrder {
                order_id,
                prep_time_minutes,
            } => CommandAction::AcceptOrder(AcceptOrderAction {
                order_id: order_id.clone(),
                prep_time_minutes: *prep_time_minutes,
            }),
            OrderCommandPayload::CompleteOrder { order_id } => {
                CommandAction::CompleteOrder(CompleteOrderAction {
                    order_id: order_id.clone(),
                })
            }
        }
    }
}
