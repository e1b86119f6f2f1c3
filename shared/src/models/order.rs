//! Order Model
//!
//! Order entity plus the command/event vocabulary the lifecycle engine
//! speaks. Order items are snapshots taken at checkout, so later catalog
//! edits never retroactively alter historical orders.

use super::food_item::FoodItem;
use super::role::Role;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// Order status
///
/// Linear lifecycle: NEW → ACCEPTED → COMPLETED. COMPLETED is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    New,
    Accepted,
    Completed,
}

/// Cart line: snapshot of an item at add time plus a quantity
///
/// Weak reference to the catalog item: `item_id` relates, the remaining
/// fields are frozen copies of the item as it was when first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub item_id: String,
    pub restaurant_id: String,
    pub name: String,
    /// Price in currency unit, frozen at add time
    pub price: f64,
    pub ingredients: Vec<String>,
    pub quantity: i32,
}

impl CartLine {
    /// Snapshot a catalog item into a fresh line with quantity 1
    pub fn from_item(item: &FoodItem) -> Self {
        Self {
            item_id: item.id.clone(),
            restaurant_id: item.restaurant_id.clone(),
            name: item.name.clone(),
            price: item.price,
            ingredients: item.ingredients.clone(),
            quantity: 1,
        }
    }
}

/// Order item snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub item_id: String,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    pub quantity: i32,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id.clone(),
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Owning customer
    pub user_id: String,
    /// Owning restaurant, the only party allowed to advance the status
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    /// Total amount in currency unit
    pub total: f64,
    /// Payment method label only; no processing in scope
    pub payment_method: String,
    pub status: OrderStatus,
    /// Creation timestamp (UTC millis, server-assigned)
    pub created_at: i64,
    /// Declared by the restaurant on acceptance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<i32>,
    /// Derived on acceptance: prep time plus transit buffer (UTC millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<i64>,
}

impl Order {
    /// True while the order still needs restaurant attention
    pub fn is_active(&self) -> bool {
        matches!(self.status, OrderStatus::New | OrderStatus::Accepted)
    }

    /// Check if the order has reached its terminal state
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// Time-of-day the order should arrive ("HH:MM", UTC)
    ///
    /// Only meaningful while ACCEPTED; NEW orders have no estimate yet and
    /// COMPLETED orders no longer show one.
    pub fn estimated_delivery_display(&self) -> Option<String> {
        if self.status != OrderStatus::Accepted {
            return None;
        }
        let ts = self.estimated_delivery?;
        let dt = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ts)?;
        Some(dt.format("%H:%M").to_string())
    }
}

/// Acting identity attached to a command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Actor {
    pub user_id: String,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

/// Order command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCommand {
    /// Unique command ID for idempotent retry
    pub command_id: String,
    pub actor: Actor,
    /// UTC millis assigned when the command is built
    pub timestamp: i64,
    pub payload: OrderCommandPayload,
}

impl OrderCommand {
    pub fn new(actor: Actor, payload: OrderCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            actor,
            timestamp: now_millis(),
            payload,
        }
    }

    /// Build a PlaceOrder command from a cart snapshot
    pub fn place_order(actor: Actor, lines: Vec<CartLine>, payment_method: impl Into<String>) -> Self {
        Self::new(
            actor,
            OrderCommandPayload::PlaceOrder {
                lines,
                payment_method: payment_method.into(),
            },
        )
    }

    /// Build an AcceptOrder command
    pub fn accept_order(actor: Actor, order_id: impl Into<String>, prep_time_minutes: i32) -> Self {
        Self::new(
            actor,
            OrderCommandPayload::AcceptOrder {
                order_id: order_id.into(),
                prep_time_minutes,
            },
        )
    }

    /// Build a CompleteOrder command
    pub fn complete_order(actor: Actor, order_id: impl Into<String>) -> Self {
        Self::new(
            actor,
            OrderCommandPayload::CompleteOrder {
                order_id: order_id.into(),
            },
        )
    }
}

/// Order command payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCommandPayload {
    PlaceOrder {
        lines: Vec<CartLine>,
        payment_method: String,
    },
    AcceptOrder {
        order_id: String,
        prep_time_minutes: i32,
    },
    CompleteOrder {
        order_id: String,
    },
}

/// Order event types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEventType {
    OrderPlaced,
    OrderAccepted,
    OrderCompleted,
}

/// Order event broadcast to subscribers after a committed transition
///
/// Carries the post-transition order state so dashboard hosts can render
/// without a follow-up read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Global sequence number (monotonic across all orders)
    pub sequence: u64,
    pub order_id: String,
    pub event_type: OrderEventType,
    pub timestamp: i64,
    pub order: Order,
}
