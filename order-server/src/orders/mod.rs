//! Order Lifecycle Module
//!
//! Guarded state machine NEW → ACCEPTED → COMPLETED:
//!
//! - **actions**: one command handler per transition, preconditions first
//! - **storage**: redb persistence for orders, events and indices
//! - **manager**: atomic command execution and event broadcast
//! - **money**: decimal-precise totals
//!
//! # Data Flow
//!
//! 1. Host builds an `OrderCommand` (checkout or dashboard)
//! 2. `OrdersManager` validates and executes inside one write transaction
//! 3. The post-transition `Order` and its `OrderEvent` are persisted
//! 4. The event is broadcast to all subscribers
//! 5. The order is returned to the caller

pub mod actions;
pub mod manager;
pub mod money;
pub mod storage;
pub mod traits;

// Re-exports
pub use actions::{AcceptOrderAction, CompleteOrderAction, DELIVERY_BUFFER_MINUTES, PlaceOrderAction};
pub use manager::OrdersManager;
pub use storage::{OrderStorage, StorageError, StorageResult};
pub use traits::{CommandContext, CommandHandler, CommandMetadata, CommandOutcome, OrderError};

// Re-export shared types for convenience
pub use shared::models::{
    Order, OrderCommand, OrderCommandPayload, OrderEvent, OrderEventType, OrderStatus,
};
