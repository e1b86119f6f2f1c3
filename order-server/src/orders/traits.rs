//! Command execution traits and context
//!
//! Commands run inside a single redb write transaction: the handler reads
//! current state through [`CommandContext`], checks its preconditions, and
//! returns the mutated order plus the event describing the transition. The
//! manager persists and commits; a failed precondition leaves storage
//! untouched.

use crate::orders::storage::{OrderStorage, StorageError};
use async_trait::async_trait;
use redb::WriteTransaction;
use shared::error::{AppError, ErrorCode};
use shared::models::{Actor, Order, OrderEvent};
use thiserror::Error;

/// Order command errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cart items belong to more than one restaurant")]
    MixedRestaurantCart,

    #[error("Preparation time must be a positive number of minutes, got {0}")]
    InvalidPrepTime(i32),

    #[error("Order {0} is not managed by the calling account")]
    NotOrderOwner(String),

    #[error("Order already accepted: {0}")]
    OrderAlreadyAccepted(String),

    #[error("Order already completed: {0}")]
    OrderAlreadyCompleted(String),

    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for OrderError {
    fn from(err: StorageError) -> Self {
        OrderError::Storage(err.to_string())
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let code = match &err {
            OrderError::OrderNotFound(_) => ErrorCode::OrderNotFound,
            OrderError::EmptyCart => ErrorCode::EmptyCart,
            OrderError::MixedRestaurantCart => ErrorCode::MixedRestaurantCart,
            OrderError::InvalidPrepTime(_) => ErrorCode::InvalidPrepTime,
            OrderError::NotOrderOwner(_) => ErrorCode::PermissionDenied,
            OrderError::OrderAlreadyAccepted(_) => ErrorCode::OrderAlreadyAccepted,
            OrderError::OrderAlreadyCompleted(_) => ErrorCode::OrderAlreadyCompleted,
            OrderError::DuplicateCommand(_) => ErrorCode::AlreadyExists,
            OrderError::InvalidOperation(_) => ErrorCode::InvalidTransition,
            OrderError::Storage(_) => {
                tracing::error!(error = %err, "Order storage error");
                ErrorCode::DatabaseError
            }
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Metadata accompanying every command execution
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub actor: Actor,
    /// UTC millis; the basis for created_at and delivery estimates
    pub timestamp: i64,
}

/// Result of a successful command: the post-transition order and its event
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub order: Order,
    pub event: OrderEvent,
}

/// Execution context borrowing the manager's write transaction
pub struct CommandContext<'a> {
    txn: &'a WriteTransaction,
    storage: &'a OrderStorage,
    sequence: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(txn: &'a WriteTransaction, storage: &'a OrderStorage, current_sequence: u64) -> Self {
        Self {
            txn,
            storage,
            sequence: current_sequence,
        }
    }

    /// Load an order within the transaction
    pub fn load_order(&self, order_id: &str) -> Result<Order, OrderError> {
        self.storage
            .load_order_txn(self.txn, order_id)?
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    /// Allocate the next global sequence number
    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Highest sequence number allocated so far
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Command handler interface implemented by each lifecycle action
#[async_trait]
pub trait CommandHandler {
    async fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<CommandOutcome, OrderError>;
}
