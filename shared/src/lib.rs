//! Shared types for the Plateful order core
//!
//! Data models, the dietary tag vocabulary, and the unified error system
//! used across the workspace.

pub mod error;
pub mod models;
pub mod tags;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
