//! Unified error system
//!
//! This module provides the error handling primitives shared by every
//! crate in the workspace:
//! - [`ErrorCode`]: standardized error codes
//! - [`AppError`]: error type carrying a code and a human-readable message
//! - [`AppResult`]: result alias used by service-level functions
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// Codes are represented as `u16` values for efficient serialization and
/// cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been accepted
    OrderAlreadyAccepted = 4002,
    /// Order has already been completed
    OrderAlreadyCompleted = 4003,
    /// Status transition not permitted from the current state
    InvalidTransition = 4004,
    /// Cart is empty at checkout
    EmptyCart = 4005,
    /// Preparation time is not a positive number of minutes
    InvalidPrepTime = 4006,
    /// Cart lines span more than one restaurant
    MixedRestaurantCart = 4007,

    // ==================== 6xxx: Catalog ====================
    /// Food item not found
    ItemNotFound = 6001,
    /// Restaurant not found
    RestaurantNotFound = 6002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Classification service failed or unavailable
    ClassificationFailed = 9101,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Default message for this code
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::NotAuthenticated => "Authentication required",
            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin role required",
            Self::OrderNotFound => "Order not found",
            Self::OrderAlreadyAccepted => "Order already accepted",
            Self::OrderAlreadyCompleted => "Order already completed",
            Self::InvalidTransition => "Status transition not permitted",
            Self::EmptyCart => "Cart is empty",
            Self::InvalidPrepTime => "Preparation time must be a positive number of minutes",
            Self::MixedRestaurantCart => "Cart items belong to more than one restaurant",
            Self::ItemNotFound => "Food item not found",
            Self::RestaurantNotFound => "Restaurant not found",
            Self::InternalError => "Internal error",
            Self::DatabaseError => "Database error",
            Self::ClassificationFailed => "Classification service failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when deserializing an unrecognized code value
#[derive(Debug, Clone, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            1001 => Self::NotAuthenticated,
            2001 => Self::PermissionDenied,
            2003 => Self::AdminRequired,
            4001 => Self::OrderNotFound,
            4002 => Self::OrderAlreadyAccepted,
            4003 => Self::OrderAlreadyCompleted,
            4004 => Self::InvalidTransition,
            4005 => Self::EmptyCart,
            4006 => Self::InvalidPrepTime,
            4007 => Self::MixedRestaurantCart,
            6001 => Self::ItemNotFound,
            6002 => Self::RestaurantNotFound,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9101 => Self::ClassificationFailed,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

/// Application error with a structured code
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
    }

    /// Create a not authenticated error
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{} already exists", r))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, errors.to_string())
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
