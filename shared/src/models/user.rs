//! User Account Model

use super::role::Role;
use serde::{Deserialize, Serialize};

/// User account record
///
/// Credentials live in the external identity service; this record only
/// carries the attributes the ordering flows read (role routing, customer
/// contact shown on the restaurant dashboard).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    /// Identity-service-assigned user ID
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Delivery address, owner-editable
    #[serde(default)]
    pub address: Option<String>,
}
