//! Restaurant Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Restaurant directory entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// Matches the restaurant account's user ID
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    /// Only approved restaurants are listed to customers
    #[serde(default)]
    pub approved: bool,
}

/// Create restaurant payload (admin provisioning)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantCreate {
    #[validate(email(message = "a valid account email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub address: String,
}
