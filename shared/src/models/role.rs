//! Role Model

use serde::{Deserialize, Serialize};

/// Account role, assigned by the identity service at registration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Restaurant,
    Admin,
}
