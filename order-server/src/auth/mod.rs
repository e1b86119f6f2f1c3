//! Authentication and navigation
//!
//! Credentials and session issuance belong to the external identity
//! service; this module only models what the core consumes (the
//! authenticated session) and the role-based surface routing rules.

pub mod identity;
pub mod routing;

pub use identity::{IdentityProvider, Session, StaticIdentity};
pub use routing::{Surface, landing_surface, resolve_navigation};
