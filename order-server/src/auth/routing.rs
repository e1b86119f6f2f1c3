//! Role-based surface routing
//!
//! Role is a standing access-control constraint on navigation, not a
//! one-time redirect: [`resolve_navigation`] runs on every navigation
//! event, so a restaurant session steering into customer surfaces is sent
//! back to its dashboard whenever it tries.

use crate::auth::identity::Session;
use shared::models::Role;

/// Navigable application surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Login,
    Register,
    CustomerHome,
    Menu,
    Cart,
    OrderHistory,
    Profile,
    RestaurantDashboard,
    CreateItem,
    AdminConsole,
}

impl Surface {
    /// Surfaces reserved for customer sessions
    pub fn is_customer_only(self) -> bool {
        matches!(
            self,
            Surface::CustomerHome | Surface::Menu | Surface::Cart | Surface::OrderHistory
        )
    }

    /// Surfaces reachable without a session
    pub fn is_auth_surface(self) -> bool {
        matches!(self, Surface::Login | Surface::Register)
    }
}

/// Landing surface after authentication
pub fn landing_surface(role: Role) -> Surface {
    match role {
        Role::Admin => Surface::AdminConsole,
        Role::Restaurant => Surface::RestaurantDashboard,
        Role::Customer => Surface::CustomerHome,
    }
}

/// Resolve a navigation request against the current session
///
/// Returns the surface actually shown: the request passes through, or the
/// caller is redirected (to Login when unauthenticated, to the landing
/// surface when re-entering auth surfaces, to the dashboard when a
/// restaurant session requests a customer-only surface).
pub fn resolve_navigation(session: Option<&Session>, requested: Surface) -> Surface {
    let Some(session) = session else {
        return if requested.is_auth_surface() {
            requested
        } else {
            Surface::Login
        };
    };

    if requested.is_auth_surface() {
        return landing_surface(session.role);
    }

    if session.role == Role::Restaurant && requested.is_customer_only() {
        return Surface::RestaurantDashboard;
    }

    requested
}
