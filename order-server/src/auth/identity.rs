//! Identity collaborator interface

use shared::models::{Actor, Role};

/// Authenticated session as supplied by the identity service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// The acting identity attached to order commands
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id.clone(), self.role)
    }
}

/// External identity service, reduced to what the core reads
pub trait IdentityProvider: Send + Sync {
    /// Current session, `None` when unauthenticated
    fn current_session(&self) -> Option<Session>;
}

/// Fixed identity, for embedded hosts and tests
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    session: Option<Session>,
}

impl StaticIdentity {
    pub fn authenticated(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn anonymous() -> Self {
        Self { session: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::routing::{Surface, resolve_navigation};

    #[test]
    fn session_actor_carries_id_and_role() {
        let session = Session::new("rest-1", Role::Restaurant);
        let actor = session.actor();
        assert_eq!(actor.user_id, "rest-1");
        assert_eq!(actor.role, Role::Restaurant);
    }

    #[test]
    fn provider_drives_navigation() {
        let provider = StaticIdentity::authenticated(Session::new("u1", Role::Customer));
        let session = provider.current_session();
        assert_eq!(
            resolve_navigation(session.as_ref(), Surface::Menu),
            Surface::Menu
        );

        let anonymous = StaticIdentity::anonymous();
        assert_eq!(anonymous.current_session(), None);
        assert_eq!(
            resolve_navigation(None, Surface::Menu),
            Surface::Login
        );
    }
}
