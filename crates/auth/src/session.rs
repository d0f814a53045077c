//! Login session context.

use chrono::{DateTime, Utc};
use ecorp_core::SessionId;
use thiserror::Error;

use crate::{Role, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("display name must not be blank")]
    BlankName,
    #[error("no user is logged in")]
    NotLoggedIn,
}

#[derive(Debug, Clone)]
struct ActiveSession {
    id: SessionId,
    user: User,
    started_at: DateTime<Utc>,
}

/// The current login, if any.
///
/// Owned by the shell and passed by reference to screens; `start` and `end`
/// are the only transitions.
#[derive(Debug, Default)]
pub struct Session {
    active: Option<ActiveSession>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in as the preset user for `role`, displayed under `name`.
    ///
    /// Starting while another login is active replaces it.
    pub fn start(&mut self, role: Role, name: impl Into<String>) -> Result<&User, SessionError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::BlankName);
        }

        if let Some(previous) = self.active.take() {
            tracing::info!(session_id = %previous.id, "replacing active session");
        }

        let user = User {
            name: name.to_string(),
            ..User::preset(role)
        };
        let id = SessionId::new();
        tracing::info!(session_id = %id, role = %role, user = %user.name, "session started");

        let active = self.active.insert(ActiveSession {
            id,
            user,
            started_at: Utc::now(),
        });
        Ok(&active.user)
    }

    /// Log out, returning the user that was logged in.
    pub fn end(&mut self) -> Option<User> {
        let active = self.active.take()?;
        tracing::info!(session_id = %active.id, user = %active.user.name, "session ended");
        Some(active.user)
    }

    pub fn user(&self) -> Option<&User> {
        self.active.as_ref().map(|a| &a.user)
    }

    pub fn require_user(&self) -> Result<&User, SessionError> {
        self.user().ok_or(SessionError::NotLoggedIn)
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    pub fn id(&self) -> Option<SessionId> {
        self.active.as_ref().map(|a| a.id)
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.active.as_ref().map(|a| a.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.require_user(), Err(SessionError::NotLoggedIn));
        assert!(session.id().is_none());
    }

    #[test]
    fn start_uses_preset_with_overridden_name() {
        let mut session = Session::new();
        let user = session.start(Role::Mechanic, "Mechanic").unwrap().clone();

        assert_eq!(user.id, "4");
        assert_eq!(user.name, "Mechanic");
        assert_eq!(user.email, "tom@ecorp.com");
        assert_eq!(user.location.as_deref(), Some("Florida Dealership"));
        assert!(session.is_authenticated());
        assert!(session.started_at().is_some());
    }

    #[test]
    fn blank_name_is_rejected_and_leaves_session_untouched() {
        let mut session = Session::new();
        assert_eq!(session.start(Role::Sales, "   "), Err(SessionError::BlankName));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn end_clears_user() {
        let mut session = Session::new();
        session.start(Role::Csuite, "Emily Executive").unwrap();
        let ended = session.end().unwrap();

        assert_eq!(ended.role, Role::Csuite);
        assert!(!session.is_authenticated());
        assert!(session.end().is_none());
    }

    #[test]
    fn restart_replaces_previous_login() {
        let mut session = Session::new();
        session.start(Role::Sales, "Sarah Sales").unwrap();
        let first = session.id();
        session.start(Role::Warehouse, "John Warehouse").unwrap();

        assert_ne!(session.id(), first);
        assert_eq!(session.require_user().unwrap().role, Role::Warehouse);
    }
}
