use std::sync::Arc;

use relato_types::{AuthUser, CurrentUser, Session};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::gateway::Gateway;
use crate::{AuthError, Error, Result};

/// Owns the signed-in user for one client.
///
/// `start` subscribes to the gateway's session channel, `sync` applies
/// changes published since the last call, `shutdown` drops the subscription.
pub struct SessionManager {
    gateway: Arc<dyn Gateway>,
    changes: Option<watch::Receiver<Option<Session>>>,
    current: Option<CurrentUser>,
}

impl SessionManager {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            changes: None,
            current: None,
        }
    }

    pub fn start(&mut self) {
        let mut rx = self.gateway.subscribe();
        let session = rx.borrow_and_update().clone();
        self.changes = Some(rx);
        self.apply(session);
    }

    /// Apply a pending session change; returns whether there was one
    pub fn sync(&mut self) -> bool {
        let Some(rx) = self.changes.as_mut() else {
            return false;
        };
        if !rx.has_changed().unwrap_or(false) {
            return false;
        }
        let session = rx.borrow_and_update().clone();
        self.apply(session);
        true
    }

    pub fn shutdown(&mut self) {
        self.changes = None;
    }

    pub fn is_started(&self) -> bool {
        self.changes.is_some()
    }

    pub fn current(&self) -> Option<&CurrentUser> {
        self.current.as_ref()
    }

    pub fn require_user(&self) -> Result<&CurrentUser> {
        self.current
            .as_ref()
            .ok_or(Error::Auth(AuthError::NotSignedIn))
    }

    pub fn sign_up(&mut self, email: &str, password: &str, name: &str) -> Result<&CurrentUser> {
        let session = self.gateway.sign_up(email, password, name)?;
        self.accept(session)
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&CurrentUser> {
        let session = self.gateway.sign_in(email, password).inspect_err(|e| {
            warn!(error = %e, "sign in failed");
        })?;
        info!(user = %session.user.id, "signed in");
        self.accept(session)
    }

    /// Always clears the local user; a missing gateway session is not an error.
    pub fn sign_out(&mut self) -> Result<()> {
        let result = self.gateway.sign_out();
        self.current = None;
        self.mark_seen();

        match result {
            Ok(()) | Err(Error::Auth(AuthError::SessionMissing)) => Ok(()),
            Err(err) => {
                warn!(error = %err, "sign out failed at the gateway");
                Err(err)
            }
        }
    }

    /// Re-read name and avatar after a profile change
    pub fn refresh_profile(&mut self) {
        if let Some(user) = &self.current {
            let auth = AuthUser {
                id: user.id,
                email: user.email.clone(),
            };
            self.current = Some(self.hydrate(&auth));
        }
    }

    fn accept(&mut self, session: Session) -> Result<&CurrentUser> {
        self.mark_seen();
        let user = self.hydrate(&session.user);
        Ok(self.current.insert(user))
    }

    // The session we just applied was also published on the channel
    fn mark_seen(&mut self) {
        if let Some(rx) = self.changes.as_mut() {
            rx.borrow_and_update();
        }
    }

    fn apply(&mut self, session: Option<Session>) {
        self.current = session.map(|s| self.hydrate(&s.user));
    }

    /// Profile fields from `users`, falling back to the bare identity
    fn hydrate(&self, user: &AuthUser) -> CurrentUser {
        match self.gateway.fetch_profile(&user.id) {
            Ok(Some(profile)) => CurrentUser::hydrated(user, profile),
            Ok(None) => CurrentUser::from_auth(user),
            Err(err) => {
                warn!(user = %user.id, error = %err, "profile fetch failed, using auth identity");
                CurrentUser::from_auth(user)
            }
        }
    }
}
