//! Session state.

use crate::{
    core::{Backend, auth},
    errors::Result,
    models::Session,
    storage::StoragePort,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::error;

/// Holds the current admin session, if any.
#[derive(Debug)]
pub struct AuthState<S> {
    backend: Arc<Backend<S>>,
    session: watch::Sender<Option<Session>>,
}

impl<S: StoragePort> AuthState<S> {
    /// Restores a persisted session. A store failure starts logged out.
    pub async fn init(backend: Arc<Backend<S>>) -> Self {
        let restored = auth::current_user(&backend)
            .await
            .inspect_err(|e| error!("Error restoring session: {e}"))
            .unwrap_or_default();
        let (session, _) = watch::channel(restored);
        Self { backend, session }
    }

    /// The logged-in admin.
    #[must_use]
    pub fn current_user(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Whether an admin is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Whether `user_id` opened the current session.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.session
            .borrow()
            .as_ref()
            .is_some_and(|s| s.is_owned_by(user_id))
    }

    /// Receiver notified on every login and logout.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }

    /// Logs in and records the session.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::InvalidCredentials`] for a wrong pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let user = auth::login(&self.backend, email, password).await?;
        self.session.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Logs in on behalf of chat user `owner`.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::InvalidCredentials`] for a wrong pair.
    pub async fn login_as(&self, owner: &str, email: &str, password: &str) -> Result<Session> {
        let user = auth::login_as(&self.backend, owner, email, password).await?;
        self.session.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Logs out and clears the session.
    pub async fn logout(&self) -> Result<()> {
        auth::logout(&self.backend).await?;
        self.session.send_replace(None);
        Ok(())
    }
}
