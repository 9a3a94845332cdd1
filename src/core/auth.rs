//! Admin authentication.
//!
//! There is exactly one valid credential pair and no hashing. A successful
//! login persists the session so it survives restarts until logout.

use super::Backend;
use crate::{
    errors::{Error, Result},
    models::Session,
    storage::{StoragePort, keys, read_json, write_json},
};
use tracing::{info, warn};

/// The only accepted login email.
pub const ADMIN_EMAIL: &str = "admin@sto.com";
const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_UID: &str = "1";

/// Checks the credential pair and persists a session on an exact match.
///
/// # Errors
/// Returns [`Error::InvalidCredentials`] for any other pair, without touching
/// the stored session.
pub async fn login<S: StoragePort>(
    backend: &Backend<S>,
    email: &str,
    password: &str,
) -> Result<Session> {
    start_session(backend, email, password, None).await
}

/// Like [`login`], but records which chat user opened the session.
///
/// # Errors
/// Returns [`Error::InvalidCredentials`] for a wrong pair.
pub async fn login_as<S: StoragePort>(
    backend: &Backend<S>,
    owner: &str,
    email: &str,
    password: &str,
) -> Result<Session> {
    start_session(backend, email, password, Some(owner.to_string())).await
}

async fn start_session<S: StoragePort>(
    backend: &Backend<S>,
    email: &str,
    password: &str,
    owner: Option<String>,
) -> Result<Session> {
    backend.simulate_latency().await;

    if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
        warn!("Rejected login attempt for {email}");
        return Err(Error::InvalidCredentials);
    }

    let session = Session {
        uid: ADMIN_UID.to_string(),
        email: email.to_string(),
        owner,
    };
    write_json(backend.store(), keys::USER, &session).await?;
    info!("Admin {email} logged in");
    Ok(session)
}

/// Clears the stored session.
pub async fn logout<S: StoragePort>(backend: &Backend<S>) -> Result<()> {
    backend.simulate_latency().await;
    backend.store().remove(keys::USER).await?;
    info!("Admin logged out");
    Ok(())
}

/// Returns the stored session, if any. Used once at startup to restore state.
pub async fn current_user<S: StoragePort>(backend: &Backend<S>) -> Result<Option<Session>> {
    read_json(backend.store(), keys::USER).await
}
