//! The admin session persisted under the user key.

use serde::{Deserialize, Serialize};

/// The logged-in admin. At most one is persisted at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user id
    pub uid: String,
    /// Email used to log in
    pub email: String,
    /// Chat user who logged in, when the login came through the bot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Session {
    /// Whether `user_id` is the one who opened this session.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner.as_deref() == Some(user_id)
    }
}
