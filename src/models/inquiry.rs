//! Contact inquiries submitted through the public contact form.

use super::require;
use crate::errors::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subjects offered by the contact form. The first is the default.
pub const SUBJECTS: [&str; 4] = [
    "General Inquiry",
    "Product Quote",
    "Support Request",
    "Custom Project",
];

/// A stored inquiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Unique identifier
    pub id: String,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Free-text message
    pub message: String,
    /// When the inquiry was received
    pub date: DateTime<Utc>,
}

/// Inquiry fields as entered in the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInquiry {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Free-text message
    pub message: String,
}

impl NewInquiry {
    /// Builds an inquiry with the default subject when none is given.
    #[must_use]
    pub fn new(name: String, email: String, subject: Option<String>, message: String) -> Self {
        let subject = subject
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| SUBJECTS[0].to_string());
        Self {
            name,
            email,
            subject,
            message,
        }
    }

    /// Checks the fields the contact form requires: name, email and message.
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("message", &self.message)
    }
}
