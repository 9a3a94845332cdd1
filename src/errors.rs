//! Unified error type for the catalog, its storage layer and the Discord front desk.

use thiserror::Error;

/// Every failure the catalog can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The backing database rejected an operation
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A stored blob could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Login attempted with anything other than the admin credential
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An admin operation was attempted without a session
    #[error("You must be logged in to do that")]
    Unauthorized,

    /// An uploaded image could not be read
    #[error("Failed to read image: {message}")]
    ImageRead {
        /// Reason the upload was rejected
        message: String,
    },

    /// A required form field was blank
    #[error("Field '{field}' is required")]
    MissingField {
        /// Name of the blank field
        field: &'static str,
    },

    /// A slot name that is not one of the site image slots
    #[error("Unknown image slot: {name}")]
    UnknownImageSlot {
        /// The rejected slot name
        name: String,
    },

    /// A category name outside the product category set
    #[error("Unknown product category: {name}")]
    UnknownCategory {
        /// The rejected category name
        name: String,
    },

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable was missing
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
