//! Discord command implementations organized by page.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Admin dashboard and image manager commands
pub mod admin;

/// Product catalog commands
pub mod catalog;

/// Contact form command
pub mod contact;

/// General utility and page commands
pub mod general;

/// Login, logout and session commands
pub mod session;

// Export commands
pub use admin::*;
pub use catalog::*;
pub use contact::*;
pub use general::*;
pub use session::*;
