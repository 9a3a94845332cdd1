//! Application settings loaded from config.toml
//!
//! Every section is optional; a missing file or a missing key falls back to
//! the built-in defaults, so the catalog runs without any configuration.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{path::Path, time::Duration};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Persistence settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Business details shown by the public commands
    #[serde(default)]
    pub site: SiteConfig,
}

/// Persistence settings
#[derive(Debug, Default, Deserialize, Clone)]
pub struct StoreConfig {
    /// Artificial delay applied before every backend operation, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
    /// Keep everything in memory instead of the database
    #[serde(default)]
    pub ephemeral: bool,
}

impl StoreConfig {
    /// Latency as a [`Duration`]
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Business contact details
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name of the vendor
    pub name: String,
    /// Street address
    pub address: String,
    /// Phone number
    pub phone: String,
    /// Contact email
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "STO Target System".to_string(),
            address: "124 Precision Drive, Suite 500, Austin, TX 78701".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "solutions@stotargets.com".to_string(),
        }
    }
}

/// Loads application configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads ./config.toml, or the defaults when the file does not exist
pub fn load_default_config() -> Result<AppConfig> {
    let path = Path::new("config.toml");
    if path.exists() {
        load_config(path)
    } else {
        tracing::info!("No config.toml found, using default settings.");
        Ok(AppConfig::default())
    }
}
