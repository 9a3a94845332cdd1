//! Shared test utilities for the catalog.
//!
//! Helpers for building backends over in-memory stores and creating records
//! with sensible defaults.

use crate::{
    core::{Backend, inquiry, product},
    errors::{Error, Result},
    models::{ImageUpload, Inquiry, NewInquiry, NewProduct, Product, ProductCategory},
    storage::{MemoryStore, SqliteStore, StoragePort},
};
use sea_orm::DatabaseConnection;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with the key-value table.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Backend over a fresh [`MemoryStore`] with no latency.
#[must_use]
pub fn memory_backend() -> Backend<MemoryStore> {
    Backend::new(MemoryStore::new())
}

/// Backend over a fresh in-memory `SQLite` database.
pub async fn sqlite_backend() -> Result<Backend<SqliteStore>> {
    Ok(Backend::new(SqliteStore::new(setup_test_db().await?)))
}

/// Product form data with sensible defaults.
///
/// # Defaults
/// * category: metal
/// * two features
/// * placeholder image
#[must_use]
pub fn sample_new_product(title: &str) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: format!("{title} for indoor ranges"),
        category: ProductCategory::Metal,
        features: vec!["AR500 Steel".to_string(), "Powder Coated".to_string()],
        ..NewProduct::default()
    }
}

/// Creates a product with [`sample_new_product`] defaults.
pub async fn create_test_product<S: StoragePort>(
    backend: &Backend<S>,
    title: &str,
) -> Result<Product> {
    product::create_product(backend, sample_new_product(title)).await
}

/// Inquiry form data with sensible defaults.
#[must_use]
pub fn sample_new_inquiry(name: &str) -> NewInquiry {
    NewInquiry::new(
        name.to_string(),
        format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        None,
        "Please send a quote for 500 B-27 targets.".to_string(),
    )
}

/// Creates an inquiry with [`sample_new_inquiry`] defaults.
pub async fn create_test_inquiry<S: StoragePort>(
    backend: &Backend<S>,
    name: &str,
) -> Result<Inquiry> {
    inquiry::create_inquiry(backend, sample_new_inquiry(name)).await
}

/// A tiny PNG upload.
#[must_use]
pub fn png_upload() -> ImageUpload {
    ImageUpload::new(
        "range.png".to_string(),
        Some("image/png".to_string()),
        vec![0x89, b'P', b'N', b'G'],
    )
}

/// A store that can be switched into failing every call.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl FlakyStore {
    /// Makes every following call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Io(std::io::Error::other("store unavailable")));
        }
        Ok(())
    }
}

impl StoragePort for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.check()?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.inner.remove(key).await
    }
}
