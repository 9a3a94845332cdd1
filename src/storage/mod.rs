//! Persisted store - the durable key-value namespace behind the catalog.
//!
//! The catalog never talks to a database directly. It reads and writes whole
//! string values under fixed keys through [`StoragePort`], so the same backend
//! runs against `SQLite` in production and an in-memory map in tests.

/// In-memory store
pub mod memory;
/// `SQLite` store backed by the `kv_store` table
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::Result;
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;

/// Fixed keys of the four catalog records.
pub mod keys {
    /// Current admin session
    pub const USER: &str = "sto_user";
    /// Product collection
    pub const PRODUCTS: &str = "sto_products";
    /// Inquiry collection
    pub const INQUIRIES: &str = "sto_inquiries";
    /// Image override map
    pub const IMAGES: &str = "sto_images";
}

/// Get/set/remove of string values by key.
///
/// Implementations must make a completed `set` visible to every later `get`
/// on the same store.
pub trait StoragePort: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<()>> + Send;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Reads and decodes the JSON document stored under `key`.
pub async fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: StoragePort,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    tracing::debug!(key, bytes = raw.len(), "Read record");
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Encodes `value` as JSON and stores it under `key`.
pub async fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: StoragePort,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    tracing::debug!(key, bytes = raw.len(), "Writing record");
    store.set(key, raw).await
}

/// The store selected at startup.
#[derive(Debug)]
pub enum Store {
    /// Durable `SQLite` store
    Sqlite(SqliteStore),
    /// Process-local store, lost on exit
    Memory(MemoryStore),
}

impl StoragePort for Store {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Sqlite(store) => store.get(key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        match self {
            Self::Sqlite(store) => store.set(key, value).await,
            Self::Memory(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match self {
            Self::Sqlite(store) => store.remove(key).await,
            Self::Memory(store) => store.remove(key).await,
        }
    }
}
