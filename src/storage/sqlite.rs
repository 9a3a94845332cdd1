//! `SQLite` store - persists each record as one row of the `kv_store` table.

use super::StoragePort;
use crate::{
    config::database,
    entities::{KvEntry, kv_entry},
    errors::Result,
};
use sea_orm::{Set, prelude::*, sea_query::OnConflict};

/// A [`StoragePort`] over a `SeaORM` connection.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: DatabaseConnection,
}

impl SqliteStore {
    /// Wraps an existing connection. The `kv_store` table must already exist.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connects to `database_url` and creates the table if needed.
    pub async fn open(database_url: &str) -> Result<Self> {
        let db = database::connect(database_url).await?;
        database::create_tables(&db).await?;
        Ok(Self::new(db))
    }

    /// The underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl StoragePort for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = KvEntry::find_by_id(key.to_string()).one(&self.db).await?;
        Ok(entry.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let entry = kv_entry::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(chrono::Utc::now().naive_utc()),
        };

        // One statement: two first writes of a key must not both insert
        KvEntry::insert(entry)
            .on_conflict(
                OnConflict::column(kv_entry::Column::Key)
                    .update_columns([kv_entry::Column::Value, kv_entry::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        KvEntry::delete_by_id(key.to_string()).exec(&self.db).await?;
        Ok(())
    }
}
