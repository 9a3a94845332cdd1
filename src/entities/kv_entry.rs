//! Key-value entity - One row per persisted catalog record.
//!
//! The catalog stores each of its records (session, products, inquiries,
//! image overrides) as a whole JSON document under a fixed key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key-value database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kv_store")]
pub struct Model {
    /// Record key (e.g., `"sto_products"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// JSON document stored under the key
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this record was last written
    pub updated_at: DateTime,
}

/// Key-value entries have no relationships
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
