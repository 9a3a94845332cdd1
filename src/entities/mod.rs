//! Entity module - SeaORM entity definitions for the database.
//! The catalog keeps a single key-value table; every record is a JSON blob.

pub mod kv_entry;

pub use kv_entry::{Column as KvEntryColumn, Entity as KvEntry, Model as KvEntryModel};
