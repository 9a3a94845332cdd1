//! Site image overrides.
//!
//! Only replaced slots are stored, as a JSON object from slot key to picture.
//! Reads lay the stored object over the compiled-in defaults.

use super::Backend;
use crate::{
    errors::Result,
    models::{ImageMap, ImageSlot, ImageUpload},
    storage::{StoragePort, keys, read_json, write_json},
};
use std::collections::BTreeMap;
use tracing::info;

type Overrides = BTreeMap<String, String>;

async fn load_overrides<S: StoragePort>(store: &S) -> Result<Option<Overrides>> {
    read_json(store, keys::IMAGES).await
}

/// Defaults with every stored override on top.
pub async fn get_all_images<S: StoragePort>(backend: &Backend<S>) -> Result<ImageMap> {
    backend.simulate_latency().await;
    let overrides = load_overrides(backend.store()).await?.unwrap_or_default();
    Ok(ImageMap::merged(&overrides))
}

/// Encodes `upload` as a data URI and stores it as the override for `slot`.
///
/// # Errors
/// Returns [`crate::errors::Error::ImageRead`] when the upload is empty.
pub async fn update_image<S: StoragePort>(
    backend: &Backend<S>,
    slot: ImageSlot,
    upload: &ImageUpload,
) -> Result<()> {
    backend.simulate_latency().await;
    let data_uri = upload.to_data_uri()?;

    let _writes = backend.lock_writes().await;
    let mut overrides = load_overrides(backend.store()).await?.unwrap_or_default();
    overrides.insert(slot.key().to_string(), data_uri);
    write_json(backend.store(), keys::IMAGES, &overrides).await?;

    info!(
        "Replaced image {slot} with '{}' ({} bytes)",
        upload.file_name,
        upload.bytes.len()
    );
    Ok(())
}

/// Drops the override for `slot` so it falls back to its default.
pub async fn reset_image<S: StoragePort>(backend: &Backend<S>, slot: ImageSlot) -> Result<()> {
    backend.simulate_latency().await;
    let _writes = backend.lock_writes().await;
    let Some(mut overrides) = load_overrides(backend.store()).await? else {
        return Ok(());
    };

    if overrides.remove(slot.key()).is_some() {
        info!("Reset image {slot} to its default");
    }
    write_json(backend.store(), keys::IMAGES, &overrides).await
}
