//! Resolved site images.

use crate::{
    core::{Backend, image},
    errors::Result,
    models::{ImageMap, ImageSlot, ImageUpload},
    storage::StoragePort,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::error;

/// Holds the picture currently shown for every slot.
#[derive(Debug)]
pub struct ImageState<S> {
    backend: Arc<Backend<S>>,
    images: watch::Sender<ImageMap>,
}

impl<S: StoragePort> ImageState<S> {
    /// Starts from the defaults, then loads stored overrides.
    pub async fn init(backend: Arc<Backend<S>>) -> Self {
        let (images, _) = watch::channel(ImageMap::defaults());
        let state = Self { backend, images };
        state.refresh().await;
        state
    }

    /// Current image map.
    #[must_use]
    pub fn images(&self) -> ImageMap {
        self.images.borrow().clone()
    }

    /// Picture currently shown in `slot`.
    #[must_use]
    pub fn get(&self, slot: ImageSlot) -> String {
        self.images.borrow().get(slot).to_string()
    }

    /// Receiver notified whenever the map is replaced.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ImageMap> {
        self.images.subscribe()
    }

    /// Re-fetches the map.
    pub async fn refresh(&self) {
        match image::get_all_images(&self.backend).await {
            Ok(images) => {
                self.images.send_replace(images);
            }
            Err(e) => error!("Error fetching images: {e}"),
        }
    }

    /// Stores `upload` for `slot` and refreshes.
    ///
    /// # Errors
    /// Upload failures are returned so the caller can tell the admin.
    pub async fn update_image(&self, slot: ImageSlot, upload: &ImageUpload) -> Result<()> {
        image::update_image(&self.backend, slot, upload)
            .await
            .inspect_err(|e| error!("Error updating image {slot}: {e}"))?;
        self.refresh().await;
        Ok(())
    }

    /// Restores the default for `slot` and refreshes.
    pub async fn reset_image(&self, slot: ImageSlot) -> Result<()> {
        image::reset_image(&self.backend, slot)
            .await
            .inspect_err(|e| error!("Error resetting image {slot}: {e}"))?;
        self.refresh().await;
        Ok(())
    }
}
