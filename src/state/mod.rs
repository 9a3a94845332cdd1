//! Application state - cached snapshots over the backend.
//!
//! Each provider fetches its resource on init, exposes the snapshot through a
//! `tokio::sync::watch` channel, and re-fetches after every mutation. The
//! providers are owned by [`AppState`], which `main` builds once and hands to
//! the front desk.

/// Admin session
pub mod auth;
/// Products and inquiries
pub mod content;
/// Site images
pub mod images;

pub use auth::AuthState;
pub use content::ContentState;
pub use images::ImageState;

use crate::{core::Backend, storage::StoragePort};
use std::sync::Arc;

/// The three providers over one shared backend.
#[derive(Debug)]
pub struct AppState<S> {
    /// Admin session
    pub auth: AuthState<S>,
    /// Products and inquiries
    pub content: ContentState<S>,
    /// Site images
    pub images: ImageState<S>,
    backend: Arc<Backend<S>>,
}

impl<S: StoragePort> AppState<S> {
    /// Builds every provider and loads its initial snapshot.
    pub async fn init(backend: Backend<S>) -> Self {
        let backend = Arc::new(backend);
        let auth = AuthState::init(Arc::clone(&backend)).await;
        let content = ContentState::init(Arc::clone(&backend)).await;
        let images = ImageState::init(Arc::clone(&backend)).await;
        tracing::info!(
            products = content.products().len(),
            inquiries = content.inquiries().len(),
            logged_in = auth.is_authenticated(),
            "Application state loaded"
        );
        Self {
            auth,
            content,
            images,
            backend,
        }
    }

    /// The shared backend.
    #[must_use]
    pub fn backend(&self) -> &Backend<S> {
        &self.backend
    }
}
